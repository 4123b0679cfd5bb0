//! Static style and script blocks embedded into every document artifact.
//!
//! Composed once per render call, never mutated.

pub(crate) const STYLE: &str = "
    <style>
    body { margin:0; font-family:Arial, sans-serif; }
    #sidebar {
      position:fixed; left:0; top:0; bottom:0;
      width:250px; background:#f8f9fa;
      border-right:1px solid #ddd;
      padding:10px; overflow:auto;
    }
    .sidebar-section { margin-bottom:15px; }
    .section-header { font-weight:bold; cursor:pointer; padding:5px; background:#e9ecef; border:1px solid #ddd; }
    .section-header:hover { background:#dee2e6; }
    .collapsed { display:none; }
    .expanded { display:block; }
    #sidebar ul { list-style:none; padding-left:10px; margin:0; }
    #sidebar li { margin:4px 0; }
    #sidebar a { text-decoration:none; color:#333; }
    #sidebar a.active { font-weight:bold; color:#007bff; }
    #content { margin-left:270px; padding:30px; background:#fff; }
    table { border-collapse:collapse; width:100%; margin-bottom:20px; }
    th, td { border:1px solid #ddd; padding:8px; text-align:left; }
    th { background:#f1f1f1; }
    h1 { margin-top:40px; border-bottom:2px solid #ddd; padding-bottom:5px; }
    h2 { margin-top:30px; color:#2c3e50; }
    h3 { margin-top:20px; }
    </style>
    ";

// The scroll handler is the in-document counterpart of
// `sidebar::active_anchor`: same reference offset, same containment test.
pub(crate) const SCRIPT: &str = "
    <script>
    function toggleSection(header) {
      const ul = header.nextElementSibling;
      ul.classList.toggle('collapsed');
      ul.classList.toggle('expanded');
    }
    window.addEventListener('scroll', () => {
      let fromTop = window.scrollY + 10;
      document.querySelectorAll('#sidebar a').forEach(link => {
        let section = document.querySelector(link.getAttribute('href'));
        if (section && section.offsetTop <= fromTop && section.offsetTop + section.offsetHeight > fromTop) {
          link.classList.add('active');
        } else {
          link.classList.remove('active');
        }
      });
    });
    </script>
    ";
