mod assembler;
mod assets;
mod sidebar;

pub use assembler::DocumentAssembler;
pub use sidebar::NavigationSidebar;
pub use sidebar::SCROLL_REFERENCE_OFFSET;
pub use sidebar::SectionSpan;
pub use sidebar::SidebarSection;
pub use sidebar::active_anchor;

use crate::index::Category;

/// Fixed group ordering shared by the content region and the sidebar.
///
/// Both regions are built from this one table (and from name-sorted member
/// lists), so their anchors and ordering can never diverge.
pub(crate) const GROUP_ORDER: [(&str, Category); 7] = [
    ("Queries", Category::Query),
    ("Types", Category::Type),
    ("Inputs", Category::Input),
    ("Enums", Category::Enum),
    ("Scalars", Category::Scalar),
    ("Interfaces", Category::Interface),
    ("Unions", Category::Union),
];
