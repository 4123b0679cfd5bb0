use crate::descriptor::QueryDescriptor;
use crate::descriptor::TypeDescriptor;
use crate::index::Category;
use crate::render::GROUP_ORDER;
use std::collections::BTreeMap;

/// Vertical distance (in CSS pixels) between the top of the viewport and
/// the reference point used for scroll tracking.
pub const SCROLL_REFERENCE_OFFSET: f64 = 10.0;

/// The vertical span one rendered section occupies in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub anchor: String,
    pub height: f64,
    pub top: f64,
}

/// Selects the sidebar link that should be marked active for a given
/// scroll position.
///
/// A section is active when its span contains the reference point
/// ([`SCROLL_REFERENCE_OFFSET`] below the scroll position); the first match
/// wins, so at most one link is ever active. The selection is a pure
/// function of its inputs: recomputing on an unchanged position returns the
/// same anchor. The document's embedded scroll handler applies the same
/// rule client-side.
pub fn active_anchor(spans: &[SectionSpan], scroll_position: f64) -> Option<&str> {
    let reference_point = scroll_position + SCROLL_REFERENCE_OFFSET;
    spans.iter()
        .find(|span| {
            span.top <= reference_point
                && span.top + span.height > reference_point
        })
        .map(|span| span.anchor.as_str())
}

/// One collapsible group of leaf links in the navigation sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarSection {
    category: Category,
    collapsed: bool,
    entries: Vec<String>,
    label: &'static str,
}
impl SidebarSection {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Member names in the same sorted order the content region renders
    /// them.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn label(&self) -> &str {
        self.label
    }

    /// Flips this section's collapsed state. The flag is presentation-only;
    /// repeated toggles alternate it and never touch the entries.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    fn to_html(&self) -> String {
        let state = if self.collapsed { "collapsed" } else { "expanded" };
        let mut lines = vec![format!(
            "<div class='sidebar-section'>\
            <div class='section-header' onclick='toggleSection(this)'>{label}</div>\
            <ul class='{state}'>",
            label = self.label,
        )];
        for name in &self.entries {
            lines.push(format!(
                "<li><a href='#{anchor}'>{name}</a></li>",
                anchor = self.category.anchor(name),
            ));
        }
        lines.push("</ul></div>".to_string());
        lines.join("\n")
    }
}

/// The collapsible group/leaf index synchronized with the content region.
///
/// Built from the same group table and name-sorted member lists as the
/// content, so every leaf link targets an anchor that exists.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationSidebar {
    sections: Vec<SidebarSection>,
}
impl NavigationSidebar {
    pub fn new(
        queries: &BTreeMap<String, QueryDescriptor>,
        types: &BTreeMap<String, TypeDescriptor>,
    ) -> Self {
        let sections = GROUP_ORDER.iter()
            .map(|&(label, category)| {
                let entries = match category {
                    Category::Query =>
                        queries.keys().cloned().collect(),
                    _ => types.values()
                        .filter(|descriptor| descriptor.category() == category)
                        .map(|descriptor| descriptor.name().to_string())
                        .collect(),
                };
                SidebarSection {
                    category,
                    collapsed: true,
                    entries,
                    label,
                }
            })
            .collect();
        NavigationSidebar { sections }
    }

    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [SidebarSection] {
        &mut self.sections
    }

    pub fn to_html(&self) -> String {
        let mut lines = vec!["<div id='sidebar'>".to_string()];
        for section in &self.sections {
            lines.push(section.to_html());
        }
        lines.push("</div>".to_string());
        lines.join("\n")
    }
}
