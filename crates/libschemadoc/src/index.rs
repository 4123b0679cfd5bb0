use crate::descriptor::TypeDescriptor;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// The display grouping a descriptor is anchored under.
///
/// Category prefixes are distinct, so a query and a type sharing a name can
/// never collide on an anchor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Enum,
    Input,
    Interface,
    Query,
    Scalar,
    Type,
    Union,
}
impl Category {
    /// The anchor prefix for this category.
    pub fn prefix(&self) -> &'static str {
        match self {
            Category::Enum => "enum",
            Category::Input => "input",
            Category::Interface => "interface",
            Category::Query => "query",
            Category::Scalar => "scalar",
            Category::Type => "type",
            Category::Union => "union",
        }
    }

    /// The document-wide unique anchor for a named member of this category.
    pub fn anchor(&self, name: &str) -> String {
        format!("{}-{name}", self.prefix())
    }
}
impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A lookup from bare type name to display category, built once from the
/// full sanitized descriptor set.
///
/// A name missing from the index is expected and not an error: built-in
/// scalars are intentionally excluded from the record set.
#[derive(Clone, Debug)]
pub struct SchemaIndex {
    entries: IndexMap<String, Category>,
}
impl SchemaIndex {
    pub fn new(types: &BTreeMap<String, TypeDescriptor>) -> Self {
        SchemaIndex {
            entries: types.values()
                .map(|descriptor| {
                    (descriptor.name().to_string(), descriptor.category())
                })
                .collect(),
        }
    }

    /// The display category of a defined type, or `None` for names absent
    /// from the index.
    pub fn kind_of(&self, bare_name: &str) -> Option<Category> {
        self.entries.get(bare_name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
