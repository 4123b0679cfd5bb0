use crate::descriptor::EnumType;
use crate::descriptor::InputObjectType;
use crate::descriptor::InterfaceType;
use crate::descriptor::ObjectType;
use crate::descriptor::ScalarType;
use crate::descriptor::UnionType;
use crate::index::Category;

/// Represents a named type defined by the schema.
///
/// Each variant carries only the data relevant to its kind, so rendering
/// dispatch is an exhaustive match rather than a string-keyed branch table.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDescriptor {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl TypeDescriptor {
    /// The display category this descriptor is grouped and anchored under.
    pub fn category(&self) -> Category {
        match self {
            TypeDescriptor::Enum(_) => Category::Enum,
            TypeDescriptor::InputObject(_) => Category::Input,
            TypeDescriptor::Interface(_) => Category::Interface,
            TypeDescriptor::Object(_) => Category::Type,
            TypeDescriptor::Scalar(_) => Category::Scalar,
            TypeDescriptor::Union(_) => Category::Union,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Enum(t) => t.description.as_deref(),
            TypeDescriptor::InputObject(t) => t.description.as_deref(),
            TypeDescriptor::Interface(t) => t.description.as_deref(),
            TypeDescriptor::Object(t) => t.description.as_deref(),
            TypeDescriptor::Scalar(t) => t.description.as_deref(),
            TypeDescriptor::Union(t) => t.description.as_deref(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Enum(t) => t.name.as_str(),
            TypeDescriptor::InputObject(t) => t.name.as_str(),
            TypeDescriptor::Interface(t) => t.name.as_str(),
            TypeDescriptor::Object(t) => t.name.as_str(),
            TypeDescriptor::Scalar(t) => t.name.as_str(),
            TypeDescriptor::Union(t) => t.name.as_str(),
        }
    }
}
