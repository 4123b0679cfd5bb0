use crate::descriptor::FieldDescriptor;

/// Information associated with [`TypeDescriptor::Interface`](crate::descriptor::TypeDescriptor::Interface).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    pub name: String,
}
