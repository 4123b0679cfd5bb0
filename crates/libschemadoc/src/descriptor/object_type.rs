use crate::descriptor::FieldDescriptor;

/// Information associated with [`TypeDescriptor::Object`](crate::descriptor::TypeDescriptor::Object).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    pub name: String,
}
