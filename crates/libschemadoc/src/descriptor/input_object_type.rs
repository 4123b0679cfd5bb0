/// Information associated with [`TypeDescriptor::InputObject`](crate::descriptor::TypeDescriptor::InputObject).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub description: Option<String>,
    pub input_fields: Vec<InputFieldDescriptor>,
    pub name: String,
}

/// A field declared on some [`InputObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldDescriptor {
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub name: String,
    pub type_signature: String,
}
