/// An argument declared on a [`FieldDescriptor`](crate::descriptor::FieldDescriptor)
/// or [`QueryDescriptor`](crate::descriptor::QueryDescriptor).
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDescriptor {
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub name: String,
    pub type_signature: String,
}
