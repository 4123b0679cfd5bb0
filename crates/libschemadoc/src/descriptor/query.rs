use crate::descriptor::ArgumentDescriptor;

/// A single query operation exposed by the schema's root query type.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryDescriptor {
    pub args: Vec<ArgumentDescriptor>,
    pub description: Option<String>,
    pub name: String,
    pub return_type_signature: String,
}
