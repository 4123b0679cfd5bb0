/// Information associated with [`TypeDescriptor::Union`](crate::descriptor::TypeDescriptor::Union).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub description: Option<String>,
    pub name: String,
    pub possible_types: Vec<String>,
}
