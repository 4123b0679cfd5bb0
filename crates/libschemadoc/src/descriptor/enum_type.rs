/// Information associated with [`TypeDescriptor::Enum`](crate::descriptor::TypeDescriptor::Enum).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub description: Option<String>,
    pub name: String,
    pub values: Vec<EnumValueDescriptor>,
}

/// A declared value of some [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDescriptor {
    pub description: Option<String>,
    pub name: String,
}
