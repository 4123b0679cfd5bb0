use crate::descriptor::ArgumentDescriptor;

/// A field defined on an [`ObjectType`](crate::descriptor::ObjectType) or
/// [`InterfaceType`](crate::descriptor::InterfaceType).
///
/// The `type_signature` is the canonical folded form of the field's type
/// reference (e.g. `[ID!]!`), produced once at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    pub args: Vec<ArgumentDescriptor>,
    pub description: Option<String>,
    pub name: String,
    pub type_signature: String,
}
impl FieldDescriptor {
    /// Fields with at least one argument get a dedicated argument subsection
    /// in the rendered document.
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}
