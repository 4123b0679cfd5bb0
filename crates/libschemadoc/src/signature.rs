use crate::descriptor::TypeRef;

/// Sentinel signature rendered when a type reference is absent or its
/// wrapper chain never reaches a named leaf.
pub const UNKNOWN_SIGNATURE: &str = "Unknown";

enum Modifier {
    List,
    NonNull,
}

/// Collapses a (possibly wrapper-nested) type reference into its canonical
/// display signature.
///
/// Modifiers are collected from outermost to innermost, then folded back
/// onto the leaf name from innermost to outermost: `LIST` wraps the current
/// string in `[ ]` and `NON_NULL` appends a trailing `!`. For example
/// `NON_NULL(LIST(NON_NULL(ID)))` folds to `[ID!]!`.
///
/// A `None` reference, or a wrapper chain that bottoms out without a named
/// leaf, resolves to [`UNKNOWN_SIGNATURE`] as a whole; no partial signature
/// is emitted. The chain is walked iteratively, so nesting depth is
/// unbounded.
pub fn resolve_signature(type_ref: Option<&TypeRef>) -> String {
    let mut modifiers = vec![];
    let mut current = type_ref;
    let leaf_name = loop {
        match current {
            None => return UNKNOWN_SIGNATURE.to_string(),

            Some(TypeRef::List { inner }) => {
                modifiers.push(Modifier::List);
                current = inner.as_deref();
            },

            Some(TypeRef::NonNull { inner }) => {
                modifiers.push(Modifier::NonNull);
                current = inner.as_deref();
            },

            Some(TypeRef::Named { name }) => break name,
        }
    };

    modifiers.iter().rev().fold(
        leaf_name.to_string(),
        |signature, modifier| match modifier {
            Modifier::List => format!("[{signature}]"),
            Modifier::NonNull => format!("{signature}!"),
        },
    )
}
