use serde::Deserialize;

/// A (possibly wrapper-nested) reference to a named type.
///
/// Introspection results wrap the named leaf in an arbitrarily deep chain of
/// nullability and list modifiers; [`resolve_signature`](crate::resolve_signature)
/// collapses a chain into its canonical display form.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    List { inner: Option<Box<TypeRef>> },
    Named { name: String },
    NonNull { inner: Option<Box<TypeRef>> },
}

/// The wire shape of a type reference as introspection emits it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireTypeRef {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<WireTypeRef>>,
}
impl WireTypeRef {
    pub(crate) fn into_type_ref(self) -> Option<TypeRef> {
        let inner = self.of_type.and_then(|wire| wire.into_type_ref());
        match self.kind.as_deref() {
            Some("LIST") => Some(TypeRef::List {
                inner: inner.map(Box::new),
            }),

            Some("NON_NULL") => Some(TypeRef::NonNull {
                inner: inner.map(Box::new),
            }),

            // Any other kind is a leaf. A leaf without a name (which a
            // malformed record can produce) degrades to the inner chain, if
            // any.
            _ => self.name
                .map(|name| TypeRef::Named { name })
                .or(inner),
        }
    }
}
