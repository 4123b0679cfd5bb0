/// Information associated with [`TypeDescriptor::Scalar`](crate::descriptor::TypeDescriptor::Scalar).
///
/// Scalars carry no per-instance structure; the document renders a fixed
/// descriptive sentence for each one.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub description: Option<String>,
    pub name: String,
}
