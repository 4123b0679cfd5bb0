mod artifact;
pub mod descriptor;
mod error;
mod index;
mod link;
mod loader;
pub mod render;
mod sanitize;
mod signature;

pub use artifact::write_document;
pub use error::DocBuildError;
pub use index::Category;
pub use index::SchemaIndex;
pub use link::link_signature;
pub use loader::load_queries;
pub use loader::load_types;
pub use sanitize::sanitize_text;
pub use sanitize::sanitize_tree;
pub use signature::UNKNOWN_SIGNATURE;
pub use signature::resolve_signature;

#[cfg(test)]
mod tests;
