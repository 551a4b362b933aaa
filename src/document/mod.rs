pub mod document;

pub use crate::types::identifiers::DocumentId;
pub use document::{Document, DocumentType};
