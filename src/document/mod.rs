pub mod author;
pub mod document;

pub use crate::types::identifiers::{AuthorId, DocumentId, IdentifierError};
pub use author::Author;
pub use document::{Document, DocumentDraft};
