pub mod identifiers;

pub use identifiers::{AuthorId, DocumentId, IdentifierError};
