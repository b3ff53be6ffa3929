use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum IdentifierError {
    #[error("Identifier must not be empty")]
    Empty,
}

/// Unique document identifier within a store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a DocumentId from an externally supplied string.
    ///
    /// Empty and all-whitespace input is rejected: an absent id is modelled
    /// as `None` on the draft, never as an empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(DocumentId(id))
    }

    /// Generate a fresh random id (hyphenated UUID v4).
    pub fn generate() -> Self {
        DocumentId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author identifier. Same construction rules as [`DocumentId`], but never
/// generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(AuthorId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
