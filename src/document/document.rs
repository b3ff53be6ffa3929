use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::Author;
use crate::types::identifiers::DocumentId;

/// The stored entity.
///
/// Every instance has passed identity assignment: `id` and `created` are
/// always present here. Only a [`DocumentDraft`] may leave them open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

/// Caller-supplied input to [`DocumentStore::save`], before identity
/// assignment.
///
/// [`DocumentStore::save`]: crate::store::DocumentStore::save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub id: Option<DocumentId>,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}

impl DocumentDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        DocumentDraft {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    /// Address an existing document, or pick the id up front.
    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Supply an explicit creation timestamp. Honored on first insert only;
    /// an update keeps the stored document's original `created`.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}
