use serde::{Deserialize, Serialize};

use crate::types::identifiers::AuthorId;

/// Document author. Search only ever compares by `id`; the display name is
/// carried verbatim for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: Option<String>,
}

impl Author {
    pub fn new(id: AuthorId) -> Self {
        Author { id, name: None }
    }

    pub fn named(id: AuthorId, name: impl Into<String>) -> Self {
        Author {
            id,
            name: Some(name.into()),
        }
    }
}
