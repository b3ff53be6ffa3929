use chrono::Utc;

use crate::document::{Document, DocumentDraft};
use crate::search::{self, SearchRequest};
use crate::types::identifiers::DocumentId;

/// In-memory document store.
///
/// The collection is insertion-ordered and an upsert replaces the existing
/// entry in place, so a document's position stays stable for its lifetime.
/// Every lookup is a linear scan of the full collection.
///
/// Mutation requires `&mut self`: the exclusive-writer discipline is
/// enforced by the borrow checker. Callers that share a store across
/// threads wrap it in their own lock.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            documents: Vec::new(),
        }
    }

    /// Upsert keyed by id.
    ///
    /// A draft without an id gets a freshly generated one. On first insert,
    /// `created` is the draft's value if supplied, otherwise the current
    /// instant. On update the stored entry is replaced wholesale except for
    /// `created`, which is always carried over from the existing record,
    /// whatever the draft says.
    ///
    /// Returns the stored document, post assignment.
    pub fn save(&mut self, draft: DocumentDraft) -> Document {
        let id = draft.id.unwrap_or_else(DocumentId::generate);

        let existing = self.documents.iter().position(|doc| doc.id == id);
        let created = match existing {
            Some(pos) => self.documents[pos].created,
            None => draft.created.unwrap_or_else(Utc::now),
        };

        let document = Document {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created,
        };

        match existing {
            Some(pos) => self.documents[pos] = document.clone(),
            None => self.documents.push(document.clone()),
        }

        document
    }

    /// First stored document whose id equals `id` exactly. Absence is
    /// `None`, never an error.
    pub fn find_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id.as_str() == id)
    }

    /// All stored documents satisfying every present criterion of
    /// `request`, in insertion order. No pagination; the full matching set
    /// is returned each call.
    pub fn search(&self, request: &SearchRequest) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|doc| search::matches(doc, request))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Stored documents in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }
}
