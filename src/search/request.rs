use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::AuthorId;

/// Multi-criteria query.
///
/// Every field is optional; `None` leaves that axis unconstrained. Criteria
/// combine conjunctively: a document matches only if every present criterion
/// holds. `SearchRequest::default()` therefore matches every stored
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Title terms, each required to occur somewhere in the title. This is
    /// substring containment, not prefix anchoring, despite the historical
    /// "prefixes" name of the criterion. An empty list matches everything.
    pub title_terms: Option<Vec<String>>,
    /// Content substrings, each required to occur in the content. Empty
    /// list matches everything.
    pub contains_contents: Option<Vec<String>>,
    /// Accepted author ids. Membership test, so the empty set matches
    /// nothing.
    pub author_ids: Option<BTreeSet<AuthorId>>,
    /// Exclusive lower bound on `created`.
    pub created_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created`.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }
}
