use chrono::{TimeZone, Utc};
use docstore::document::{Author, AuthorId, Document, DocumentId};
use docstore::search::SearchRequest;
use serde_json::Value;

fn sample_document() -> Document {
    Document {
        id: DocumentId::new("doc-1").unwrap(),
        title: "Learn Rust".to_string(),
        content: "Ownership and borrowing".to_string(),
        author: Author::named(AuthorId::new("1").unwrap(), "Ada"),
        created: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
    }
}

#[test]
fn golden_document_serialization() {
    let doc = sample_document();
    let json_str = serde_json::to_string(&doc).unwrap();

    // Identifiers are transparent newtypes, timestamps RFC 3339
    let expected = r#"{"id":"doc-1","title":"Learn Rust","content":"Ownership and borrowing","author":{"id":"1","name":"Ada"},"created":"2024-01-15T09:30:00Z"}"#;
    assert_eq!(json_str, expected);

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(parsed["id"], Value::String("doc-1".to_string()));
    assert_eq!(parsed["author"]["id"], Value::String("1".to_string()));
}

#[test]
fn document_roundtrips_through_json() {
    let doc = sample_document();

    let json_str = serde_json::to_string(&doc).unwrap();
    let restored: Document = serde_json::from_str(&json_str).unwrap();

    assert_eq!(restored, doc);
}

#[test]
fn empty_request_object_deserializes_to_unconstrained() {
    let request: SearchRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(request, SearchRequest::default());
}

#[test]
fn request_roundtrips_through_json() {
    let json = r#"{
        "title_terms": ["Learn"],
        "contains_contents": ["Basics"],
        "author_ids": ["1", "2"],
        "created_from": "2024-01-01T00:00:00Z",
        "created_to": "2024-06-01T00:00:00Z"
    }"#;

    let request: SearchRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.title_terms.as_deref(), Some(["Learn".to_string()].as_slice()));
    assert!(request
        .author_ids
        .as_ref()
        .unwrap()
        .contains(&AuthorId::new("2").unwrap()));

    let restored: SearchRequest =
        serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
    assert_eq!(restored, request);
}
