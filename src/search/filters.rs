use crate::document::Document;
use crate::search::request::SearchRequest;

/// Conjunction of every present criterion in `request`.
pub fn matches(doc: &Document, request: &SearchRequest) -> bool {
    matches_title(doc, request)
        && matches_content(doc, request)
        && matches_author(doc, request)
        && matches_created(doc, request)
}

fn matches_title(doc: &Document, request: &SearchRequest) -> bool {
    match &request.title_terms {
        Some(terms) => contains_all(&doc.title, terms),
        None => true,
    }
}

fn matches_content(doc: &Document, request: &SearchRequest) -> bool {
    match &request.contains_contents {
        Some(substrings) => contains_all(&doc.content, substrings),
        None => true,
    }
}

fn matches_author(doc: &Document, request: &SearchRequest) -> bool {
    match &request.author_ids {
        Some(ids) => ids.contains(&doc.author.id),
        None => true,
    }
}

// Both bounds are exclusive: a document created exactly at a bound is out.
fn matches_created(doc: &Document, request: &SearchRequest) -> bool {
    let after_from = request
        .created_from
        .map_or(true, |from| doc.created > from);
    let before_to = request.created_to.map_or(true, |to| doc.created < to);
    after_from && before_to
}

fn contains_all(haystack: &str, needles: &[String]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle.as_str()))
}
