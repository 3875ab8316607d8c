//! Parsing of Elasticsearch reply bodies into domain values.
//!
//! Replies are read as a generic JSON tree and navigated with a fixed set
//! of JSON-pointer paths, so unexpected extra fields are ignored.

use serde_json::Value;

use crate::model::{Person, SearchHit, SearchResponse};

const HITS_TOTAL: &str = "/hits/total/value";
const HITS_ARRAY: &str = "/hits/hits";
const HIT_SOURCE: &str = "/_source";

const FIRST_NAME: &str = "/name/first";
const LAST_NAME: &str = "/name/last";
const EMPLOYER: &str = "/employer";

/// Parse a `_search` reply body.
///
/// A missing or non-numeric `hits.total.value` counts as zero, yielding an
/// empty response regardless of what else the body contains. Hit order is
/// preserved as given by the backend.
pub fn search_response(data: &[u8]) -> Result<SearchResponse, serde_json::Error> {
    let node: Value = serde_json::from_slice(data)?;

    let total = node.pointer(HITS_TOTAL).and_then(Value::as_i64).unwrap_or(0);
    if total <= 0 {
        return Ok(SearchResponse::default());
    }

    let mut hits = Vec::new();
    if let Some(elements) = node.pointer(HITS_ARRAY).and_then(Value::as_array) {
        hits.reserve(elements.len());
        for hit in elements {
            let person = person_from(hit.pointer(HIT_SOURCE).unwrap_or(&Value::Null));
            hits.push(SearchHit {
                index: text_at(hit, "/_index"),
                id: text_at(hit, "/_id"),
                score: hit.pointer("/_score").and_then(Value::as_f64).unwrap_or(0.0) as f32,
                person,
            });
        }
    }
    Ok(SearchResponse { hits })
}

/// Parse a standalone person document body.
pub fn person(data: &[u8]) -> Result<Person, serde_json::Error> {
    let node: Value = serde_json::from_slice(data)?;
    Ok(person_from(&node))
}

// Shared between standalone person documents and a hit's `_source`.
fn person_from(node: &Value) -> Person {
    Person {
        first_name: text_at(node, FIRST_NAME),
        last_name: text_at(node, LAST_NAME),
        employer: text_at(node, EMPLOYER),
    }
}

// String coercion at a JSON pointer: strings verbatim, numbers and booleans
// in their text form, anything else (including an absent path) empty.
fn text_at(node: &Value, pointer: &str) -> String {
    match node.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
