// ## File: `src/canonical/extract.rs`

//! Ordered value extraction.
//!
//! - Flat (query) params: keys sorted by code point, one text per key.
//! - Nested (body) params: depth-first walk, keys sorted at every map level,
//!   sequences in given order, nulls skipped.
//! Nothing is de-duplicated or filtered by type.

use crate::canonical::types::CanonicalError;
use crate::canonical::value::{ParamValue, QueryParams};

/// Extract values from flat query params, ordered by key.
///
/// Errors:
/// - `CanonicalError::NestedInFlat` when a value is a sequence or map.
pub fn extract_flat(params: &QueryParams) -> Result<Vec<String>, CanonicalError> {
    let mut sorted: Vec<(&str, &ParamValue)> = params.iter().collect();
    // stable, so duplicate keys keep their relative order
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    sorted
        .into_iter()
        .map(|(key, value)| {
            value.scalar_text().ok_or_else(|| CanonicalError::NestedInFlat {
                key: key.to_string(),
                kind: value.kind(),
            })
        })
        .collect()
}

/// Extract every scalar leaf of a nested payload in canonical order.
pub fn extract_nested(body: &ParamValue) -> Vec<String> {
    let mut out = Vec::new();
    walk(body, &mut out);
    out
}

fn walk(value: &ParamValue, out: &mut Vec<String>) {
    match value {
        ParamValue::Null => {}
        ParamValue::Seq(items) => {
            for item in items {
                walk(item, out);
            }
        }
        ParamValue::Map(entries) => {
            let mut sorted: Vec<&(String, ParamValue)> = entries.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, v) in sorted {
                walk(v, out);
            }
        }
        scalar => {
            if let Some(text) = scalar.scalar_text() {
                out.push(text);
            }
        }
    }
}
