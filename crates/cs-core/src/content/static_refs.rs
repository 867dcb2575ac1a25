//! Scanning block fields for `/static/<filename>` references.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use super::block::Block;

/// Course-relative references only: the path must open the string or follow
/// a quote or `(`, so `https://host/static/x` is not a course asset.
fn static_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:^|["'(])/static/([^"'\s?#<>()\\]+)"#)
            .expect("static reference pattern is valid")
    })
}

fn collect(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            for caps in static_reference_pattern().captures_iter(s) {
                let path = caps[1].trim_end_matches('/');
                if path.is_empty() {
                    continue;
                }
                if !out.iter().any(|seen| seen == path) {
                    out.push(path.to_string());
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect(item, out)),
        _ => {}
    }
}

/// Static asset paths referenced by a block's fields, in encounter order,
/// without duplicates.
pub fn static_references(block: &Block) -> Vec<String> {
    let mut out = Vec::new();
    for value in block.fields.values() {
        collect(value, &mut out);
    }
    out
}
