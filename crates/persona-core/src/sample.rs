//! Built-in answer set used by the smoke-test endpoint.

use serde_json::json;

use crate::validate::RawResponses;

/// A complete, valid answer to every catalog question.
pub fn sample_responses() -> RawResponses {
    [
        ("1", json!(4)),
        ("2", json!("yes")),
        ("3", json!("no")),
        ("4", json!(3)),
        ("5", json!("yes")),
        ("6", json!("Sometimes")),
        ("7", json!(5)),
        ("8", json!("no")),
        ("9", json!("Very likely")),
        ("10", json!(2)),
        ("11", json!("yes")),
        ("12", json!("Often")),
        ("13", json!(5)),
        ("14", json!("yes")),
        ("15", json!("no")),
        ("16", json!(4)),
        ("17", json!("yes")),
        ("18", json!(5)),
        ("19", json!("yes")),
        ("20", json!(3)),
    ]
    .into_iter()
    .map(|(index, answer)| (index.to_string(), answer))
    .collect()
}
