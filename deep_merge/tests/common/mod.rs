//! Shared helpers for the integration suites.

use deep_merge::JsonMapping;

/// Converts a JSON document into a mapping, panicking when the document is
/// not an object.
pub fn mapping(document: serde_json::Value) -> JsonMapping {
    JsonMapping::try_from(document).expect("test document is a JSON object")
}
