//! Conversions between `serde_json` documents and mergeable mappings.
//!
//! JSON objects convert into nested [`Mapping`]s, so a merge recurses into
//! them. Every other JSON value becomes an opaque leaf and is replaced
//! wholesale on collision. Arrays are leaves too: a source array replaces a
//! destination array outright, and objects inside an array are never merged
//! element by element. Converting back assembles a plain
//! [`serde_json::Value`] again.

use thiserror::Error;

use crate::{Mapping, Value};

/// A [`Value`] whose leaves are raw [`serde_json::Value`]s.
pub type JsonValue = Value<serde_json::Value>;

/// A [`Mapping`] whose leaves are raw [`serde_json::Value`]s.
///
/// # Examples
///
/// ```rust
/// use deep_merge::{JsonMapping, merge};
/// use serde_json::json;
///
/// let base = JsonMapping::try_from(json!({"server": {"port": 8080}}))?;
/// let layer = JsonMapping::try_from(json!({"server": {"tls": true}}))?;
///
/// let merged = merge(None, [&base, &layer])?;
/// assert_eq!(
///     serde_json::Value::from(merged),
///     json!({"server": {"port": 8080, "tls": true}}),
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub type JsonMapping = Mapping<serde_json::Value>;

/// Error returned when a JSON value that is not an object is converted into
/// a [`JsonMapping`].
#[derive(Debug, Error)]
#[error("expected a JSON object, found {kind}")]
pub struct NotAMapping {
    kind: &'static str,
}

impl NotAMapping {
    /// Names the kind of JSON value that was rejected, as rendered in the
    /// error message.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(object) => Self::Map(object.into()),
            leaf => Self::Leaf(leaf),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for JsonMapping {
    fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object
            .into_iter()
            .map(|(key, value)| (key, JsonValue::from(value)))
            .collect()
    }
}

impl TryFrom<serde_json::Value> for JsonMapping {
    type Error = NotAMapping;

    /// Converts a JSON document into a mapping, requiring the top level to
    /// be an object.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(object) => Ok(object.into()),
            other => Err(NotAMapping {
                kind: json_kind(&other),
            }),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        match value {
            Value::Map(mapping) => Self::Object(mapping.into()),
            Value::Leaf(leaf) => leaf,
        }
    }
}

impl From<JsonMapping> for serde_json::Map<String, serde_json::Value> {
    fn from(mapping: JsonMapping) -> Self {
        mapping
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::from(value)))
            .collect()
    }
}

impl From<JsonMapping> for serde_json::Value {
    fn from(mapping: JsonMapping) -> Self {
        Self::Object(mapping.into())
    }
}
