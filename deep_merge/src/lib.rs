//! Deep, recursive merging of nested string-keyed mappings.
//!
//! A [`Mapping`] holds [`Value`]s that are either nested mappings or opaque
//! leaves. Merging applies each source over a destination in order, so
//! later sources take precedence:
//!
//! * a key present on only one side is kept,
//! * a key that is a map on both sides is merged recursively,
//! * any other collision replaces the destination entry with the source
//!   entry.
//!
//! Sources are read through shared references and deep-cloned before any
//! entry lands in the result, so merging never mutates a source and the
//! result never aliases one. Sources nesting beyond a configurable depth
//! limit are rejected with a [`MergeError`] that names the full key path.
//!
//! ```rust
//! use deep_merge::{Mapping, Value, merge};
//!
//! let mut defaults = Mapping::new();
//! defaults.insert("greeting", Value::Leaf("hello"));
//! defaults.insert("subject", Value::Leaf("world"));
//!
//! let mut overrides = Mapping::new();
//! overrides.insert("subject", Value::Leaf("crate"));
//!
//! let merged = merge(None, [&defaults, &overrides])?;
//! assert_eq!(merged.get("greeting"), Some(&Value::Leaf("hello")));
//! assert_eq!(merged.get("subject"), Some(&Value::Leaf("crate")));
//! # Ok::<(), deep_merge::MergeError>(())
//! ```
//!
//! With the default `serde_json` feature enabled, `JsonMapping` converts
//! JSON documents into mergeable mappings and back: objects become nested
//! maps, while arrays and scalars ride along as opaque leaves.

mod error;
mod mapping;
mod merger;
mod value;

#[cfg(feature = "serde_json")]
mod json;

pub use error::{MergeError, MergeResult};
pub use mapping::Mapping;
pub use merger::{DEFAULT_MAX_DEPTH, Merger, merge, merge_into};
pub use value::Value;

#[cfg(feature = "serde_json")]
pub use json::{JsonMapping, JsonValue, NotAMapping};
