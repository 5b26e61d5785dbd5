//! Failures raised while merging mappings.
//!
//! A failure inside a nested mapping is wrapped in [`MergeError::Nested`]
//! once per level on the way out, so the rendered message spells out the
//! full key path from the top of the destination down to the entry that
//! failed. [`MergeError::key_path`] recovers that path structurally and
//! [`MergeError::root_cause`] unwraps the chain to the originating failure.

use thiserror::Error;

/// Convenience alias for results produced by merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Error raised when a merge cannot complete.
///
/// # Examples
///
/// ```rust
/// use deep_merge::MergeError;
///
/// let error = MergeError::nested(
///     "database",
///     MergeError::nested("pool", MergeError::DepthExceeded { limit: 4 }),
/// );
/// assert_eq!(error.key_path(), ["database", "pool"]);
/// assert_eq!(
///     error.to_string(),
///     "error while merging nested map at key \"database\": \
///      error while merging nested map at key \"pool\": \
///      mapping nesting exceeds the depth limit of 4",
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// A merge failed inside the nested mapping stored under `key`.
    #[error("error while merging nested map at key \"{key}\": {source}")]
    Nested {
        /// The key whose nested mapping failed to merge.
        key: String,
        /// The failure raised one level further down.
        #[source]
        source: Box<MergeError>,
    },
    /// A source mapping nests more deeply than the configured limit allows.
    #[error("mapping nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The depth limit that was in force.
        limit: usize,
    },
}

impl MergeError {
    /// Wraps `source` as a failure observed under `key`.
    #[must_use]
    pub fn nested(key: impl Into<String>, source: Self) -> Self {
        Self::Nested {
            key: key.into(),
            source: Box::new(source),
        }
    }

    /// Returns the chain of keys from the outermost mapping down to the
    /// entry that failed, outermost first.
    ///
    /// The path is empty when the failure occurred at the top level.
    #[must_use]
    pub fn key_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Nested { key, source } = current {
            path.push(key.as_str());
            current = source.as_ref();
        }
        path
    }

    /// Unwraps the nesting chain and returns the error that started it.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Nested { source, .. } = current {
            current = source.as_ref();
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn doubly_nested() -> MergeError {
        MergeError::nested(
            "outer",
            MergeError::nested("inner", MergeError::DepthExceeded { limit: 2 }),
        )
    }

    #[test]
    fn nested_display_spells_out_the_key_path() {
        assert_eq!(
            doubly_nested().to_string(),
            "error while merging nested map at key \"outer\": \
             error while merging nested map at key \"inner\": \
             mapping nesting exceeds the depth limit of 2",
        );
    }

    #[test]
    fn depth_display_names_the_limit() {
        let error = MergeError::DepthExceeded { limit: 128 };
        assert_eq!(
            error.to_string(),
            "mapping nesting exceeds the depth limit of 128",
        );
    }

    #[test]
    fn key_path_walks_outermost_first() {
        assert_eq!(doubly_nested().key_path(), ["outer", "inner"]);
        assert!(MergeError::DepthExceeded { limit: 1 }.key_path().is_empty());
    }

    #[test]
    fn root_cause_unwraps_the_chain() {
        assert!(matches!(
            doubly_nested().root_cause(),
            MergeError::DepthExceeded { limit: 2 },
        ));
    }

    #[test]
    fn source_chain_matches_the_nesting() {
        let error = doubly_nested();
        let first = error.source().expect("outer error wraps a source");
        assert_eq!(
            first.to_string(),
            "error while merging nested map at key \"inner\": \
             mapping nesting exceeds the depth limit of 2",
        );
        let second = first.source().expect("inner error wraps a source");
        assert!(second.source().is_none());
    }
}
