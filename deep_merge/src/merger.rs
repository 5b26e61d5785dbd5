//! Deep, recursive merging of [`Mapping`]s.
//!
//! Each source is applied in two phases. First the source is deep-cloned
//! into a private snapshot, which validates its nesting depth and guarantees
//! the source itself is never written to, even when it shares structure with
//! the destination. Then the snapshot is folded into the destination key by
//! key: entries that are maps on both sides merge recursively, any other
//! collision is settled by replacing the destination entry with the source
//! entry. Failures inside a nested map are wrapped with the key they
//! occurred under, one level at a time, so the rendered error names the full
//! path to the offending entry.

use crate::{Mapping, MergeError, MergeResult, Value};

/// Nesting depth allowed below the top level of a source mapping before a
/// merge is rejected.
///
/// Matches the recursion ceiling `serde_json` applies when parsing, so any
/// mapping that arrived through a JSON document merges without tripping the
/// limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Merge driver holding the tuning knobs shared by every merge it runs.
///
/// The stand-alone [`merge`] and [`merge_into`] functions cover the common
/// case; construct a `Merger` to adjust the depth limit.
///
/// # Examples
///
/// ```rust
/// use deep_merge::{Mapping, Merger, Value};
///
/// let mut defaults = Mapping::new();
/// defaults.insert("timeout", Value::Leaf("30s"));
/// defaults.insert("retries", Value::Leaf("3"));
///
/// let mut overrides = Mapping::new();
/// overrides.insert("timeout", Value::Leaf("5s"));
///
/// let merged = Merger::new().merge(None, [&defaults, &overrides])?;
/// assert_eq!(merged.get("timeout"), Some(&Value::Leaf("5s")));
/// assert_eq!(merged.get("retries"), Some(&Value::Leaf("3")));
/// # Ok::<(), deep_merge::MergeError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Merger {
    max_depth: usize,
}

impl Merger {
    /// Creates a merger with the [`DEFAULT_MAX_DEPTH`] depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a merger that rejects sources whose maps nest more than
    /// `max_depth` levels below the top.
    ///
    /// A limit of zero admits flat mappings only.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the configured depth limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Merges `sources` into `dst`, later sources taking precedence, and
    /// returns the merged mapping.
    ///
    /// Passing `None` for `dst` starts from an empty mapping. Sources are
    /// read through shared references and never modified; entries taken from
    /// a source are deep-cloned before they reach the result, so later
    /// writes to the result cannot alias any source.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::DepthExceeded`], wrapped in one
    /// [`MergeError::Nested`] per level, when a source nests more deeply
    /// than the configured limit.
    pub fn merge<'a, L, I>(&self, dst: Option<Mapping<L>>, sources: I) -> MergeResult<Mapping<L>>
    where
        L: Clone + 'a,
        I: IntoIterator<Item = &'a Mapping<L>>,
    {
        let mut merged = dst.unwrap_or_default();
        for source in sources {
            self.merge_into(&mut merged, source)?;
        }
        Ok(merged)
    }

    /// Merges a single `src` into `dst` in place.
    ///
    /// `src` is read through a shared reference and never modified. The
    /// source is validated and snapshotted before any entry is written, so
    /// a source that fails leaves `dst` exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::DepthExceeded`], wrapped in one
    /// [`MergeError::Nested`] per level, when `src` nests more deeply than
    /// the configured limit.
    pub fn merge_into<L: Clone>(&self, dst: &mut Mapping<L>, src: &Mapping<L>) -> MergeResult<()> {
        tracing::trace!(keys = src.len(), "merging source mapping");
        let result =
            clone_source(src, 0, self.max_depth).and_then(|snapshot| merge_mapping(dst, snapshot));
        if let Err(error) = &result {
            tracing::debug!(%error, "merge failed");
        }
        result
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merges `sources` into `dst` with the default depth limit.
///
/// See [`Merger::merge`] for the precedence and cloning rules.
///
/// # Errors
///
/// Returns [`MergeError::DepthExceeded`], wrapped in one
/// [`MergeError::Nested`] per level, when a source nests more deeply than
/// [`DEFAULT_MAX_DEPTH`].
pub fn merge<'a, L, I>(dst: Option<Mapping<L>>, sources: I) -> MergeResult<Mapping<L>>
where
    L: Clone + 'a,
    I: IntoIterator<Item = &'a Mapping<L>>,
{
    Merger::new().merge(dst, sources)
}

/// Merges a single `src` into `dst` in place with the default depth limit.
///
/// See [`Merger::merge_into`] for the precedence and cloning rules.
///
/// # Errors
///
/// Returns [`MergeError::DepthExceeded`], wrapped in one
/// [`MergeError::Nested`] per level, when `src` nests more deeply than
/// [`DEFAULT_MAX_DEPTH`].
pub fn merge_into<L: Clone>(dst: &mut Mapping<L>, src: &Mapping<L>) -> MergeResult<()> {
    Merger::new().merge_into(dst, src)
}

/// Folds an owned snapshot into the destination, key by key.
fn merge_mapping<L>(dst: &mut Mapping<L>, src: Mapping<L>) -> MergeResult<()> {
    for (key, incoming) in src {
        match dst.get_mut(&key) {
            Some(existing) => {
                merge_entry(existing, incoming).map_err(|source| MergeError::nested(key, source))?;
            }
            None => {
                dst.insert(key, incoming);
            }
        }
    }
    Ok(())
}

/// Settles a single key collision: map-into-map merges recursively, every
/// other pairing replaces the destination entry.
fn merge_entry<L>(existing: &mut Value<L>, incoming: Value<L>) -> MergeResult<()> {
    match (existing, incoming) {
        (Value::Map(dst_map), Value::Map(src_map)) => merge_mapping(dst_map, src_map),
        (existing, incoming) => {
            *existing = incoming;
            Ok(())
        }
    }
}

/// Deep-clones a source mapping, rejecting nesting beyond `limit` levels.
///
/// Leaves are cloned with `L::clone`, so a handle type such as `Arc` shares
/// the pointee rather than copying it. The same walk bounds the union step:
/// a snapshot that passed this check can never drive `merge_mapping` deeper
/// than `limit` levels.
fn clone_source<L: Clone>(src: &Mapping<L>, depth: usize, limit: usize) -> MergeResult<Mapping<L>> {
    if depth > limit {
        return Err(MergeError::DepthExceeded { limit });
    }
    let mut snapshot = Mapping::new();
    for (key, value) in src {
        let cloned = match value {
            Value::Map(nested) => clone_source(nested, depth + 1, limit)
                .map(Value::Map)
                .map_err(|source| MergeError::nested(key, source))?,
            Value::Leaf(leaf) => Value::Leaf(leaf.clone()),
        };
        snapshot.insert(key, cloned);
    }
    Ok(snapshot)
}
