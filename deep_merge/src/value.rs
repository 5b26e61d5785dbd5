//! The two-case value model the merge algorithm operates on.
//!
//! A [`Value`] is either a nested [`Mapping`] or an opaque leaf. The merge
//! algorithm only ever distinguishes these two cases: mappings are merged
//! recursively, leaves are moved or cloned wholesale and never inspected.
//! The leaf type `L` is chosen by the caller; anything cloneable works,
//! including shared handles such as `Arc` when leaf values should be shared
//! rather than copied.

use serde::{Deserialize, Serialize};

use crate::Mapping;

/// A value stored under a key in a [`Mapping`].
///
/// Only the [`Value::Map`] case receives recursive treatment during a merge;
/// every other kind of data lives in [`Value::Leaf`] and is replaced
/// wholesale when a source provides a value for the same key.
///
/// Deserialisation is untagged: a map deserialises as [`Value::Map`] and any
/// other token as [`Value::Leaf`].
///
/// # Examples
///
/// ```rust
/// use deep_merge::{Mapping, Value};
///
/// let mut inner = Mapping::new();
/// inner.insert("port", Value::Leaf(8080_u32));
///
/// let value = Value::from(inner);
/// assert!(value.is_map());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value<L> {
    /// A nested mapping, merged key by key on collision.
    Map(Mapping<L>),
    /// An opaque leaf, replaced wholesale on collision.
    Leaf(L),
}

impl<L> Value<L> {
    /// Returns `true` when this value is a nested mapping.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` when this value is an opaque leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Borrows the nested mapping, if this value is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Mapping<L>> {
        match self {
            Self::Map(mapping) => Some(mapping),
            Self::Leaf(_) => None,
        }
    }

    /// Mutably borrows the nested mapping, if this value is one.
    #[must_use]
    pub const fn as_map_mut(&mut self) -> Option<&mut Mapping<L>> {
        match self {
            Self::Map(mapping) => Some(mapping),
            Self::Leaf(_) => None,
        }
    }

    /// Borrows the leaf, if this value is one.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&L> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Map(_) => None,
        }
    }

    /// Consumes the value and returns the nested mapping, if it was one.
    ///
    /// # Errors
    ///
    /// Returns the original value unchanged when it is a leaf.
    pub fn into_map(self) -> Result<Mapping<L>, Self> {
        match self {
            Self::Map(mapping) => Ok(mapping),
            leaf => Err(leaf),
        }
    }
}

impl<L> From<Mapping<L>> for Value<L> {
    fn from(mapping: Mapping<L>) -> Self {
        Self::Map(mapping)
    }
}
