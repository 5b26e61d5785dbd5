//! Ordered, string-keyed mapping of [`Value`]s.
//!
//! [`Mapping`] is the unit the merge algorithm works over: the destination
//! is a mapping, every source is a mapping, and nested maps inside either
//! are mappings again. Keys are owned strings and entries are held in a
//! `BTreeMap`, so iteration order is the lexical order of the keys and
//! independent of insertion history.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::Value;

/// A string-keyed tree of [`Value`]s.
///
/// Serialisation is transparent: a `Mapping` reads and writes exactly like
/// the map it wraps, so a JSON object deserialises straight into a
/// `Mapping<L>` whenever its values deserialise into [`Value<L>`].
///
/// # Examples
///
/// ```rust
/// use deep_merge::{Mapping, Value};
///
/// let mut inner = Mapping::new();
/// inner.insert("host", Value::Leaf("localhost"));
///
/// let mut outer = Mapping::new();
/// outer.insert("server", inner);
/// outer.insert("retries", Value::Leaf("3"));
///
/// assert_eq!(outer.len(), 2);
/// assert!(outer.get("server").is_some_and(Value::is_map));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping<L> {
    entries: BTreeMap<String, Value<L>>,
}

impl<L> Mapping<L> {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` is present at the top level.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Borrows the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value<L>> {
        self.entries.get(key)
    }

    /// Mutably borrows the value stored under `key`, if any.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<L>> {
        self.entries.get_mut(key)
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value<L>>,
    ) -> Option<Value<L>> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes the entry stored under `key`, returning its value if the key
    /// was present.
    pub fn remove(&mut self, key: &str) -> Option<Value<L>> {
        self.entries.remove(key)
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> <&Self as IntoIterator>::IntoIter {
        self.into_iter()
    }

    /// Iterates over the keys in lexical order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value<L>> {
        self.entries.keys()
    }

    /// Iterates over the values in key order.
    pub fn values(&self) -> btree_map::Values<'_, String, Value<L>> {
        self.entries.values()
    }
}

impl<L> Default for Mapping<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, K, V> FromIterator<(K, V)> for Mapping<L>
where
    K: Into<String>,
    V: Into<Value<L>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<L, K, V> Extend<(K, V)> for Mapping<L>
where
    K: Into<String>,
    V: Into<Value<L>>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

impl<L> IntoIterator for Mapping<L> {
    type Item = (String, Value<L>);
    type IntoIter = btree_map::IntoIter<String, Value<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, L> IntoIterator for &'a Mapping<L> {
    type Item = (&'a str, &'a Value<L>);
    type IntoIter = std::iter::Map<
        btree_map::Iter<'a, String, Value<L>>,
        fn((&'a String, &'a Value<L>)) -> (&'a str, &'a Value<L>),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let project: fn((&'a String, &'a Value<L>)) -> (&'a str, &'a Value<L>) =
            |(key, value)| (key.as_str(), value);
        self.entries.iter().map(project)
    }
}
