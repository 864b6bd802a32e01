//! Ordered map type for document nodes.
//!
//! This module provides [`DocMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for document keys. Order matters here: the serializer walks
//! keys in first-seen order, so a parse/render round trip reproduces the source
//! document's key order.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` instead of `HashMap` ensures:
//!
//! - **Deterministic output**: keys render in a consistent order
//! - **Round-trip fidelity**: first-seen order survives parse → render
//! - **Predictable tests**: output is stable across runs
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{DocMap, Value};
//!
//! let mut map = DocMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30.0));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to document values.
///
/// This is a thin wrapper around [`IndexMap`]; insertion order is what the
/// serializer emits.
///
/// # Examples
///
/// ```rust
/// use yamlet::{DocMap, Value};
///
/// let mut map = DocMap::new();
/// map.insert("first".to_string(), Value::from(1.0));
/// map.insert("second".to_string(), Value::from(2.0));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocMap(IndexMap<String, crate::Value>);

impl DocMap {
    /// Creates an empty `DocMap`.
    #[must_use]
    pub fn new() -> Self {
        DocMap(IndexMap::new())
    }

    /// Creates an empty `DocMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        DocMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    /// Note that the document builder never overwrites: duplicate keys in
    /// source text are dropped with a diagnostic before reaching this point.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for DocMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        DocMap(map.into_iter().collect())
    }
}

impl From<DocMap> for HashMap<String, crate::Value> {
    fn from(map: DocMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for DocMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for DocMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        DocMap(IndexMap::from_iter(iter))
    }
}
