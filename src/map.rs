//! Map types for canonical and flattened trees.
//!
//! This module provides [`CanonicalMap`] and [`FlatMap`], thin wrappers around
//! [`IndexMap`] keyed by `String`.
//!
//! ## Why IndexMap?
//!
//! Iteration follows insertion order, so converting a record or a sequence
//! yields keys in declaration/positional order and debug output stays stable.
//! Equality ignores order: two maps are equal when they hold the same entries,
//! since a map converted from an unordered source has no meaningful order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_canonical::{CanonicalMap, Value};
//!
//! let mut map = CanonicalMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A string-keyed tree whose non-leaf values are themselves `CanonicalMap`s.
///
/// Produced by [`to_canonical_map`](crate::to_canonical_map) and
/// [`unflatten`](crate::unflatten). Sequences appear as maps keyed by their
/// decimal index.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{CanonicalMap, Value};
///
/// let mut map = CanonicalMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalMap(IndexMap<String, Value>);

impl CanonicalMap {
    /// Creates an empty `CanonicalMap`.
    #[must_use]
    pub fn new() -> Self {
        CanonicalMap(IndexMap::new())
    }

    /// Creates an empty `CanonicalMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        CanonicalMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canonical::{CanonicalMap, Value};
    ///
    /// let mut map = CanonicalMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Follows a sequence of keys through nested maps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canonical::{canonical, Value};
    ///
    /// let tree = canonical!({ "user": { "id": 3 } });
    /// let map = tree.as_map().unwrap();
    /// assert_eq!(map.pointer(&["user", "id"]), Some(&Value::from(3)));
    /// assert_eq!(map.pointer(&["user", "missing"]), None);
    /// ```
    #[must_use]
    pub fn pointer(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first)?;
        for segment in rest {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns the number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts the leaves reachable from this map, at any depth.
    ///
    /// This is the number of entries [`flatten`](crate::flatten()) produces.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.0
            .values()
            .map(|value| match value {
                Value::Map(nested) => nested.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub(crate) fn entry(&mut self, key: String) -> indexmap::map::Entry<'_, String, Value> {
        self.0.entry(key)
    }
}

/// A single-level map from separator-joined paths to leaf values.
///
/// Produced by [`flatten`](crate::flatten()); consumed by
/// [`unflatten`](crate::unflatten). `flatten` never stores a [`Value::Map`]
/// here. A map placed into a `FlatMap` by hand is treated as an opaque leaf.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{FlatMap, Value};
///
/// let mut flat = FlatMap::new();
/// flat.insert("user.name".to_string(), Value::from("Bob"));
/// assert_eq!(flat.get("user.name").and_then(|v| v.as_str()), Some("Bob"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatMap(IndexMap<String, Value>);

impl FlatMap {
    /// Creates an empty `FlatMap`.
    #[must_use]
    pub fn new() -> Self {
        FlatMap(IndexMap::new())
    }

    /// Creates an empty `FlatMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FlatMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a path-value pair, returning the previous value at that path.
    pub fn insert(&mut self, path: String, value: Value) -> Option<Value> {
        self.0.insert(path, value)
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.get(path)
    }

    #[must_use]
    pub fn contains_key(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

macro_rules! impl_map_conversions {
    ($map:ident) => {
        impl From<HashMap<String, Value>> for $map {
            fn from(map: HashMap<String, Value>) -> Self {
                $map(map.into_iter().collect())
            }
        }

        impl From<$map> for HashMap<String, Value> {
            fn from(map: $map) -> Self {
                map.0.into_iter().collect()
            }
        }

        impl IntoIterator for $map {
            type Item = (String, Value);
            type IntoIter = indexmap::map::IntoIter<String, Value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $map {
            type Item = (&'a String, &'a Value);
            type IntoIter = indexmap::map::Iter<'a, String, Value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl FromIterator<(String, Value)> for $map {
            fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
                $map(IndexMap::from_iter(iter))
            }
        }

        impl Serialize for $map {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_map(self.0.iter())
            }
        }

        impl<'de> Deserialize<'de> for $map {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                IndexMap::<String, Value>::deserialize(deserializer).map($map)
            }
        }
    };
}

impl_map_conversions!(CanonicalMap);
impl_map_conversions!(FlatMap);

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> CanonicalMap {
        let mut inner = CanonicalMap::new();
        inner.insert("id".to_string(), Value::from(3));
        inner.insert("name".to_string(), Value::from("john"));

        let mut outer = CanonicalMap::new();
        outer.insert("user".to_string(), Value::Map(inner));
        outer.insert("active".to_string(), Value::from(true));
        outer
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: CanonicalMap = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let b: CanonicalMap = vec![
            ("y".to_string(), Value::from(2)),
            ("x".to_string(), Value::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(nested().leaf_count(), 3);
        assert_eq!(CanonicalMap::new().leaf_count(), 0);
    }

    #[test]
    fn test_pointer() {
        let map = nested();
        assert_eq!(map.pointer(&["user", "name"]), Some(&Value::from("john")));
        assert_eq!(map.pointer(&["active", "deeper"]), None);
        assert_eq!(map.pointer(&[]), None);
    }

    #[test]
    fn test_hashmap_conversion() {
        let mut source = HashMap::new();
        source.insert("k".to_string(), Value::from(1));
        let flat = FlatMap::from(source.clone());
        assert_eq!(HashMap::from(flat), source);
    }
}
