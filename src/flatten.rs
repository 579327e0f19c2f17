//! Flattening a canonical map into separator-joined paths, and back.
//!
//! [`flatten`](crate::flatten()) walks a [`CanonicalMap`] depth first and emits one entry per
//! leaf, keyed by the path from the root joined with the separator (`"."` by
//! default). [`unflatten`](crate::unflatten()) splits each path on the separator and rebuilds the
//! nested maps.
//!
//! ```rust
//! use serde_canonical::{canonical, flatten, unflatten, Value};
//!
//! let tree = canonical!({ "user": { "id": 3, "name": "john" } }).into_map().unwrap();
//!
//! let flat = flatten(&tree);
//! assert_eq!(flat.get("user.id"), Some(&Value::from(3)));
//! assert_eq!(flat.get("user.name"), Some(&Value::from("john")));
//!
//! assert_eq!(unflatten(&flat), tree);
//! ```
//!
//! ## Limitations
//!
//! Separators are not escaped. A key that already contains the separator is
//! indistinguishable from a nested path after flattening, so
//! `unflatten(flatten(m)) == m` only holds when no key contains the separator
//! and no nested map is empty (an empty map has no leaves to emit).

use crate::{CanonicalMap, FlatMap, MapOptions, Value};
use log::trace;

/// Flattens `node` using `options.separator()` to join path segments.
pub fn flatten_with_options(node: &CanonicalMap, options: &MapOptions) -> FlatMap {
    let mut flattened = FlatMap::with_capacity(node.leaf_count());
    flatten_into(node, "", options.separator(), &mut flattened);
    flattened
}

// An empty prefix means the root level.
fn flatten_into(node: &CanonicalMap, prefix: &str, separator: &str, out: &mut FlatMap) {
    for (key, value) in node.iter() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };

        match value {
            Value::Map(nested) => flatten_into(nested, &path, separator, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Rebuilds a nested map from `flat`, splitting paths on `options.separator()`.
///
/// Later entries win: a final segment overwrites whatever sits at that key, and
/// an intermediate segment that currently holds a leaf has the leaf replaced by
/// a fresh map.
pub fn unflatten_with_options(flat: &FlatMap, options: &MapOptions) -> CanonicalMap {
    let separator = options.separator();
    let mut result = CanonicalMap::new();

    for (path, value) in flat.iter() {
        let segments: Vec<&str> = path.split(separator).collect();
        insert_path(&mut result, &segments, value, path);
    }

    result
}

fn insert_path(node: &mut CanonicalMap, segments: &[&str], value: &Value, path: &str) {
    match segments {
        [] => {}
        [last] => {
            node.insert((*last).to_string(), value.clone());
        }
        [head, rest @ ..] => {
            let slot = node
                .entry((*head).to_string())
                .or_insert_with(|| Value::Map(CanonicalMap::new()));

            match slot {
                Value::Map(child) => insert_path(child, rest, value, path),
                leaf => {
                    trace!("replacing leaf at '{}' with a map while unflattening '{}'", head, path);
                    let mut child = CanonicalMap::new();
                    insert_path(&mut child, rest, value, path);
                    *leaf = Value::Map(child);
                }
            }
        }
    }
}
