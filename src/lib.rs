//! # serde_canonical
//!
//! Convert any `Serialize` value into a canonical, string-keyed map tree, and
//! flatten that tree into single-level dot-delimited keys and back.
//!
//! ## What is a canonical map?
//!
//! A [`CanonicalMap`] maps strings to [`Value`]s, where every value is either a
//! scalar leaf or another `CanonicalMap`. Records, mappings and sequences all
//! become maps:
//!
//! - record fields are keyed by their serde name (`#[serde(rename)]` honored,
//!   `#[serde(skip)]` fields left out)
//! - mapping keys are rendered to their textual form
//! - sequence elements are keyed `"0"`, `"1"`, `"2"`, ...
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_canonical::{flatten, to_canonical_map, unflatten, Value};
//!
//! #[derive(Serialize)]
//! struct User {
//!     #[serde(rename = "name")]
//!     name: String,
//!     tags: Vec<String>,
//!     #[serde(skip)]
//!     session: u64,
//! }
//!
//! let user = User {
//!     name: "Alice".to_string(),
//!     tags: vec!["go".to_string(), "dev".to_string()],
//!     session: 99,
//! };
//!
//! let map = to_canonical_map(&user);
//! assert!(map.get("session").is_none());
//!
//! let flat = flatten(&map);
//! assert_eq!(flat.get("tags.1"), Some(&Value::from("dev")));
//!
//! assert_eq!(unflatten(&flat), map);
//! ```
//!
//! ## Best effort by default
//!
//! [`to_canonical_map`], [`flatten`] and [`unflatten`] never fail. A value that
//! cannot be expressed as a map (a bare scalar, a map with composite keys, a
//! `Serialize` impl that errors) yields an empty map, which makes them safe to
//! drop into logging and debug paths. [`try_to_canonical_map`] reports why a
//! conversion failed.
//!
//! ## Limitations
//!
//! - Path separators inside keys are not escaped, see [`flatten`](mod@flatten).
//! - There is no cycle detection. `Rc<RefCell<_>>` graphs that loop recurse
//!   until [`MapOptions::with_max_depth`] stops them, or forever without it.

pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod util;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{flatten_with_options, unflatten_with_options};
pub use map::{CanonicalMap, FlatMap};
pub use options::MapOptions;
pub use ser::{CanonicalSerializer, Shape};
pub use value::{Number, Value};

use log::debug;
use serde::Serialize;

/// Convert any `T: Serialize` into a [`CanonicalMap`].
///
/// Returns an empty map when `value` is a scalar or cannot be converted.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{to_canonical_map, Value};
///
/// let map = to_canonical_map(&vec![10, 20, 30]);
/// assert_eq!(map.get("0"), Some(&Value::from(10)));
/// assert_eq!(map.get("2"), Some(&Value::from(30)));
///
/// assert!(to_canonical_map(&123).is_empty());
/// ```
#[must_use]
pub fn to_canonical_map<T>(value: &T) -> CanonicalMap
where
    T: ?Sized + Serialize,
{
    to_canonical_map_with_options(value, &MapOptions::default())
}

/// Convert any `T: Serialize` into a [`CanonicalMap`] with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{to_canonical_map_with_options, MapOptions};
///
/// let options = MapOptions::new().with_max_depth(1);
/// assert_eq!(to_canonical_map_with_options(&vec![1, 2], &options).len(), 2);
/// assert!(to_canonical_map_with_options(&vec![vec![1]], &options).is_empty());
/// ```
#[must_use]
pub fn to_canonical_map_with_options<T>(value: &T, options: &MapOptions) -> CanonicalMap
where
    T: ?Sized + Serialize,
{
    match try_to_canonical_map_with_options(value, options) {
        Ok(map) => map,
        Err(err) => {
            debug!(
                "conversion of {} fell back to an empty map: {}",
                util::type_name_of::<T>(),
                err
            );
            CanonicalMap::new()
        }
    }
}

/// Convert any `T: Serialize` into a [`CanonicalMap`], reporting failures.
///
/// # Errors
///
/// Returns [`Error::NotAMapping`] for scalar input, [`Error::KeyMustBeScalar`]
/// for mappings with composite keys, and [`Error::Custom`] when the value's
/// `Serialize` impl fails.
pub fn try_to_canonical_map<T>(value: &T) -> Result<CanonicalMap>
where
    T: ?Sized + Serialize,
{
    try_to_canonical_map_with_options(value, &MapOptions::default())
}

/// Like [`try_to_canonical_map`], with custom options.
///
/// # Errors
///
/// As [`try_to_canonical_map`], plus [`Error::DepthLimitExceeded`] when the
/// value nests deeper than [`MapOptions::max_depth`].
pub fn try_to_canonical_map_with_options<T>(value: &T, options: &MapOptions) -> Result<CanonicalMap>
where
    T: ?Sized + Serialize,
{
    match ser::to_value_with_options(value, options)? {
        Value::Map(map) => Ok(map),
        _ => Err(Error::not_a_mapping(Shape::Scalar)),
    }
}

/// Convert any `T: Serialize` into a [`Value`].
///
/// Unlike [`to_canonical_map`], scalars are returned as leaves.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{to_value, Value};
///
/// assert_eq!(to_value(&123).unwrap(), Value::from(123));
/// assert!(to_value(&vec![1]).unwrap().is_map());
/// ```
///
/// # Errors
///
/// Returns an error if a mapping has composite keys or the value's
/// `Serialize` impl fails.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value_with_options(value, &MapOptions::default())
}

/// Flatten a [`CanonicalMap`] into dot-joined paths.
///
/// One entry per leaf; nested maps never appear in the output.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{canonical, flatten, Value};
///
/// let tree = canonical!({ "a": { "b": { "c": { "d": 42 } } } }).into_map().unwrap();
/// let flat = flatten(&tree);
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat.get("a.b.c.d"), Some(&Value::from(42)));
/// ```
#[must_use]
pub fn flatten(node: &CanonicalMap) -> FlatMap {
    flatten_with_options(node, &MapOptions::default())
}

/// Rebuild a nested [`CanonicalMap`] from dot-joined paths.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{unflatten, FlatMap, Value};
///
/// let mut flat = FlatMap::new();
/// flat.insert("user.name".to_string(), Value::from("Bob"));
/// flat.insert("user.age".to_string(), Value::from(25));
///
/// let tree = unflatten(&flat);
/// assert_eq!(tree.pointer(&["user", "age"]), Some(&Value::from(25)));
/// ```
#[must_use]
pub fn unflatten(flat: &FlatMap) -> CanonicalMap {
    unflatten_with_options(flat, &MapOptions::default())
}
