//! Configuration options for conversion and flattening.
//!
//! [`MapOptions`] controls two things:
//!
//! - the path separator used by [`flatten_with_options`](crate::flatten_with_options)
//!   and [`unflatten_with_options`](crate::unflatten_with_options) (default `"."`)
//! - an optional nesting limit for
//!   [`to_canonical_map_with_options`](crate::to_canonical_map_with_options)
//!
//! ## Examples
//!
//! ```rust
//! use serde_canonical::{canonical, flatten_with_options, MapOptions};
//!
//! let tree = canonical!({ "user": { "id": 3 } }).into_map().unwrap();
//!
//! let options = MapOptions::new().with_separator("/");
//! let flat = flatten_with_options(&tree, &options);
//! assert!(flat.contains_key("user/id"));
//! ```

/// Default path separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Configuration for conversion and flattening.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::MapOptions;
///
/// let options = MapOptions::new().with_separator("::").with_max_depth(16);
/// assert_eq!(options.separator(), "::");
/// assert_eq!(options.max_depth(), Some(16));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOptions {
    separator: String,
    max_depth: Option<usize>,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            separator: DEFAULT_SEPARATOR.to_string(),
            max_depth: None,
        }
    }
}

impl MapOptions {
    /// Creates options with the `"."` separator and no depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator joining path segments.
    ///
    /// An empty separator would make every path ambiguous, so it falls back to
    /// the default.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.separator = if separator.is_empty() {
            DEFAULT_SEPARATOR.to_string()
        } else {
            separator
        };
        self
    }

    /// Limits how many composite levels conversion descends into.
    ///
    /// The top-level value is depth 1. A value nested deeper than `max_depth`
    /// fails the whole conversion.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MapOptions::default();
        assert_eq!(options.separator(), ".");
        assert_eq!(options.max_depth(), None);
    }

    #[test]
    fn test_empty_separator_falls_back() {
        let options = MapOptions::new().with_separator("");
        assert_eq!(options.separator(), DEFAULT_SEPARATOR);
    }
}
