//! Error types for canonical map conversion.
//!
//! Every variant describes a single failure class: the value could not be
//! expressed as a canonical mapping. The infallible entry points
//! ([`to_canonical_map`](crate::to_canonical_map), [`flatten`](crate::flatten()),
//! [`unflatten`](crate::unflatten)) never surface these; they degrade to an
//! empty map instead. Use [`try_to_canonical_map`](crate::try_to_canonical_map)
//! when the reason matters.
//!
//! ## Examples
//!
//! ```rust
//! use serde_canonical::{try_to_canonical_map, Error};
//!
//! let result = try_to_canonical_map(&123);
//! assert!(matches!(result, Err(Error::NotAMapping { .. })));
//! ```

use crate::ser::Shape;
use std::fmt;
use thiserror::Error;

/// Represents all the ways a value can fail to convert into a canonical map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The top-level value is not a mapping, record or sequence.
    #[error("cannot convert a {shape} into a canonical map")]
    NotAMapping { shape: Shape },

    /// A mapping key is itself a composite value and has no textual form.
    #[error("mapping keys must be scalar, found {shape}")]
    KeyMustBeScalar { shape: Shape },

    /// Nesting went deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canonical::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub(crate) fn not_a_mapping(shape: Shape) -> Self {
        Error::NotAMapping { shape }
    }

    pub(crate) fn key_must_be_scalar(shape: Shape) -> Self {
        Error::KeyMustBeScalar { shape }
    }

    pub(crate) fn depth_limit_exceeded(limit: usize) -> Self {
        Error::DepthLimitExceeded { limit }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_shape() {
        let err = Error::not_a_mapping(Shape::Scalar);
        assert_eq!(err.to_string(), "cannot convert a scalar into a canonical map");

        let err = Error::key_must_be_scalar(Shape::FixedSequence);
        assert_eq!(
            err.to_string(),
            "mapping keys must be scalar, found fixed sequence"
        );

        let err = Error::depth_limit_exceeded(4);
        assert!(err.to_string().contains("limit of 4"));
    }
}
