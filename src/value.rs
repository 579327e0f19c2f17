//! Node representation for canonical map trees.
//!
//! A [`Value`] is either a leaf (null, bool, number, string) or a nested
//! [`CanonicalMap`]. There is no array variant: sequences are stored as maps
//! keyed by their decimal index, so a tree built from `Value`s can never hold a
//! partially converted shape.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_canonical::{canonical, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let tree = canonical!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//! assert!(tree.is_map());
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use serde_canonical::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::CanonicalMap;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node of a canonical map tree: a leaf scalar or a nested map.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_leaf());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Map(CanonicalMap),
}

/// A numeric leaf.
///
/// Integers that fit in `i64` are stored as [`Number::Integer`]. Wider
/// integers (`u64` above `i64::MAX`, `i128`, `u128`) are kept exactly as
/// [`Number::BigInt`] instead of being rounded through a float.
///
/// # Examples
///
/// ```rust
/// use serde_canonical::Number;
///
/// assert_eq!(Number::from(42u8).as_i64(), Some(42));
/// assert!(Number::from(u64::MAX).is_big());
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_big(&self) -> bool {
        matches!(self, Number::BigInt(_))
    }

    /// Converts this number to an `i64` if it can be represented exactly.
    ///
    /// Whole floats within range convert; fractional floats and big integers
    /// outside the `i64` range return `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canonical::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::from(u64::MAX).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive.
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < -(i64::MIN as f64) {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::BigInt(bi) => i64::try_from(bi).ok(),
        }
    }

    /// Converts this number to an `f64`, rounding big integers.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::BigInt(bi) => bi.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::from(value as u64)
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a nested map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns `true` for every value that is not a nested map.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !self.is_map()
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_canonical::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// If the value is a nested map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&CanonicalMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut CanonicalMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Consumes the value, returning the map if it is one.
    #[must_use]
    pub fn into_map(self) -> Option<CanonicalMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Number(Number::BigInt(bi)) => {
                if let Ok(i) = i128::try_from(bi) {
                    serializer.serialize_i128(i)
                } else if let Ok(u) = u128::try_from(bi) {
                    serializer.serialize_u128(u)
                } else {
                    serializer.collect_str(bi)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any scalar, sequence or map")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            // Sequences become index-keyed maps, as in conversion.
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut map = CanonicalMap::with_capacity(seq.size_hint().unwrap_or(0));
                let mut index = 0usize;
                while let Some(elem) = seq.next_element()? {
                    map.insert(index.to_string(), elem);
                    index += 1;
                }
                Ok(Value::Map(map))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = CanonicalMap::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    map.insert(key, value);
                }
                Ok(Value::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| crate::Error::custom(format!("expected integer, found {:?}", value)))
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value
            .as_f64()
            .ok_or_else(|| crate::Error::custom(format!("expected number, found {:?}", value)))
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for CanonicalMap {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Map(map) => Ok(map),
            _ => Err(crate::Error::custom(format!(
                "expected map, found {:?}",
                value
            ))),
        }
    }
}

macro_rules! impl_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_value_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<CanonicalMap> for Value {
    fn from(value: CanonicalMap) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        let value = Value::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Value::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = Value::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_float_to_i64_bounds() {
        assert_eq!(Number::Float(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(Number::Float(i64::MIN as f64).as_i64(), Some(i64::MIN));
        assert_eq!(Number::Float(-9_223_372_036_854_777_856.0).as_i64(), None);
        assert_eq!(Number::Float(9_007_199_254_740_992.0).as_i64(), Some(1 << 53));

        let value = Value::Number(Number::Float(9_223_372_036_854_775_808.0));
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_map() {
        let value = Value::Map(CanonicalMap::new());
        assert!(CanonicalMap::try_from(value).unwrap().is_empty());
        assert!(CanonicalMap::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_wide_integers_stay_exact() {
        assert_eq!(Number::from(7u64), Number::Integer(7));
        assert_eq!(
            Number::from(u64::MAX),
            Number::BigInt(BigInt::from(u64::MAX))
        );
        assert_eq!(Number::from(-5i128), Number::Integer(-5));
        assert!(Number::from(u128::MAX).is_big());
        assert_eq!(Number::from(u128::MAX).to_string(), u128::MAX.to_string());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_leaf_and_map_predicates() {
        let map = Value::Map(CanonicalMap::new());
        assert!(map.is_map());
        assert!(!map.is_leaf());
        assert!(Value::Null.is_leaf());
    }

    #[test]
    fn test_display() {
        let mut map = CanonicalMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from("x"));
        assert_eq!(Value::Map(map).to_string(), "{a: 1, b: x}");
        assert_eq!(Value::Null.to_string(), "null");
    }
}
