//! Conversion of any `Serialize` value into a canonical map tree.
//!
//! This module provides [`CanonicalSerializer`], a serde `Serializer` whose
//! output is a [`Value`]. Every value is first classified into a [`Shape`]
//! according to the serde data-model entry point it calls, then converted:
//!
//! - **Mapping** (`serialize_map`): keys become their textual form, values recurse
//! - **Record** (`serialize_struct`): fields appear under their serde name, so
//!   `#[serde(rename)]`, `#[serde(skip)]` and `skip_serializing_if` apply as usual
//! - **Ordered / fixed sequence** (`serialize_seq`, `serialize_tuple`, ...):
//!   elements are keyed `"0"`, `"1"`, ... in positional order
//! - **Scalar**: everything else becomes a leaf
//!
//! Enum variants use serde's externally tagged form: a unit variant is a string
//! leaf, any other variant is `{ "Variant": payload }`.
//!
//! ## Usage
//!
//! Most users should call [`to_canonical_map`](crate::to_canonical_map) in the
//! crate root. The serializer can be driven directly when a [`Value`] is wanted:
//!
//! ```rust
//! use serde::Serialize;
//! use serde_canonical::{CanonicalSerializer, MapOptions, Value};
//!
//! let options = MapOptions::new();
//! let value = vec![10, 20, 30].serialize(CanonicalSerializer::new(&options)).unwrap();
//!
//! let map = value.as_map().unwrap();
//! assert_eq!(map.get("1"), Some(&Value::from(20)));
//! ```

use crate::{CanonicalMap, Error, MapOptions, Number, Result, Value};
use log::trace;
use serde::ser::{self, Impossible, Serialize};
use std::fmt;

/// Runtime classification of a value, decided once at the serde boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Mapping,
    Record,
    OrderedSequence,
    FixedSequence,
    Scalar,
}

impl Shape {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::Mapping => "mapping",
            Shape::Record => "record",
            Shape::OrderedSequence => "ordered sequence",
            Shape::FixedSequence => "fixed sequence",
            Shape::Scalar => "scalar",
        }
    }

    /// Returns `true` for the shapes that convert into a nested map.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        !matches!(self, Shape::Scalar)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializer producing a [`Value`] tree.
///
/// Tracks the current nesting depth so that [`MapOptions::with_max_depth`]
/// can stop runaway recursion.
#[derive(Clone, Copy, Debug)]
pub struct CanonicalSerializer<'a> {
    options: &'a MapOptions,
    depth: usize,
}

impl<'a> CanonicalSerializer<'a> {
    #[must_use]
    pub fn new(options: &'a MapOptions) -> Self {
        CanonicalSerializer { options, depth: 0 }
    }

    /// Enters one composite level, failing past the configured limit.
    fn descend(self) -> Result<Self> {
        let depth = self.depth + 1;
        if let Some(limit) = self.options.max_depth() {
            if depth > limit {
                return Err(Error::depth_limit_exceeded(limit));
            }
        }
        Ok(CanonicalSerializer {
            options: self.options,
            depth,
        })
    }

    fn node(self, shape: Shape, len: Option<usize>) -> Result<SerializeNode<'a>> {
        let child = self.descend()?;
        Ok(SerializeNode {
            shape,
            map: CanonicalMap::with_capacity(len.unwrap_or(0)),
            next_index: 0,
            pending_key: None,
            child,
        })
    }

    fn variant(
        self,
        variant: &'static str,
        shape: Shape,
        len: usize,
    ) -> Result<SerializeVariant<'a>> {
        let wrapper = self.descend()?;
        Ok(SerializeVariant {
            variant,
            node: wrapper.node(shape, Some(len))?,
        })
    }
}

/// Builder for one composite level: a mapping, record or sequence.
pub struct SerializeNode<'a> {
    shape: Shape,
    map: CanonicalMap,
    next_index: usize,
    pending_key: Option<String>,
    child: CanonicalSerializer<'a>,
}

impl SerializeNode<'_> {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let converted = value.serialize(self.child)?;
        self.push_value(converted);
        Ok(())
    }

    fn push_value(&mut self, value: Value) {
        let key = self.next_index.to_string();
        self.next_index += 1;
        self.map.insert(key, value);
    }

    fn field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let converted = value.serialize(self.child)?;
        self.map.insert(key.to_string(), converted);
        Ok(())
    }

    fn finish(self) -> Value {
        trace!(
            "converted {} into a map of {} entries at depth {}",
            self.shape,
            self.map.len(),
            self.child.depth
        );
        Value::Map(self.map)
    }
}

/// Builder for a tuple or struct enum variant, wrapped as `{ variant: payload }`.
pub struct SerializeVariant<'a> {
    variant: &'static str,
    node: SerializeNode<'a>,
}

impl SerializeVariant<'_> {
    fn finish(self) -> Value {
        let mut wrapper = CanonicalMap::with_capacity(1);
        wrapper.insert(self.variant.to_string(), self.node.finish());
        Value::Map(wrapper)
    }
}

impl<'a> ser::Serializer for CanonicalSerializer<'a> {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeNode<'a>;
    type SerializeTuple = SerializeNode<'a>;
    type SerializeTupleStruct = SerializeNode<'a>;
    type SerializeTupleVariant = SerializeVariant<'a>;
    type SerializeMap = SerializeNode<'a>;
    type SerializeStruct = SerializeNode<'a>;
    type SerializeStructVariant = SerializeVariant<'a>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let mut node = self.node(Shape::OrderedSequence, Some(v.len()))?;
        for byte in v {
            node.push_value(Value::from(*byte));
        }
        Ok(node.finish())
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut wrapper = self.node(Shape::Record, Some(1))?;
        wrapper.field(variant, value)?;
        Ok(wrapper.finish())
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeNode<'a>> {
        self.node(Shape::OrderedSequence, len)
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeNode<'a>> {
        self.node(Shape::FixedSequence, Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeNode<'a>> {
        self.node(Shape::FixedSequence, Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<'a>> {
        self.variant(variant, Shape::FixedSequence, len)
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeNode<'a>> {
        self.node(Shape::Mapping, len)
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeNode<'a>> {
        trace!("visiting fields of record {}", name);
        self.node(Shape::Record, Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<'a>> {
        self.variant(variant, Shape::Record, len)
    }
}

impl ser::SerializeSeq for SerializeNode<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeNode<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeNode<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVariant<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.node.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeNode<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.field(&key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeNode<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeVariant<'_> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.node.field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

/// Renders a mapping key as its default textual form.
///
/// Composite keys have no textual form and are rejected.
struct KeySerializer;

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(Error::key_must_be_scalar(Shape::OrderedSequence))
    }

    fn serialize_none(self) -> Result<String> {
        Ok("null".to_string())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok("null".to_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Ok("null".to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::key_must_be_scalar(Shape::Record))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::key_must_be_scalar(Shape::OrderedSequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::key_must_be_scalar(Shape::FixedSequence))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::key_must_be_scalar(Shape::FixedSequence))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::key_must_be_scalar(Shape::FixedSequence))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::key_must_be_scalar(Shape::Mapping))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::key_must_be_scalar(Shape::Record))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::key_must_be_scalar(Shape::Record))
    }
}

/// Converts `value` into a [`Value`], honoring `options`.
pub(crate) fn to_value_with_options<T>(value: &T, options: &MapOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(CanonicalSerializer::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    fn convert<T: Serialize>(value: &T) -> Result<Value> {
        to_value_with_options(value, &MapOptions::default())
    }

    #[test]
    fn test_scalars_stay_leaves() {
        assert_eq!(convert(&123).unwrap(), Value::from(123));
        assert_eq!(convert(&"hi").unwrap(), Value::from("hi"));
        assert_eq!(convert(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(convert(&Some(1.5)).unwrap(), Value::from(1.5));
        assert_eq!(convert(&'x').unwrap(), Value::from("x"));
    }

    #[test]
    fn test_tuple_is_index_keyed() {
        let value = convert(&(1, "two", true)).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("0"), Some(&Value::from(1)));
        assert_eq!(map.get("1"), Some(&Value::from("two")));
        assert_eq!(map.get("2"), Some(&Value::from(true)));
    }

    #[test]
    fn test_integer_keys_use_display() {
        let mut source = BTreeMap::new();
        source.insert(7u32, "seven");
        source.insert(u32::MAX, "max");
        let value = convert(&source).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("7"), Some(&Value::from("seven")));
        assert_eq!(map.get(&u32::MAX.to_string()), Some(&Value::from("max")));
    }

    #[test]
    fn test_composite_key_is_rejected() {
        let mut source = BTreeMap::new();
        source.insert((1, 2), "pair");
        assert_eq!(
            convert(&source),
            Err(Error::key_must_be_scalar(Shape::FixedSequence))
        );
    }

    #[test]
    fn test_depth_limit() {
        let nested = vec![vec![vec![1]]];
        let shallow = MapOptions::new().with_max_depth(2);
        assert_eq!(
            to_value_with_options(&nested, &shallow),
            Err(Error::depth_limit_exceeded(2))
        );

        let deep_enough = MapOptions::new().with_max_depth(3);
        let value = to_value_with_options(&nested, &deep_enough).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.pointer(&["0", "0", "0"]), Some(&Value::from(1)));
    }

    #[test]
    fn test_bytes_become_sequence() {
        struct Raw;
        impl Serialize for Raw {
            fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
                s.serialize_bytes(&[0xde, 0xad])
            }
        }
        let value = convert(&Raw).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("0"), Some(&Value::from(0xdeu8)));
        assert_eq!(map.get("1"), Some(&Value::from(0xadu8)));
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(Shape::OrderedSequence.to_string(), "ordered sequence");
        assert!(Shape::Record.is_composite());
        assert!(!Shape::Scalar.is_composite());
    }
}
