use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;

use serde_core::ser::{self, Serialize};

use super::{KeyedNode, Scalar, WireNode};
use crate::CodecError;

/// A serde `Serializer` whose output is a [`WireNode`].
///
/// Follows serde's externally tagged enum layout: unit variants become
/// strings, every other variant a single-entry keyed node.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireSerializer;

impl ser::Serializer for WireSerializer {
    type Ok = WireNode;
    type Error = CodecError;

    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = VariantSerializer<SeqSerializer>;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = VariantSerializer<MapSerializer>;

    #[inline]
    fn serialize_bool(self, v: bool) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_i8(self, v: i8) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_i16(self, v: i16) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_i32(self, v: i32) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_i64(self, v: i64) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    fn serialize_i128(self, v: i128) -> Result<WireNode, CodecError> {
        i64::try_from(v)
            .map(Into::into)
            .map_err(|_| CodecError::custom("i128 value out of range"))
    }

    #[inline]
    fn serialize_u8(self, v: u8) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_u16(self, v: u16) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_u32(self, v: u32) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_u64(self, v: u64) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    fn serialize_u128(self, v: u128) -> Result<WireNode, CodecError> {
        u64::try_from(v)
            .map(Into::into)
            .map_err(|_| CodecError::custom("u128 value out of range"))
    }

    #[inline]
    fn serialize_f32(self, v: f32) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_f64(self, v: f64) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<WireNode, CodecError> {
        Ok(WireNode::Scalar(Scalar::Str(v.to_string())))
    }

    #[inline]
    fn serialize_str(self, v: &str) -> Result<WireNode, CodecError> {
        Ok(v.into())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<WireNode, CodecError> {
        Ok(WireNode::Sequence(v.iter().map(|b| (*b).into()).collect()))
    }

    #[inline]
    fn serialize_none(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::NULL)
    }

    #[inline]
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<WireNode, CodecError> {
        value.serialize(self)
    }

    #[inline]
    fn serialize_unit(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::NULL)
    }

    #[inline]
    fn serialize_unit_struct(self, _name: &'static str) -> Result<WireNode, CodecError> {
        Ok(WireNode::NULL)
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<WireNode, CodecError> {
        Ok(variant.into())
    }

    #[inline]
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<WireNode, CodecError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<WireNode, CodecError> {
        let mut map = KeyedNode::new();
        map.insert(variant.into(), value.serialize(self)?);
        Ok(WireNode::Keyed(map))
    }

    #[inline]
    fn serialize_seq(self, len: Option<usize>) -> Result<SeqSerializer, CodecError> {
        Ok(SeqSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    #[inline]
    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer, CodecError> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqSerializer, CodecError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSerializer<SeqSerializer>, CodecError> {
        Ok(VariantSerializer {
            variant,
            inner: self.serialize_seq(Some(len))?,
        })
    }

    #[inline]
    fn serialize_map(self, _len: Option<usize>) -> Result<MapSerializer, CodecError> {
        Ok(MapSerializer {
            map: KeyedNode::new(),
            next_key: None,
        })
    }

    #[inline]
    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<MapSerializer, CodecError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSerializer<MapSerializer>, CodecError> {
        Ok(VariantSerializer {
            variant,
            inner: self.serialize_map(Some(len))?,
        })
    }

    #[inline]
    fn collect_str<T: ?Sized + Display>(self, value: &T) -> Result<WireNode, CodecError> {
        Ok(WireNode::Scalar(Scalar::Str(value.to_string())))
    }

    #[inline]
    fn is_human_readable(&self) -> bool {
        true
    }
}

// -----------------------------------------------------------------------------
// Compound serializers

#[doc(hidden)]
pub struct SeqSerializer {
    items: Vec<WireNode>,
}

impl SeqSerializer {
    #[inline]
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CodecError> {
        self.items.push(value.serialize(WireSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqSerializer {
    type Ok = WireNode;
    type Error = CodecError;

    #[inline]
    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CodecError> {
        self.push(value)
    }

    #[inline]
    fn end(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::Sequence(self.items))
    }
}

impl ser::SerializeTuple for SeqSerializer {
    type Ok = WireNode;
    type Error = CodecError;

    #[inline]
    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CodecError> {
        self.push(value)
    }

    #[inline]
    fn end(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::Sequence(self.items))
    }
}

impl ser::SerializeTupleStruct for SeqSerializer {
    type Ok = WireNode;
    type Error = CodecError;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CodecError> {
        self.push(value)
    }

    #[inline]
    fn end(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::Sequence(self.items))
    }
}

#[doc(hidden)]
pub struct MapSerializer {
    map: KeyedNode,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapSerializer {
    type Ok = WireNode;
    type Error = CodecError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), CodecError> {
        // Keyed nodes only accept string keys; scalar keys are stringified.
        let key = match key.serialize(WireSerializer)? {
            WireNode::Scalar(Scalar::Str(s)) => s,
            WireNode::Scalar(Scalar::Int(v)) => v.to_string(),
            WireNode::Scalar(Scalar::UInt(v)) => v.to_string(),
            WireNode::Scalar(Scalar::Bool(v)) => v.to_string(),
            other => return Err(CodecError::mismatch("string key", other.kind_name())),
        };
        self.next_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CodecError> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| CodecError::custom("map value serialized before its key"))?;
        self.map.insert(key, value.serialize(WireSerializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::Keyed(self.map))
    }
}

impl ser::SerializeStruct for MapSerializer {
    type Ok = WireNode;
    type Error = CodecError;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CodecError> {
        self.map.insert(key.into(), value.serialize(WireSerializer)?);
        Ok(())
    }

    #[inline]
    fn end(self) -> Result<WireNode, CodecError> {
        Ok(WireNode::Keyed(self.map))
    }
}

/// Wraps a compound serializer's output as `{ variant: output }`.
#[doc(hidden)]
pub struct VariantSerializer<S> {
    variant: &'static str,
    inner: S,
}

impl<S> VariantSerializer<S> {
    fn wrap(variant: &'static str, node: WireNode) -> WireNode {
        let mut map = KeyedNode::new();
        map.insert(variant.into(), node);
        WireNode::Keyed(map)
    }
}

impl ser::SerializeTupleVariant for VariantSerializer<SeqSerializer> {
    type Ok = WireNode;
    type Error = CodecError;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), CodecError> {
        self.inner.push(value)
    }

    fn end(self) -> Result<WireNode, CodecError> {
        let node = ser::SerializeSeq::end(self.inner)?;
        Ok(Self::wrap(self.variant, node))
    }
}

impl ser::SerializeStructVariant for VariantSerializer<MapSerializer> {
    type Ok = WireNode;
    type Error = CodecError;

    #[inline]
    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CodecError> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<WireNode, CodecError> {
        let node = ser::SerializeStruct::end(self.inner)?;
        Ok(Self::wrap(self.variant, node))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::super::to_wire;
    use super::*;

    #[test]
    fn natives_follow_serde_layout() {
        #[derive(serde::Serialize)]
        enum Native {
            Unit,
            New(u8),
            Pair(u8, bool),
        }

        assert_eq!(to_wire(&Native::Unit).unwrap(), "Unit".into());

        let mut expected = KeyedNode::new();
        expected.insert("New".into(), 3u8.into());
        assert_eq!(to_wire(&Native::New(3)).unwrap(), WireNode::Keyed(expected));

        let mut expected = KeyedNode::new();
        expected.insert(
            "Pair".into(),
            WireNode::Sequence(vec![1u8.into(), true.into()]),
        );
        assert_eq!(
            to_wire(&Native::Pair(1, true)).unwrap(),
            WireNode::Keyed(expected)
        );
    }

    #[test]
    fn integer_map_keys_are_stringified() {
        let mut map = alloc::collections::BTreeMap::new();
        map.insert(7u32, "seven");

        let node = to_wire(&map).unwrap();
        assert_eq!(node.get("7"), Some(&"seven".into()));
    }
}
