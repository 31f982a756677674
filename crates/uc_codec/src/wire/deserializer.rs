use alloc::string::String;
use alloc::vec;

use serde_core::de::value::StringDeserializer;
use serde_core::de::{
    self, DeserializeSeed, Deserializer, EnumAccess, IntoDeserializer, MapAccess, SeqAccess,
    VariantAccess, Visitor,
};
use serde_core::forward_to_deserialize_any;

use super::{KeyedNode, Scalar, WireNode};
use crate::CodecError;

// An owned node is its own deserializer, so native values decode straight
// out of the tree without a second pass through a text format.
impl<'de> Deserializer<'de> for WireNode {
    type Error = CodecError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        match self {
            WireNode::Scalar(Scalar::Null) => visitor.visit_unit(),
            WireNode::Scalar(Scalar::Bool(v)) => visitor.visit_bool(v),
            WireNode::Scalar(Scalar::Int(v)) => visitor.visit_i64(v),
            WireNode::Scalar(Scalar::UInt(v)) => visitor.visit_u64(v),
            WireNode::Scalar(Scalar::Float(v)) => visitor.visit_f64(v),
            WireNode::Scalar(Scalar::Str(v)) => visitor.visit_string(v),
            WireNode::Sequence(items) => visitor.visit_seq(SeqDeserializer {
                iter: items.into_iter(),
            }),
            WireNode::Keyed(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        if self.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    #[inline]
    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        match self {
            WireNode::Scalar(Scalar::Str(variant)) => visitor.visit_enum(EnumDeserializer {
                variant,
                value: None,
            }),
            WireNode::Keyed(map) if map.len() == 1 => {
                let Some((variant, value)) = map.into_iter().next() else {
                    return Err(CodecError::mismatch("single-entry keyed", "keyed"));
                };
                visitor.visit_enum(EnumDeserializer {
                    variant,
                    value: Some(value),
                })
            }
            other => Err(CodecError::mismatch("enum", other.kind_name())),
        }
    }

    #[inline]
    fn is_human_readable(&self) -> bool {
        true
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl IntoDeserializer<'_, CodecError> for WireNode {
    type Deserializer = Self;

    #[inline]
    fn into_deserializer(self) -> Self {
        self
    }
}

// -----------------------------------------------------------------------------
// Access helpers

struct SeqDeserializer {
    iter: vec::IntoIter<WireNode>,
}

impl<'de> SeqAccess<'de> for SeqDeserializer {
    type Error = CodecError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, CodecError> {
        match self.iter.next() {
            Some(node) => seed.deserialize(node).map(Some),
            None => Ok(None),
        }
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: alloc::collections::btree_map::IntoIter<String, WireNode>,
    value: Option<WireNode>,
}

impl MapDeserializer {
    #[inline]
    fn new(map: KeyedNode) -> Self {
        Self {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> MapAccess<'de> for MapDeserializer {
    type Error = CodecError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, CodecError> {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                let key: StringDeserializer<CodecError> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, CodecError> {
        let value = self
            .value
            .take()
            .ok_or_else(|| CodecError::custom("map value requested before its key"))?;
        seed.deserialize(value)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<WireNode>,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = CodecError;
    type Variant = VariantDeserializer;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, VariantDeserializer), CodecError> {
        let variant: StringDeserializer<CodecError> = self.variant.into_deserializer();
        let value = seed.deserialize(variant)?;
        Ok((value, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<WireNode>,
}

impl<'de> VariantAccess<'de> for VariantDeserializer {
    type Error = CodecError;

    fn unit_variant(self) -> Result<(), CodecError> {
        match self.value {
            None => Ok(()),
            Some(node) if node.is_null() => Ok(()),
            Some(node) => Err(CodecError::mismatch("unit variant", node.kind_name())),
        }
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(self, seed: T) -> Result<T::Value, CodecError> {
        match self.value {
            Some(node) => seed.deserialize(node),
            None => Err(CodecError::mismatch("newtype variant", "unit variant")),
        }
    }

    fn tuple_variant<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, CodecError> {
        match self.value {
            Some(WireNode::Sequence(items)) => visitor.visit_seq(SeqDeserializer {
                iter: items.into_iter(),
            }),
            Some(other) => Err(CodecError::mismatch("sequence", other.kind_name())),
            None => Err(CodecError::mismatch("tuple variant", "unit variant")),
        }
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        match self.value {
            Some(WireNode::Keyed(map)) => visitor.visit_map(MapDeserializer::new(map)),
            Some(other) => Err(CodecError::mismatch("keyed", other.kind_name())),
            None => Err(CodecError::mismatch("struct variant", "unit variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::super::{from_wire, to_wire};

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: Option<f32>,
        tags: Vec<String>,
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    enum Mode {
        Off,
        Level(u8),
        Range { lo: u8, hi: u8 },
    }

    #[test]
    fn native_struct_round_trip() {
        let point = Point {
            x: -3,
            y: None,
            tags: alloc::vec!["a".into()],
        };
        let node = to_wire(&point).unwrap();
        assert_eq!(from_wire::<Point>(node).unwrap(), point);
    }

    #[test]
    fn native_enum_round_trip() {
        for mode in [Mode::Off, Mode::Level(9), Mode::Range { lo: 1, hi: 2 }] {
            let node = to_wire(&mode).unwrap();
            assert_eq!(from_wire::<Mode>(node).unwrap(), mode);
        }
    }

    #[test]
    fn numbers_coerce_through_visitors() {
        assert_eq!(from_wire::<f64>(7u8.into()).unwrap(), 7.0);
        assert_eq!(from_wire::<u8>(7i64.into()).unwrap(), 7);
        assert!(from_wire::<u8>((-1i64).into()).is_err());
    }
}
