use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_core::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{KeyedNode, Scalar, WireNode};

// -----------------------------------------------------------------------------
// Serialize

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::Int(v) => serializer.serialize_i64(*v),
            Scalar::UInt(v) => serializer.serialize_u64(*v),
            Scalar::Float(v) => serializer.serialize_f64(*v),
            Scalar::Str(v) => serializer.serialize_str(v),
        }
    }
}

impl Serialize for WireNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WireNode::Scalar(scalar) => scalar.serialize(serializer),
            WireNode::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            WireNode::Keyed(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Deserialize

struct WireNodeVisitor;

impl<'de> Visitor<'de> for WireNodeVisitor {
    type Value = WireNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any wire value")
    }

    #[inline]
    fn visit_bool<E: de::Error>(self, v: bool) -> Result<WireNode, E> {
        Ok(v.into())
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<WireNode, E> {
        Ok(v.into())
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<WireNode, E> {
        Ok(v.into())
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<WireNode, E> {
        Ok(v.into())
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<WireNode, E> {
        Ok(v.into())
    }

    #[inline]
    fn visit_string<E: de::Error>(self, v: String) -> Result<WireNode, E> {
        Ok(v.into())
    }

    #[inline]
    fn visit_char<E: de::Error>(self, v: char) -> Result<WireNode, E> {
        let mut buf = [0u8; 4];
        Ok(WireNode::from(&*v.encode_utf8(&mut buf)))
    }

    #[inline]
    fn visit_unit<E: de::Error>(self) -> Result<WireNode, E> {
        Ok(WireNode::NULL)
    }

    #[inline]
    fn visit_none<E: de::Error>(self) -> Result<WireNode, E> {
        Ok(WireNode::NULL)
    }

    #[inline]
    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<WireNode, D::Error> {
        WireNode::deserialize(deserializer)
    }

    #[inline]
    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<WireNode, D::Error> {
        WireNode::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WireNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(WireNode::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WireNode, A::Error> {
        let mut keyed = KeyedNode::new();
        while let Some((key, value)) = map.next_entry::<String, WireNode>()? {
            keyed.insert(key, value);
        }
        Ok(WireNode::Keyed(keyed))
    }
}

impl<'de> Deserialize<'de> for WireNode {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WireNodeVisitor)
    }
}
