use serde_core::de::DeserializeOwned;

use crate::build::Construct;
use crate::codec::{product, sum};
use crate::info::{TypeShape, Typed};
use crate::registry::TypeRegistry;
use crate::wire::WireNode;
use crate::{CodecError, ErrorKind};

/// A type that can be decoded from a [`WireNode`].
///
/// Implemented for the primitives, the std containers, tuples and every
/// type deriving [`Uncodable`](crate::derive::Uncodable). Structural types
/// forward to [`Decoder::decode_structural`].
pub trait Decode: Typed + Sized {
    fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError>;
}

/// Owns the node being decoded and the registry configuring its types.
///
/// Decoding consumes the decoder; nested values get decoders of their own.
#[derive(Debug)]
pub struct Decoder<'a> {
    node: WireNode,
    registry: &'a TypeRegistry,
}

impl<'a> Decoder<'a> {
    #[inline]
    pub const fn new(node: WireNode, registry: &'a TypeRegistry) -> Self {
        Self { node, registry }
    }

    #[inline]
    pub fn node(&self) -> &WireNode {
        &self.node
    }

    #[inline]
    pub fn into_node(self) -> WireNode {
        self.node
    }

    #[inline]
    pub const fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Decode a `T`, whatever its shape.
    #[inline]
    pub fn decode<T: Decode>(self) -> Result<T, CodecError> {
        T::decode(self)
    }

    /// Decode a native value through serde.
    pub fn decode_native<T: DeserializeOwned>(self) -> Result<T, CodecError> {
        T::deserialize(self.node)
    }

    /// Decode `Option<T>`. Null decodes to `None`.
    pub fn decode_optional<T: Decode>(self) -> Result<Option<T>, CodecError> {
        if self.node.is_null() {
            return Ok(None);
        }
        T::decode(self).map(Some)
    }

    /// Decode a sequence of `T` into any collection.
    pub fn decode_list<T: Decode, C: FromIterator<T>>(self) -> Result<C, CodecError> {
        let registry = self.registry;
        match self.node {
            WireNode::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    T::decode(Decoder::new(item, registry)).map_err(|err| err.within_index(index))
                })
                .collect(),
            other => Err(CodecError::mismatch("sequence", other.kind_name())),
        }
    }

    /// Decode a product or sum type through its descriptors.
    pub fn decode_structural<T: Construct>(self) -> Result<T, CodecError> {
        let info = T::type_info();
        let shape = info.shape();
        log::trace!("decoding `{}` as {shape:?}", info.type_path());

        match shape {
            TypeShape::Sum => sum::decode_sum(self),
            shape if shape.is_product() => product::decode_product(self),
            _ => Err(CodecError::new(ErrorKind::UnsupportedShape(info.type_path()))),
        }
    }
}
