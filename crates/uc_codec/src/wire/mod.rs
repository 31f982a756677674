//! The format-agnostic tree exchanged with the transport.
//!
//! ## Menu
//!
//! - [`WireNode`], [`Scalar`]: the tree itself.
//! - [`WireSerializer`]: a serde `Serializer` that produces a [`WireNode`],
//!   used to encode native values.
//! - [`WireNode`] implements `serde::Deserializer`, used to decode native values.
//! - [`WireNode`] implements `Serialize` and `Deserialize`, so any serde
//!   format can carry it.

// -----------------------------------------------------------------------------
// Modules

mod deserializer;
mod node;
mod serde_impls;
mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use node::{KeyedNode, Scalar, WireNode};
pub use serializer::WireSerializer;

/// Encode any serde-serializable value into a [`WireNode`].
///
/// # Examples
///
/// ```
/// use uc_codec::wire::{to_wire, WireNode};
///
/// let node = to_wire(&(1u8, "a")).unwrap();
/// assert_eq!(node, WireNode::Sequence(vec![1u8.into(), "a".into()]));
/// ```
#[inline]
pub fn to_wire<T: serde_core::Serialize + ?Sized>(
    value: &T,
) -> Result<WireNode, crate::CodecError> {
    value.serialize(WireSerializer)
}

/// Decode any serde-deserializable value from a [`WireNode`].
#[inline]
pub fn from_wire<T: serde_core::de::DeserializeOwned>(
    node: WireNode,
) -> Result<T, crate::CodecError> {
    T::deserialize(node)
}
