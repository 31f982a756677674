//! The structural codec.
//!
//! [`Encoder::encode`] and [`Decoder::decode_structural`] are the generic
//! entry points. Both classify the type, resolve its config through the
//! [`TypeRegistry`], dispatch to the product or sum codec and recurse through
//! the same entry points for every field. Native values short-circuit the
//! recursion through serde.
//!
//! ## Product layout
//!
//! | shape                | wire form                                          |
//! |----------------------|----------------------------------------------------|
//! | named only           | keyed, one entry per field                         |
//! | positional only      | sequence in declaration order                      |
//! | no fields            | empty sequence, nothing read back                  |
//! | mixed                | per [`MixedStrategy`](crate::registry::MixedStrategy) |
//!
//! ## Sum layout
//!
//! The case name is written under the case name key. A payload is written
//! under the payload key, or merged into the same keyed node when inlined.
//! An inlined positional payload cannot be merged as a sequence, so it falls
//! back to the mixed strategy. This holds for a single positional field too,
//! even when that field is itself a struct: `Wrap(Point)` inlined becomes
//! `{"type": "Wrap", "remainder": [{..}]}` rather than merging the keys of
//! the `Point`. Not inlined, a payload of exactly one positional field is
//! written as that field's node.
//!
//! Two entries of one keyed node never share a key. A field named like the
//! remainder key, a field renamed to another field's index, or an inlined
//! entry named like the case name key fails to encode.

// -----------------------------------------------------------------------------
// Modules

mod decoder;
mod encoder;
mod product;
mod sum;

// -----------------------------------------------------------------------------
// Exports

pub use decoder::{Decode, Decoder};
pub use encoder::{Encoder, FieldValue};

use crate::registry::TypeRegistry;
use crate::wire::WireNode;
use crate::{CodecError, Reflect};

/// Encode `value` with the configs of `registry`.
///
/// Shorthand for [`Encoder::encode`].
#[inline]
pub fn encode(value: &dyn Reflect, registry: &TypeRegistry) -> Result<WireNode, CodecError> {
    Encoder::new(registry).encode(value)
}

/// Decode a `T` from `node` with the configs of `registry`.
///
/// Shorthand for [`Decoder::decode`].
#[inline]
pub fn decode<T: Decode>(node: WireNode, registry: &TypeRegistry) -> Result<T, CodecError> {
    Decoder::new(node, registry).decode()
}
