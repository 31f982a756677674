use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::codec::{Decoder, Encoder, FieldValue};
use crate::info::FieldInfo;
use crate::registry::DEFAULT_REMAINDER_KEY;
use crate::wire::WireNode;
use crate::CodecError;

/// Receives every field of the value, in declaration order, and returns the
/// complete node for it.
pub type CustomEncodeFn = fn(&[FieldValue<'_>], &Encoder<'_>) -> Result<WireNode, CodecError>;

/// Receives every field descriptor and a decoder over the value's node, and
/// returns exactly one node per field, in declaration order.
pub type CustomDecodeFn = fn(&[FieldInfo], Decoder<'_>) -> Result<Vec<WireNode>, CodecError>;

/// A caller-supplied pair of functions that fully own the wire shape of a
/// mixed product.
#[derive(Clone, Copy)]
pub struct CustomStrategy {
    pub encode: CustomEncodeFn,
    pub decode: CustomDecodeFn,
}

impl CustomStrategy {
    #[inline]
    pub const fn new(encode: CustomEncodeFn, decode: CustomDecodeFn) -> Self {
        Self { encode, decode }
    }
}

impl Debug for CustomStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("CustomStrategy")
    }
}

/// How the positional fields of a product that also has named fields are
/// represented.
#[derive(Debug, Clone)]
pub enum MixedStrategy {
    /// Named fields at the top level, positional fields in declaration order
    /// as a sequence under the given key.
    UnnamedToRemainder(Cow<'static, str>),
    /// Positional fields keyed by their declaration index, next to the
    /// named fields.
    UseIndicesAsNames,
    /// Delegate the whole value to [`CustomStrategy`].
    Custom(CustomStrategy),
}

impl Default for MixedStrategy {
    #[inline]
    fn default() -> Self {
        Self::UnnamedToRemainder(Cow::Borrowed(DEFAULT_REMAINDER_KEY))
    }
}

impl MixedStrategy {
    /// Shorthand for [`MixedStrategy::UnnamedToRemainder`].
    #[inline]
    pub fn remainder(key: impl Into<Cow<'static, str>>) -> Self {
        Self::UnnamedToRemainder(key.into())
    }
}
