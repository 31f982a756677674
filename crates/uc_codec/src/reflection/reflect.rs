use core::fmt::{Debug, Formatter};

use crate::info::DynamicTyped;
use crate::ops::{List, Product, Sum};

/// An immutable, kind-specific view of a reflected value.
///
/// The codecs dispatch on this. It must agree with the value's
/// [`TypeInfo`](crate::info::TypeInfo) variant.
pub enum ReflectRef<'a> {
    /// A value that serializes itself through serde.
    Native(&'a dyn erased_serde::Serialize),
    Optional(Option<&'a dyn Reflect>),
    Product(&'a dyn Product),
    Sum(&'a dyn Sum),
    List(&'a dyn List),
    /// A value with no accessible structure.
    Opaque,
}

impl ReflectRef<'_> {
    /// The name of the kind, for diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Native(_) => "native",
            Self::Optional(_) => "optional",
            Self::Product(_) => "product",
            Self::Sum(_) => "sum",
            Self::List(_) => "list",
            Self::Opaque => "opaque",
        }
    }
}

impl Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "ReflectRef::{}", self.kind_name())
    }
}

/// Read access to a value's structure, the encode side of the field visitor.
///
/// Implemented by [`#[derive(Uncodable)]`](crate::derive::Uncodable) and the
/// built-in impls. The decode side is [`Construct`](crate::build::Construct).
pub trait Reflect: DynamicTyped {
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Whether the mirror fallback must skip this value when it is a field.
    ///
    /// Only [`Excluded`](crate::Excluded) returns `true`.
    #[inline]
    fn is_excluded(&self) -> bool {
        false
    }
}

impl Debug for dyn Reflect + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_info().type_path())
    }
}
