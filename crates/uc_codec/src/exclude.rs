use core::ops::{Deref, DerefMut};

use crate::codec::{Decode, Decoder};
use crate::info::{TypeInfo, Typed};
use crate::{CodecError, Reflect, ReflectRef};

/// Marks a field the [`mirror`](crate::mirror) fallback must skip.
///
/// The structural codec is unaffected: the wrapped value is encoded and
/// decoded exactly like a bare `T`, so excluding a field never changes the
/// wire form.
///
/// # Examples
///
/// ```
/// use uc_codec::{derive::Uncodable, mirror::mirror, Excluded};
///
/// #[derive(Uncodable)]
/// struct Login {
///     user: String,
///     password: Excluded<String>,
/// }
///
/// let login = Login { user: "ada".into(), password: Excluded("hunter2".into()) };
/// let node = mirror(&login).unwrap();
/// assert!(node.contains_key("user"));
/// assert!(!node.contains_key("password"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Excluded<T>(pub T);

impl<T> Excluded<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Excluded<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Excluded<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Excluded<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Typed> Typed for Excluded<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Typed + Reflect> Reflect for Excluded<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        self.0.reflect_ref()
    }

    #[inline]
    fn is_excluded(&self) -> bool {
        true
    }
}

impl<T: Decode> Decode for Excluded<T> {
    #[inline]
    fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
        T::decode(decoder).map(Self)
    }
}
