use alloc::boxed::Box;

use crate::codec::{Decode, Decoder};
use crate::info::{TypeInfo, Typed};
use crate::{CodecError, Reflect, ReflectRef};

// `Box<T>` shares the info of `T`, which keeps recursive types such as
// `enum List { Nil, Cons(u8, Box<List>) }` describable.

impl<T: Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Typed + Reflect> Reflect for Box<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn is_excluded(&self) -> bool {
        (**self).is_excluded()
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
        T::decode(decoder).map(Box::new)
    }
}
