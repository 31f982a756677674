//! Tuples with a field count of 12 or less are positional products.
//!
//! `()` is the degenerate product: it encodes to an empty sequence and
//! decodes without reading anything.

use crate::build::{Construct, FieldSource, field_at, product_fields};
use crate::codec::{Decode, Decoder};
use crate::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
use crate::info::{FieldInfo, ProductInfo, TypeInfo, Typed};
use crate::ops::Product;
use crate::{CodecError, Reflect, ReflectRef};

impl Typed for () {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Product(ProductInfo::new::<Self>(&[])))
    }
}

impl Product for () {
    #[inline]
    fn field_at(&self, _index: usize) -> Option<&dyn Reflect> {
        None
    }

    #[inline]
    fn field_len(&self) -> usize {
        0
    }
}

impl Reflect for () {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Product(self)
    }
}

impl Construct for () {
    #[inline]
    fn construct<S: FieldSource>(_tag: usize, _source: &mut S) -> Result<Self, CodecError> {
        Ok(())
    }
}

impl Decode for () {
    #[inline]
    fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
        decoder.decode_structural()
    }
}

macro_rules! impl_tuple {
    ($num:literal : [$($index:tt : $name:ident),+]) => {
        #[cfg_attr(docsrs, doc(hidden))]
        impl<$($name: Typed),+> Typed for ($($name,)+) {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Product(ProductInfo::new::<Self>(&[
                        $(FieldInfo::positional::<$name>($index),)+
                    ]))
                })
            }
        }

        #[cfg_attr(docsrs, doc(hidden))]
        impl<$($name: Typed + Reflect),+> Product for ($($name,)+) {
            #[inline]
            fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
                match index {
                    $($index => Some(&self.$index as &dyn Reflect),)+
                    _ => None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                $num
            }
        }

        #[cfg_attr(docsrs, doc(hidden))]
        impl<$($name: Typed + Reflect),+> Reflect for ($($name,)+) {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Product(self)
            }
        }

        #[cfg_attr(docsrs, doc(hidden))]
        impl<$($name: Decode),+> Construct for ($($name,)+) {
            fn construct<S: FieldSource>(_tag: usize, source: &mut S) -> Result<Self, CodecError> {
                let fields = product_fields(Self::type_info())?;
                Ok(($(source.field::<$name>(field_at(fields, $index)?)?,)+))
            }
        }

        #[cfg_attr(docsrs, doc(hidden))]
        impl<$($name: Decode),+> Decode for ($($name,)+) {
            #[inline]
            fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
                decoder.decode_structural()
            }
        }
    };
}

impl_tuple!(1: [0: P0]);
impl_tuple!(2: [0: P0, 1: P1]);
impl_tuple!(3: [0: P0, 1: P1, 2: P2]);
impl_tuple!(4: [0: P0, 1: P1, 2: P2, 3: P3]);
impl_tuple!(5: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4]);
impl_tuple!(6: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5]);
impl_tuple!(7: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6]);
impl_tuple!(8: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7]);
impl_tuple!(9: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8]);
impl_tuple!(10: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9]);
impl_tuple!(11: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10]);
impl_tuple!(12: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7, 8: P8, 9: P9, 10: P10, 11: P11]);

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use crate::codec::{decode, encode};
    use crate::registry::TypeRegistry;
    use crate::wire::WireNode;
    use crate::ErrorKind;

    #[test]
    fn tuples_are_sequences() {
        let registry = TypeRegistry::new();
        let value = (1u8, String::from("a"), Some(false));

        let node = encode(&value, &registry).unwrap();
        assert_eq!(node, WireNode::from(vec![1u8.into(), "a".into(), false.into()]));
        assert_eq!(decode::<(u8, String, Option<bool>)>(node, &registry).unwrap(), value);
    }

    #[test]
    fn unit_is_degenerate() {
        let registry = TypeRegistry::new();
        assert_eq!(encode(&(), &registry).unwrap(), WireNode::Sequence(vec![]));
        // Nothing is read, so any node decodes.
        decode::<()>(WireNode::NULL, &registry).unwrap();
    }

    #[test]
    fn short_sequences_report_the_missing_index() {
        let registry = TypeRegistry::new();
        let node = WireNode::from(vec![1u8.into()]);

        let err = decode::<(u8, u8)>(node, &registry).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingField("1".into()));
        // A trailing optional is simply absent.
        let node = WireNode::from(vec![1u8.into()]);
        assert_eq!(decode::<(u8, Option<u8>)>(node, &registry).unwrap(), (1, None));
    }
}
