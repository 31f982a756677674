use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::codec::{Decode, Decoder};
use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::{CodecError, Reflect, ReflectRef};

macro_rules! impl_list {
    ($($list:ident),+) => {$(
        impl<T: Typed> Typed for $list<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Typed + Reflect> List for $list<T> {
            #[inline]
            fn item_at(&self, index: usize) -> Option<&dyn Reflect> {
                self.get(index).map(|item| item as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$list<T>>::len(self)
            }
        }

        impl<T: Typed + Reflect> Reflect for $list<T> {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }
        }

        impl<T: Decode> Decode for $list<T> {
            #[inline]
            fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
                decoder.decode_list()
            }
        }
    )+};
}

impl_list!(Vec, VecDeque);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::codec::{decode, encode};
    use crate::registry::TypeRegistry;
    use crate::wire::WireNode;
    use crate::{ErrorKind, PathSegment};

    #[test]
    fn lists_are_sequences() {
        let registry = TypeRegistry::new();
        let node = encode(&vec![true, false], &registry).unwrap();
        assert_eq!(node, WireNode::from(vec![true.into(), false.into()]));

        let back: VecDeque<bool> = decode(node, &registry).unwrap();
        assert_eq!(back, [true, false]);
    }

    #[test]
    fn item_errors_carry_their_index() {
        let registry = TypeRegistry::new();
        let node = WireNode::from(vec![1u8.into(), "two".into()]);

        let err = decode::<Vec<u8>>(node, &registry).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Custom(_)));
        assert_eq!(err.path().iter().next(), Some(&PathSegment::Index(1)));
    }

    #[test]
    fn non_sequence_is_a_mismatch() {
        let registry = TypeRegistry::new();
        let err = decode::<Vec<u8>>(WireNode::from(1u8), &registry).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    }
}
