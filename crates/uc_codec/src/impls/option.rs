use crate::codec::{Decode, Decoder};
use crate::impls::GenericTypeInfoCell;
use crate::info::{OptionalInfo, TypeInfo, Typed};
use crate::{CodecError, Reflect, ReflectRef};

impl<T: Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Optional(OptionalInfo::new::<Self, T>()))
    }
}

impl<T: Typed + Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self.as_ref().map(|value| value as &dyn Reflect))
    }
}

impl<T: Decode> Decode for Option<T> {
    #[inline]
    fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
        decoder.decode_optional()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::codec::{decode, encode};
    use crate::registry::TypeRegistry;
    use crate::wire::WireNode;

    #[test]
    fn none_is_null() {
        let registry = TypeRegistry::new();
        assert_eq!(encode(&None::<u8>, &registry).unwrap(), WireNode::NULL);
        assert_eq!(decode::<Option<u8>>(WireNode::NULL, &registry).unwrap(), None);
    }

    #[test]
    fn some_is_transparent() {
        let registry = TypeRegistry::new();
        let node = encode(&Some(String::from("hi")), &registry).unwrap();
        assert_eq!(node, WireNode::from("hi"));
        assert_eq!(
            decode::<Option<String>>(node, &registry).unwrap().as_deref(),
            Some("hi")
        );
    }
}
