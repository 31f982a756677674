use alloc::string::String;

/// Implement [`Typed`], [`Reflect`] and [`Decode`] for types that convert
/// themselves through serde.
///
/// The types must implement `Serialize` and `DeserializeOwned`.
///
/// # Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use uc_codec::{codec, impl_native, registry::TypeRegistry, wire::WireNode};
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Celsius(f32);
///
/// impl_native!(Celsius);
///
/// let registry = TypeRegistry::new();
/// let node = codec::encode(&Celsius(21.5), &registry).unwrap();
/// assert_eq!(node, WireNode::from(21.5f32));
/// assert_eq!(codec::decode::<Celsius>(node, &registry).unwrap(), Celsius(21.5));
/// ```
///
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`Decode`]: crate::codec::Decode
#[macro_export]
macro_rules! impl_native {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Native($crate::info::NativeInfo::new::<Self>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Native(self)
            }
        }

        impl $crate::codec::Decode for $ty {
            #[inline]
            fn decode(
                decoder: $crate::codec::Decoder<'_>,
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                decoder.decode_native()
            }
        }
    )+};
}

impl_native!(bool, char, String);
impl_native!(i8, i16, i32, i64, i128, isize);
impl_native!(u8, u16, u32, u64, u128, usize);
impl_native!(f32, f64);
