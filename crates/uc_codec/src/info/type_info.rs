use core::any::TypeId;

use crate::info::{
    ListInfo, NativeInfo, OpaqueInfo, OptionalInfo, ProductInfo, SumInfo, TypeShape, classify,
};
use crate::registry::Customization;

/// Compile-time type information, one variant per structural kind.
///
/// Usually obtained through [`Typed::type_info`](crate::info::Typed::type_info)
/// and therefore `'static`.
#[derive(Debug)]
pub enum TypeInfo {
    Native(NativeInfo),
    Optional(OptionalInfo),
    Product(ProductInfo),
    Sum(SumInfo),
    List(ListInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_fn {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Try to get [`", stringify!($info), "`].")]
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    pub fn type_path(&self) -> &'static str {
        match self {
            Self::Native(info) => info.type_path(),
            Self::Optional(info) => info.type_path(),
            Self::Product(info) => info.type_path(),
            Self::Sum(info) => info.type_path(),
            Self::List(info) => info.type_path(),
            Self::Opaque(info) => info.type_path(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        match self {
            Self::Native(info) => info.type_id(),
            Self::Optional(info) => info.type_id(),
            Self::Product(info) => info.type_id(),
            Self::Sum(info) => info.type_id(),
            Self::List(info) => info.type_id(),
            Self::Opaque(info) => info.type_id(),
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// Classify this type. See [`classify`].
    #[inline]
    pub fn shape(&'static self) -> TypeShape {
        classify(self)
    }

    /// The customization the type declares for itself, if any.
    pub fn customization(&self) -> Option<&Customization> {
        match self {
            Self::Product(info) => info.customization(),
            Self::Sum(info) => info.customization(),
            _ => None,
        }
    }

    impl_cast_fn!(as_product: Product => ProductInfo);
    impl_cast_fn!(as_sum: Sum => SumInfo);
    impl_cast_fn!(as_optional: Optional => OptionalInfo);
    impl_cast_fn!(as_list: List => ListInfo);
}

// Two infos describe the same type exactly when their `TypeId`s agree.
impl PartialEq for TypeInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for TypeInfo {}
