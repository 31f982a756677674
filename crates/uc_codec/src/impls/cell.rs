//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! ## NonGenericTypeInfoCell
//!
//! For non generic types. Internally a [`OnceLock`], almost no additional expense.
//!
//! ## GenericTypeInfoCell
//!
//! If the type is generic, the `static CELL` inside `type_info` is shared by
//! every instantiation, so the cell keeps one entry per [`TypeId`] in a map
//! behind a [`RwLock`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::info::TypeInfo;
use crate::registry::TypeIdMap;

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use uc_codec::impls::NonGenericTypeInfoCell;
/// use uc_codec::info::{NativeInfo, TypeInfo, Typed};
///
/// struct Celsius;
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Native(NativeInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Celsius::type_info().is::<Celsius>());
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, generating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use uc_codec::impls::GenericTypeInfoCell;
/// use uc_codec::info::{FieldInfo, ProductInfo, TypeInfo, Typed};
///
/// struct Wrapper<T>(T);
///
/// impl<T: Typed> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             TypeInfo::Product(ProductInfo::new::<Self>(&[FieldInfo::positional::<T>(0)]))
///         })
///     }
/// }
///
/// let a = <Wrapper<u8>>::type_info();
/// let b = <Wrapper<bool>>::type_info();
/// assert_ne!(a, b);
/// assert_eq!(a.as_product().unwrap().field_at(0).unwrap().type_path(), "u8");
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::with_hasher(
            crate::registry::TYPE_ID_HASH_STATE,
        )))
    }

    /// Returns the info stored for `G`, generating it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}
