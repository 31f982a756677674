use core::any::TypeId;

use crate::info::{TypeInfo, Typed};

/// Info of an optional value, i.e. `Option<T>`.
#[derive(Debug)]
pub struct OptionalInfo {
    type_path: &'static str,
    type_id: TypeId,
    inner_info: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    #[inline]
    pub fn new<T: Typed, Inner: Typed>() -> Self {
        Self {
            type_path: core::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            inner_info: Inner::type_info,
        }
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The wrapped type's info.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner_info)()
    }
}
