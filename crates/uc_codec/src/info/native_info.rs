use core::any::TypeId;

use crate::info::Typed;

/// Info of a type that converts itself through serde.
#[derive(Debug)]
pub struct NativeInfo {
    type_path: &'static str,
    type_id: TypeId,
}

impl NativeInfo {
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self {
            type_path: core::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
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
}

/// Info of a type with neither a native conversion nor a visible structure.
///
/// Such types classify as [`TypeShape::Unsupported`](crate::info::TypeShape::Unsupported).
#[derive(Debug)]
pub struct OpaqueInfo {
    type_path: &'static str,
    type_id: TypeId,
}

impl OpaqueInfo {
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self {
            type_path: core::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
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
}
