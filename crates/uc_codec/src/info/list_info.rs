use core::any::TypeId;

use crate::info::{TypeInfo, Typed};

/// Info of a homogeneous sequence, e.g. `Vec<T>`.
#[derive(Debug)]
pub struct ListInfo {
    type_path: &'static str,
    type_id: TypeId,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    #[inline]
    pub fn new<T: Typed, Item: Typed>() -> Self {
        Self {
            type_path: core::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            item_info: Item::type_info,
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

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}
