use alloc::boxed::Box;
use core::any::TypeId;
use core::slice::Iter;

use crate::info::{FieldInfo, Typed};
use crate::registry::{Customization, NameMap};

/// A container for compile-time product (struct, tuple) info.
#[derive(Debug)]
pub struct ProductInfo {
    type_path: &'static str,
    type_id: TypeId,
    fields: Box<[FieldInfo]>,
    field_indices: NameMap<usize>,
    named_len: usize,
    customization: Option<Customization>,
}

impl ProductInfo {
    /// Create a new [`ProductInfo`], `fields` in declaration order.
    pub fn new<T: Typed>(fields: &[FieldInfo]) -> Self {
        let mut field_indices = NameMap::default();
        let mut named_len = 0;

        for (index, field) in fields.iter().enumerate() {
            if let Some(name) = field.name() {
                field_indices.insert(name, index);
                named_len += 1;
            }
        }

        Self {
            type_path: core::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            fields: fields.to_vec().into_boxed_slice(),
            field_indices,
            named_len,
            customization: None,
        }
    }

    /// Attach the customization the type declares for itself.
    #[inline]
    pub fn with_customization(self, customization: Customization) -> Self {
        Self {
            customization: Some(customization),
            ..self
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

    /// Returns the named field with the given name.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.field_indices.get(name).map(|&index| &self.fields[index])
    }

    /// Returns the field at `index` in declaration order.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, FieldInfo> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn named_len(&self) -> usize {
        self.named_len
    }

    #[inline]
    pub fn positional_len(&self) -> usize {
        self.fields.len() - self.named_len
    }

    #[inline]
    pub fn customization(&self) -> Option<&Customization> {
        self.customization.as_ref()
    }
}
