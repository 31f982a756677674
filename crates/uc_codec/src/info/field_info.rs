use alloc::borrow::Cow;
use alloc::string::ToString;
use core::any::TypeId;

use crate::info::{TypeInfo, Typed};

/// A field of a product type or of a case payload.
///
/// A field without a name is positional. `index` is the declaration index
/// among all fields, named or not.
#[derive(Clone, Debug)]
pub struct FieldInfo {
    name: Option<&'static str>,
    index: usize,
    type_id: TypeId,
    type_path: &'static str,
    type_info: fn() -> &'static TypeInfo,
}

impl FieldInfo {
    /// Create a named field of type `T` at declaration index `index`.
    #[inline]
    pub fn named<T: Typed>(name: &'static str, index: usize) -> Self {
        Self {
            name: Some(name),
            ..Self::positional::<T>(index)
        }
    }

    /// Create a positional field of type `T` at declaration index `index`.
    #[inline]
    pub fn positional<T: Typed>(index: usize) -> Self {
        Self {
            name: None,
            index,
            type_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
            type_info: T::type_info,
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    #[inline]
    pub fn is_positional(&self) -> bool {
        self.name.is_none()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The name, or for positional fields the declaration index as a string.
    ///
    /// This is the key positional fields are stored under when indices are
    /// used as names.
    pub fn key(&self) -> Cow<'static, str> {
        match self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.index.to_string()),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// The field type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
