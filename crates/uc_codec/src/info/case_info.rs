use alloc::boxed::Box;
use core::slice::Iter;

use crate::info::{FieldInfo, TypeShape, classify_fields};

/// A case of a sum type.
///
/// `tag` is the declaration index of the case; it identifies the case when
/// the value is constructed and must agree between encode and decode.
#[derive(Clone, Debug)]
pub struct CaseInfo {
    name: &'static str,
    tag: usize,
    fields: Box<[FieldInfo]>,
}

impl CaseInfo {
    /// A case carrying a payload of `fields`, in declaration order.
    pub fn new(tag: usize, name: &'static str, fields: &[FieldInfo]) -> Self {
        Self {
            name,
            tag,
            fields: fields.to_vec().into_boxed_slice(),
        }
    }

    /// A case without payload.
    #[inline]
    pub fn unit(tag: usize, name: &'static str) -> Self {
        Self {
            name,
            tag,
            fields: Box::new([]),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn tag(&self) -> usize {
        self.tag
    }

    #[inline]
    pub fn has_payload(&self) -> bool {
        !self.fields.is_empty()
    }

    /// The payload fields. Empty for cases without payload.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, FieldInfo> {
        self.fields.iter()
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// The product shape of the payload.
    #[inline]
    pub fn payload_shape(&self) -> TypeShape {
        classify_fields(self.fields.iter())
    }
}
