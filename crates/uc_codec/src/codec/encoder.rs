use alloc::vec::Vec;

use crate::codec::{product, sum};
use crate::info::{FieldInfo, TypeInfo};
use crate::registry::TypeRegistry;
use crate::wire::{WireNode, WireSerializer};
use crate::{CodecError, ErrorKind, Reflect, ReflectRef};

/// A field of a value being encoded.
///
/// Passed to custom strategies, which receive every field of the value.
#[derive(Clone, Copy, Debug)]
pub struct FieldValue<'a> {
    pub info: &'a FieldInfo,
    pub value: &'a dyn Reflect,
}

/// Encodes reflected values into [`WireNode`]s.
///
/// Holds no state besides the registry; the nodes are built bottom-up and
/// returned.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> Encoder<'a> {
    #[inline]
    pub const fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub const fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Encode any reflected value.
    pub fn encode(&self, value: &dyn Reflect) -> Result<WireNode, CodecError> {
        let info = value.reflect_type_info();
        let reflected = value.reflect_ref();
        log::trace!("encoding `{}` as {}", info.type_path(), reflected.kind_name());

        match reflected {
            ReflectRef::Native(native) => erased_serde::serialize(native, WireSerializer),
            ReflectRef::Optional(None) => Ok(WireNode::NULL),
            ReflectRef::Optional(Some(inner)) => self.encode(inner),
            ReflectRef::Product(product) => {
                let TypeInfo::Product(product_info) = info else {
                    return Err(reflection_failure(info));
                };
                let fields = zip_fields(product_info.fields(), product.iter_fields())?;
                let config = self.registry.resolve(info);
                product::encode_fields(self, &fields, &config.mixed_strategy, false)
            }
            ReflectRef::Sum(value) => {
                let TypeInfo::Sum(sum_info) = info else {
                    return Err(reflection_failure(info));
                };
                sum::encode_sum(self, info, sum_info, value)
            }
            ReflectRef::List(list) => list
                .iter_items()
                .enumerate()
                .map(|(index, item)| self.encode(item).map_err(|err| err.within_index(index)))
                .collect::<Result<Vec<_>, _>>()
                .map(WireNode::Sequence),
            ReflectRef::Opaque => Err(CodecError::new(ErrorKind::UnsupportedShape(
                info.type_path(),
            ))),
        }
    }

    /// Encode one field, recording its position in the error path.
    pub fn encode_field(&self, field: &FieldValue<'_>) -> Result<WireNode, CodecError> {
        self.encode(field.value).map_err(|err| match field.info.name() {
            Some(name) => err.within_key(name),
            None => err.within_index(field.info.index()),
        })
    }
}

/// Pair each field descriptor with the value's field of the same index.
pub(super) fn zip_fields<'a>(
    infos: &'a [FieldInfo],
    values: impl ExactSizeIterator<Item = &'a dyn Reflect>,
) -> Result<Vec<FieldValue<'a>>, CodecError> {
    if infos.len() != values.len() {
        return Err(CodecError::custom(alloc::format!(
            "value exposes {} fields but its descriptor lists {}",
            values.len(),
            infos.len()
        )));
    }
    Ok(infos
        .iter()
        .zip(values)
        .map(|(info, value)| FieldValue { info, value })
        .collect())
}

#[cold]
pub(super) fn reflection_failure(info: &TypeInfo) -> CodecError {
    CodecError::new(ErrorKind::ReflectionFailure(info.type_path()))
}
