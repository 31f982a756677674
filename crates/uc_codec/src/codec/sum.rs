use alloc::vec;
use alloc::vec::Vec;

use crate::build::{Construct, build, invalid_tag};
use crate::codec::encoder::{reflection_failure, zip_fields};
use crate::codec::product::{encode_fields, into_keyed, resolve_fields};
use crate::codec::{Decoder, Encoder};
use crate::info::{CaseInfo, FieldInfo, SumInfo, TypeInfo};
use crate::ops::Sum;
use crate::registry::{CodecConfig, TypeRegistry};
use crate::wire::{KeyedNode, Scalar, WireNode};
use crate::{CodecError, ErrorKind};

// -----------------------------------------------------------------------------
// Encode

pub(super) fn encode_sum(
    encoder: &Encoder<'_>,
    info: &'static TypeInfo,
    sum_info: &'static SumInfo,
    value: &dyn Sum,
) -> Result<WireNode, CodecError> {
    let tag = value.variant_index();
    let case = sum_info.case_at(tag).ok_or_else(|| invalid_tag(info, tag))?;
    let config = encoder.registry().resolve(info);

    let mut map = KeyedNode::new();
    map.insert(config.case_name_key.clone().into_owned(), case.name().into());

    if case.has_payload() {
        encode_payload(encoder, &config, case, value, &mut map)
            .map_err(|err| err.within_case(case.name()))?;
    }

    Ok(WireNode::Keyed(map))
}

fn encode_payload(
    encoder: &Encoder<'_>,
    config: &CodecConfig,
    case: &CaseInfo,
    value: &dyn Sum,
    map: &mut KeyedNode,
) -> Result<(), CodecError> {
    let fields = zip_fields(case.fields(), value.iter_fields())?;

    if !config.inline_payload {
        let payload = match fields.as_slice() {
            [single] if single.info.is_positional() => encoder.encode_field(single)?,
            _ => encode_fields(encoder, &fields, &config.mixed_strategy, false)?,
        };
        map.insert(config.payload_key.clone().into_owned(), payload);
        return Ok(());
    }

    let entries = into_keyed(encode_fields(encoder, &fields, &config.mixed_strategy, true)?)?;
    for (key, node) in entries {
        if map.contains_key(&key) {
            return Err(CodecError::custom(alloc::format!(
                "inlined payload entry `{key}` collides with the case name key"
            )));
        }
        map.insert(key, node);
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Decode

/// Decode a sum type `T` from the decoder's node.
pub(super) fn decode_sum<T: Construct>(decoder: Decoder<'_>) -> Result<T, CodecError> {
    let info = T::type_info();
    let TypeInfo::Sum(sum_info) = info else {
        return Err(reflection_failure(info));
    };
    let registry = decoder.registry();
    let config = registry.resolve(info);

    let mut map = into_keyed(decoder.into_node())?;
    let name = match map.remove(&*config.case_name_key) {
        Some(WireNode::Scalar(Scalar::Str(name))) => name,
        Some(other) => {
            return Err(CodecError::mismatch("string", other.kind_name())
                .within_key(&config.case_name_key));
        }
        None => return Err(CodecError::missing_field(config.case_name_key.clone())),
    };

    let Some(case) = sum_info.case(&name) else {
        return Err(CodecError::new(ErrorKind::InvalidCase(name)));
    };
    let tag = case.tag();
    log::trace!("decoding case `{name}` (tag {tag}) of `{}`", info.type_path());

    if !case.has_payload() {
        return build(tag, registry, |_| None);
    }

    let mut nodes = resolve_payload(registry, &config, case.fields(), map)
        .map_err(|err| err.within_case(&name))?;

    build(tag, registry, |field| nodes.get_mut(field.index()).and_then(Option::take))
        .map_err(|err| err.within_case(&name))
}

fn resolve_payload(
    registry: &TypeRegistry,
    config: &CodecConfig,
    fields: &[FieldInfo],
    mut map: KeyedNode,
) -> Result<Vec<Option<WireNode>>, CodecError> {
    if config.inline_payload {
        let decoder = Decoder::new(WireNode::Keyed(map), registry);
        return resolve_fields(decoder, fields, &config.mixed_strategy, true);
    }

    let Some(payload) = map.remove(&*config.payload_key) else {
        return Err(CodecError::missing_field(config.payload_key.clone()));
    };

    match fields {
        [single] if single.is_positional() => Ok(vec![Some(payload)]),
        _ => resolve_fields(
            Decoder::new(payload, registry),
            fields,
            &config.mixed_strategy,
            false,
        )
        .map_err(|err| err.within_key(&config.payload_key)),
    }
}
