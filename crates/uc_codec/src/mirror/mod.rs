//! The write-only "pure value" fallback.
//!
//! [`mirror`] renders any reflected value without consulting the registry,
//! for diagnostics and for formats that only need to display a value. Its
//! output is not meant to be decoded by the structural codec.
//!
//! | value                 | mirrored as                                   |
//! |-----------------------|-----------------------------------------------|
//! | native                | itself                                        |
//! | `None` / `Some(v)`    | null / `v`                                    |
//! | struct                | keyed, one entry per field                    |
//! | tuple                 | sequence, named elements as `{name: value}`   |
//! | collection            | sequence                                      |
//! | case without payload  | null                                          |
//! | case with payload     | `{"type": name, "value": payload}`            |
//!
//! A payload of one positional field is mirrored as that field alone.
//! Fields wrapped in [`Excluded`](crate::Excluded) are skipped everywhere.

// -----------------------------------------------------------------------------
// Modules

mod mirrored_value;

// -----------------------------------------------------------------------------
// Exports

pub use mirrored_value::MirroredValue;

use alloc::vec::Vec;

use crate::info::{FieldInfo, TypeInfo, TypeShape, classify_fields};
use crate::wire::{KeyedNode, WireNode, WireSerializer};
use crate::{CodecError, ErrorKind, Reflect, ReflectRef};

/// Key holding the case name of a mirrored sum value.
pub const MIRROR_CASE_KEY: &str = "type";
/// Key holding the payload of a mirrored sum value.
pub const MIRROR_VALUE_KEY: &str = "value";

/// Render `value` as a pure value.
///
/// # Examples
///
/// ```
/// use uc_codec::{derive::Uncodable, mirror::mirror, wire::WireNode};
///
/// #[derive(Uncodable)]
/// enum Token {
///     End,
///     Number(i64),
/// }
///
/// assert_eq!(mirror(&Token::End).unwrap(), WireNode::NULL);
///
/// let node = mirror(&Token::Number(5)).unwrap();
/// assert_eq!(node.get("type").and_then(WireNode::as_str), Some("Number"));
/// assert_eq!(node.get("value"), Some(&WireNode::from(5)));
/// ```
pub fn mirror(value: &dyn Reflect) -> Result<WireNode, CodecError> {
    let info = value.reflect_type_info();

    match value.reflect_ref() {
        ReflectRef::Native(native) => erased_serde::serialize(native, WireSerializer),
        ReflectRef::Optional(None) => Ok(WireNode::NULL),
        ReflectRef::Optional(Some(inner)) => mirror(inner),
        ReflectRef::Product(product) => {
            let TypeInfo::Product(product_info) = info else {
                return Err(CodecError::new(ErrorKind::ReflectionFailure(info.type_path())));
            };
            mirror_fields(product_info.fields(), product.iter_fields(), false)
        }
        ReflectRef::Sum(sum) => {
            let TypeInfo::Sum(sum_info) = info else {
                return Err(CodecError::new(ErrorKind::ReflectionFailure(info.type_path())));
            };
            let tag = sum.variant_index();
            let Some(case) = sum_info.case_at(tag) else {
                return Err(crate::build::invalid_tag(info, tag));
            };
            if !case.has_payload() {
                return Ok(WireNode::NULL);
            }

            let payload = mirror_fields(case.fields(), sum.iter_fields(), true)
                .map_err(|err| err.within_case(case.name()))?;

            let mut map = KeyedNode::new();
            map.insert(MIRROR_CASE_KEY.into(), case.name().into());
            map.insert(MIRROR_VALUE_KEY.into(), payload);
            Ok(WireNode::Keyed(map))
        }
        ReflectRef::List(list) => list
            .iter_items()
            .enumerate()
            .map(|(index, item)| mirror(item).map_err(|err| err.within_index(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(WireNode::Sequence),
        ReflectRef::Opaque => Err(CodecError::new(ErrorKind::UnsupportedShape(info.type_path()))),
    }
}

fn mirror_fields<'a>(
    infos: &[FieldInfo],
    values: impl Iterator<Item = &'a dyn Reflect>,
    unwrap_single: bool,
) -> Result<WireNode, CodecError> {
    let shape = classify_fields(infos);
    let mut fields = infos
        .iter()
        .zip(values)
        .filter(|(_, value)| !value.is_excluded());

    if unwrap_single
        && let [single] = infos
        && single.is_positional()
    {
        return match fields.next() {
            Some((_, value)) => mirror(value).map_err(|err| err.within_index(0)),
            None => Ok(WireNode::NULL),
        };
    }

    match shape {
        TypeShape::ProductNamed => {
            let mut map = KeyedNode::new();
            for (info, value) in fields {
                let node = mirror(value).map_err(|err| err.within_key(&info.key()))?;
                map.insert(info.key().into_owned(), node);
            }
            Ok(WireNode::Keyed(map))
        }
        _ => fields
            .map(|(info, value)| {
                let node = mirror(value);
                match info.name() {
                    Some(name) => node
                        .map(|node| WireNode::Keyed(KeyedNode::from([(name.into(), node)])))
                        .map_err(|err| err.within_key(name)),
                    None => node.map_err(|err| err.within_index(info.index())),
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(WireNode::Sequence),
    }
}
