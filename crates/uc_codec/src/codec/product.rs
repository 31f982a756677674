use alloc::vec::Vec;

use crate::build::{Construct, build, product_fields};
use crate::codec::{Decoder, Encoder, FieldValue};
use crate::info::{FieldInfo, TypeShape, classify_fields};
use crate::registry::MixedStrategy;
use crate::wire::{KeyedNode, WireNode};
use crate::CodecError;

// -----------------------------------------------------------------------------
// Encode

/// Encode product fields according to their shape.
///
/// `inlined` is set when the result is merged into an enclosing keyed node;
/// positional fields then go through `strategy` like mixed ones.
pub(super) fn encode_fields(
    encoder: &Encoder<'_>,
    fields: &[FieldValue<'_>],
    strategy: &MixedStrategy,
    inlined: bool,
) -> Result<WireNode, CodecError> {
    match classify_fields(fields.iter().map(|field| field.info)) {
        TypeShape::ProductNamed => encode_keyed(encoder, fields),
        TypeShape::ProductPositional if fields.is_empty() => Ok(WireNode::Sequence(Vec::new())),
        TypeShape::ProductPositional if !inlined => fields
            .iter()
            .map(|field| encoder.encode_field(field))
            .collect::<Result<Vec<_>, _>>()
            .map(WireNode::Sequence),
        _ => encode_mixed(encoder, fields, strategy),
    }
}

fn encode_mixed(
    encoder: &Encoder<'_>,
    fields: &[FieldValue<'_>],
    strategy: &MixedStrategy,
) -> Result<WireNode, CodecError> {
    match strategy {
        MixedStrategy::UnnamedToRemainder(key) => {
            let (named, positional): (Vec<_>, Vec<_>) = fields
                .iter()
                .copied()
                .partition(|field| !field.info.is_positional());

            let mut map = keyed_fields(encoder, &named)?;
            if map.contains_key(&**key) {
                return Err(duplicate_key(key));
            }
            let remainder = positional
                .iter()
                .map(|field| encoder.encode_field(field))
                .collect::<Result<Vec<_>, _>>()?;

            map.insert(key.clone().into_owned(), WireNode::Sequence(remainder));
            Ok(WireNode::Keyed(map))
        }
        MixedStrategy::UseIndicesAsNames => encode_keyed(encoder, fields),
        MixedStrategy::Custom(custom) => {
            log::debug!("handing {} fields to a custom strategy", fields.len());
            (custom.encode)(fields, encoder)
        }
    }
}

#[inline]
fn encode_keyed(encoder: &Encoder<'_>, fields: &[FieldValue<'_>]) -> Result<WireNode, CodecError> {
    keyed_fields(encoder, fields).map(WireNode::Keyed)
}

/// Every field under its key. Two fields sharing a key cannot be told apart
/// when decoding, so that is an error.
fn keyed_fields(encoder: &Encoder<'_>, fields: &[FieldValue<'_>]) -> Result<KeyedNode, CodecError> {
    let mut map = KeyedNode::new();
    for field in fields {
        let key = field.info.key();
        if map.contains_key(&*key) {
            return Err(duplicate_key(&key));
        }
        map.insert(key.into_owned(), encoder.encode_field(field)?);
    }
    Ok(map)
}

#[cold]
fn duplicate_key(key: &str) -> CodecError {
    CodecError::custom(alloc::format!("more than one entry is keyed `{key}`"))
}

// -----------------------------------------------------------------------------
// Decode

/// Decode a product type `T` from the decoder's node.
pub(super) fn decode_product<T: Construct>(decoder: Decoder<'_>) -> Result<T, CodecError> {
    let info = T::type_info();
    let fields = product_fields(info)?;
    let registry = decoder.registry();
    let config = registry.resolve(info);

    let mut nodes = resolve_fields(decoder, fields, &config.mixed_strategy, false)?;
    build(0, registry, |field| nodes.get_mut(field.index()).and_then(Option::take))
}

/// Resolve the node of every field, in declaration order.
///
/// The exact inverse of [`encode_fields`]. `None` marks a field absent from
/// the wire; whether that is an error is decided when the field is built.
/// Zero-field products consume nothing.
pub(super) fn resolve_fields(
    decoder: Decoder<'_>,
    fields: &[FieldInfo],
    strategy: &MixedStrategy,
    inlined: bool,
) -> Result<Vec<Option<WireNode>>, CodecError> {
    match classify_fields(fields) {
        TypeShape::ProductNamed => {
            let mut map = into_keyed(decoder.into_node())?;
            Ok(fields.iter().map(|field| map.remove(&*field.key())).collect())
        }
        TypeShape::ProductPositional if fields.is_empty() => Ok(Vec::new()),
        TypeShape::ProductPositional if !inlined => {
            let items = match decoder.into_node() {
                WireNode::Sequence(items) => items,
                other => return Err(CodecError::mismatch("sequence", other.kind_name())),
            };
            let mut items = items.into_iter();
            Ok(fields.iter().map(|_| items.next()).collect())
        }
        _ => resolve_mixed(decoder, fields, strategy),
    }
}

fn resolve_mixed(
    decoder: Decoder<'_>,
    fields: &[FieldInfo],
    strategy: &MixedStrategy,
) -> Result<Vec<Option<WireNode>>, CodecError> {
    match strategy {
        MixedStrategy::UnnamedToRemainder(key) => {
            let mut map = into_keyed(decoder.into_node())?;
            let mut remainder = match map.remove(&**key) {
                Some(WireNode::Sequence(items)) => items.into_iter(),
                Some(other) => {
                    return Err(CodecError::mismatch("sequence", other.kind_name())
                        .within_key(key));
                }
                None => Vec::new().into_iter(),
            };

            Ok(fields
                .iter()
                .map(|field| match field.name() {
                    Some(name) => map.remove(name),
                    None => remainder.next(),
                })
                .collect())
        }
        MixedStrategy::UseIndicesAsNames => {
            let mut map = into_keyed(decoder.into_node())?;
            Ok(fields.iter().map(|field| map.remove(&*field.key())).collect())
        }
        MixedStrategy::Custom(custom) => {
            log::debug!("handing {} fields to a custom strategy", fields.len());
            let nodes = (custom.decode)(fields, decoder)?;
            if nodes.len() != fields.len() {
                return Err(CodecError::custom(alloc::format!(
                    "custom strategy returned {} nodes for {} fields",
                    nodes.len(),
                    fields.len()
                )));
            }
            Ok(nodes.into_iter().map(Some).collect())
        }
    }
}

// -----------------------------------------------------------------------------
// Helpers

pub(super) fn into_keyed(node: WireNode) -> Result<KeyedNode, CodecError> {
    match node {
        WireNode::Keyed(map) => Ok(map),
        other => Err(CodecError::mismatch("keyed", other.kind_name())),
    }
}
