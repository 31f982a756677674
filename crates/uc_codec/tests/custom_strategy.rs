mod common;

use serde_json::json;
use uc_codec::codec::{Decoder, Encoder, FieldValue};
use uc_codec::derive::Uncodable;
use uc_codec::info::FieldInfo;
use uc_codec::registry::{CustomStrategy, Customization, MixedStrategy, TypeRegistry};
use uc_codec::wire::{KeyedNode, WireNode};
use uc_codec::{CodecError, ErrorKind};

use common::{from_json, to_json};

/// Every field under `"{index}:{key}"`.
fn encode_tagged(fields: &[FieldValue<'_>], encoder: &Encoder<'_>) -> Result<WireNode, CodecError> {
    let keys: Vec<_> = fields.iter().map(|field| field.info.key()).collect();
    assert_eq!(keys, ["label", "1", "2"]);

    let mut map = KeyedNode::new();
    for field in fields {
        let key = format!("{}:{}", field.info.index(), field.info.key());
        map.insert(key, encoder.encode_field(field)?);
    }
    Ok(WireNode::Keyed(map))
}

fn decode_tagged(fields: &[FieldInfo], decoder: Decoder<'_>) -> Result<Vec<WireNode>, CodecError> {
    let WireNode::Keyed(mut map) = decoder.into_node() else {
        return Err(CodecError::custom("expected a keyed node"));
    };
    fields
        .iter()
        .map(|field| {
            let key = format!("{}:{}", field.index(), field.key());
            map.remove(&key).ok_or_else(|| CodecError::missing_field(key))
        })
        .collect()
}

/// Drops the last field on the way back.
fn decode_short(fields: &[FieldInfo], decoder: Decoder<'_>) -> Result<Vec<WireNode>, CodecError> {
    let mut nodes = decode_tagged(fields, decoder)?;
    nodes.pop();
    Ok(nodes)
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(custom(encode = encode_tagged, decode = decode_tagged))]
struct Point {
    label: String,
    #[codec(positional)]
    x: i32,
    #[codec(positional)]
    y: i32,
}

#[derive(Uncodable, Debug, PartialEq)]
struct Plain {
    label: String,
    #[codec(positional)]
    x: i32,
    #[codec(positional)]
    y: i32,
}

#[test]
fn custom_functions_own_the_wire_shape() {
    let registry = TypeRegistry::new();
    let value = Point { label: "p".into(), x: -1, y: 2 };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"0:label": "p", "1:1": -1, "2:2": 2}));
    assert_eq!(from_json::<Point>(json, &registry).unwrap(), value);
}

#[test]
fn custom_strategy_from_the_registry() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Plain>(Customization::new().with_mixed_strategy(MixedStrategy::Custom(
        CustomStrategy::new(encode_tagged, decode_tagged),
    )));
    let value = Plain { label: "q".into(), x: 3, y: 4 };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"0:label": "q", "1:1": 3, "2:2": 4}));
    assert_eq!(from_json::<Plain>(json, &registry).unwrap(), value);

    let other = TypeRegistry::new();
    assert_eq!(to_json(&value, &other), json!({"label": "q", "remainder": [3, 4]}));
}

#[test]
fn custom_decode_must_cover_every_field() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Plain>(Customization::new().with_mixed_strategy(MixedStrategy::Custom(
        CustomStrategy::new(encode_tagged, decode_short),
    )));

    let json = json!({"0:label": "q", "1:1": 3, "2:2": 4});
    let err = from_json::<Plain>(json, &registry).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Custom(_)));
}
