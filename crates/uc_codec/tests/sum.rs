mod common;

use serde_json::json;
use uc_codec::codec::{Decoder, Encoder, FieldValue};
use uc_codec::derive::Uncodable;
use uc_codec::info::FieldInfo;
use uc_codec::registry::{CustomStrategy, Customization, MixedStrategy, TypeRegistry};
use uc_codec::wire::{KeyedNode, WireNode};
use uc_codec::{CodecError, ErrorKind, PathSegment};

use common::{from_json, to_json};

#[derive(Uncodable, Debug, PartialEq)]
enum Message {
    #[codec(rename = "noContent")]
    NoContent,
    #[codec(rename = "single")]
    Single(i64),
    #[codec(rename = "pair")]
    Pair(i64, String),
    #[codec(rename = "named")]
    Named { id: u32, label: String },
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(inline_payload)]
enum Inlined {
    #[codec(rename = "noContent")]
    NoContent,
    #[codec(rename = "inliningOne")]
    InliningOne {
        #[codec(rename = "namedValue")]
        named_value: bool,
        #[codec(rename = "otherNamedValue")]
        other_named_value: bool,
    },
    #[codec(rename = "mixedContent")]
    MixedContent {
        #[codec(rename = "namedValue")]
        named_value: bool,
        #[codec(positional)]
        flag: bool,
    },
    #[codec(rename = "single")]
    Single(i64),
    #[codec(rename = "pair")]
    Pair(i64, i64),
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(inline_payload, indices_as_names)]
enum IndexedInline {
    #[codec(rename = "mixedContent")]
    MixedContent {
        #[codec(rename = "namedValue")]
        named_value: bool,
        #[codec(positional)]
        flag: bool,
    },
    #[codec(rename = "single")]
    Single(i64),
}

#[derive(Uncodable, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(inline_payload)]
enum Wrapped {
    Wrap(Point),
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(remainder = "rest")]
enum Packet {
    Data {
        id: u8,
        #[codec(positional)]
        body: String,
    },
    Empty,
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(case_name_key = "kind", payload_key = "data")]
enum Renamed {
    On { level: u8 },
    Off,
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(inline_payload)]
enum Clashing {
    Tagged {
        #[codec(rename = "type")]
        kind: String,
    },
}

#[derive(Uncodable, Debug, PartialEq)]
enum Expr {
    Num(i64),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
}

#[derive(Uncodable, Debug, PartialEq)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[test]
fn case_without_payload_is_the_name_only() {
    let registry = TypeRegistry::new();

    let json = to_json(&Message::NoContent, &registry);
    assert_eq!(json, json!({"type": "noContent"}));
    assert_eq!(from_json::<Message>(json, &registry).unwrap(), Message::NoContent);
}

#[test]
fn single_positional_payload_is_written_bare() {
    let registry = TypeRegistry::new();

    let json = to_json(&Message::Single(5), &registry);
    assert_eq!(json, json!({"type": "single", "payload": 5}));
    assert_eq!(from_json::<Message>(json, &registry).unwrap(), Message::Single(5));
}

#[test]
fn mirror_form_decodes_with_its_payload_key() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Message>(Customization::new().with_payload_key("value"));

    let json = json!({"type": "single", "value": 5});
    assert_eq!(from_json::<Message>(json, &registry).unwrap(), Message::Single(5));
}

#[test]
fn nested_payloads_follow_the_product_rules() {
    let registry = TypeRegistry::new();

    let pair = Message::Pair(-3, "x".into());
    let json = to_json(&pair, &registry);
    assert_eq!(json, json!({"type": "pair", "payload": [-3, "x"]}));
    assert_eq!(from_json::<Message>(json, &registry).unwrap(), pair);

    let named = Message::Named { id: 7, label: "seven".into() };
    let json = to_json(&named, &registry);
    assert_eq!(json, json!({"type": "named", "payload": {"id": 7, "label": "seven"}}));
    assert_eq!(from_json::<Message>(json, &registry).unwrap(), named);
}

#[test]
fn inlined_named_payload_merges_into_the_case_node() {
    let registry = TypeRegistry::new();
    let value = Inlined::InliningOne { named_value: true, other_named_value: false };

    let json = to_json(&value, &registry);
    assert_eq!(
        json,
        json!({"type": "inliningOne", "namedValue": true, "otherNamedValue": false})
    );
    assert_eq!(from_json::<Inlined>(json, &registry).unwrap(), value);
}

#[test]
fn inlined_mixed_payload_uses_the_remainder() {
    let registry = TypeRegistry::new();
    let value = Inlined::MixedContent { named_value: false, flag: true };

    let json = to_json(&value, &registry);
    assert_eq!(
        json,
        json!({"type": "mixedContent", "namedValue": false, "remainder": [true]})
    );
    assert_eq!(from_json::<Inlined>(json, &registry).unwrap(), value);
}

/// A positional payload has no keys to merge, so inlining it falls back to
/// the mixed strategy and the values land under the remainder key.
#[test]
fn inlined_positional_payload_falls_back_to_remainder() {
    let registry = TypeRegistry::new();

    let json = to_json(&Inlined::Single(5), &registry);
    assert_eq!(json, json!({"type": "single", "remainder": [5]}));
    assert_eq!(from_json::<Inlined>(json, &registry).unwrap(), Inlined::Single(5));

    let json = to_json(&Inlined::Pair(1, 2), &registry);
    assert_eq!(json, json!({"type": "pair", "remainder": [1, 2]}));
    assert_eq!(from_json::<Inlined>(json, &registry).unwrap(), Inlined::Pair(1, 2));
}

#[test]
fn inlining_can_be_switched_off_by_the_registry() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Inlined>(Customization::new().with_inline_payload(false));

    let json = to_json(&Inlined::Single(5), &registry);
    assert_eq!(json, json!({"type": "single", "payload": 5}));
    assert_eq!(from_json::<Inlined>(json, &registry).unwrap(), Inlined::Single(5));
}

#[test]
fn configured_keys() {
    let registry = TypeRegistry::new();
    let value = Renamed::On { level: 3 };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"kind": "On", "data": {"level": 3}}));
    assert_eq!(from_json::<Renamed>(json, &registry).unwrap(), value);

    assert_eq!(to_json(&Renamed::Off, &registry), json!({"kind": "Off"}));
}

#[test]
fn unknown_case_is_rejected() {
    let registry = TypeRegistry::new();
    let err = from_json::<Message>(json!({"type": "bogus"}), &registry).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidCase("bogus".into()));
}

#[test]
fn missing_case_name() {
    let registry = TypeRegistry::new();
    let err = from_json::<Message>(json!({"payload": 5}), &registry).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingField("type".into()));
}

#[test]
fn missing_payload() {
    let registry = TypeRegistry::new();
    let err = from_json::<Message>(json!({"type": "single"}), &registry).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingField("payload".into()));
    assert_eq!(err.path().to_string(), "$::single");
}

#[test]
fn payload_errors_name_the_case() {
    let registry = TypeRegistry::new();
    let json = json!({"type": "named", "payload": {"id": "seven", "label": "x"}});

    let err = from_json::<Message>(json, &registry).unwrap_err();
    let path: Vec<_> = err.path().iter().cloned().collect();
    assert_eq!(
        path,
        [PathSegment::Case("named".into()), PathSegment::Key("id".into())]
    );
}

#[test]
fn inlined_entries_may_not_replace_the_case_name() {
    let registry = TypeRegistry::new();
    let value = Clashing::Tagged { kind: "x".into() };

    let err = uc_codec::codec::encode(&value, &registry).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Custom(_)));
}

#[test]
fn recursive_sums() {
    let registry = TypeRegistry::new();
    let value = Expr::Add(
        Box::new(Expr::Num(1)),
        Box::new(Expr::Neg(Box::new(Expr::Num(2)))),
    );

    let json = to_json(&value, &registry);
    assert_eq!(
        json,
        json!({
            "type": "Add",
            "payload": [
                {"type": "Num", "payload": 1},
                {"type": "Neg", "payload": {"type": "Num", "payload": 2}},
            ],
        })
    );
    assert_eq!(from_json::<Expr>(json, &registry).unwrap(), value);
}

#[test]
fn generic_sums() {
    let registry = TypeRegistry::new();

    let left: Either<u8, String> = Either::Left(1);
    let json = to_json(&left, &registry);
    assert_eq!(json, json!({"type": "Left", "payload": 1}));
    assert_eq!(from_json::<Either<u8, String>>(json, &registry).unwrap(), left);

    let right: Either<u8, Vec<bool>> = Either::Right(vec![true]);
    let json = to_json(&right, &registry);
    assert_eq!(json, json!({"type": "Right", "payload": [true]}));
    assert_eq!(from_json::<Either<u8, Vec<bool>>>(json, &registry).unwrap(), right);
}

#[test]
fn inlined_payload_keyed_by_index() {
    let registry = TypeRegistry::new();

    let value = IndexedInline::MixedContent { named_value: false, flag: true };
    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "mixedContent", "namedValue": false, "1": true}));
    assert_eq!(from_json::<IndexedInline>(json, &registry).unwrap(), value);

    let json = to_json(&IndexedInline::Single(5), &registry);
    assert_eq!(json, json!({"type": "single", "0": 5}));
    assert_eq!(from_json::<IndexedInline>(json, &registry).unwrap(), IndexedInline::Single(5));
}

#[test]
fn payload_strategy_comes_from_the_sum() {
    let registry = TypeRegistry::new();
    let value = Packet::Data { id: 1, body: "x".into() };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "Data", "payload": {"id": 1, "rest": ["x"]}}));
    assert_eq!(from_json::<Packet>(json, &registry).unwrap(), value);

    let mut registry = TypeRegistry::new();
    registry.customize::<Packet>(Customization::new().with_inline_payload(true));

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "Data", "id": 1, "rest": ["x"]}));
    assert_eq!(from_json::<Packet>(json, &registry).unwrap(), value);
}

#[test]
fn payload_strategy_override_from_the_registry() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Packet>(
        Customization::new().with_mixed_strategy(MixedStrategy::UseIndicesAsNames),
    );
    let value = Packet::Data { id: 1, body: "x".into() };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "Data", "payload": {"id": 1, "1": "x"}}));
    assert_eq!(from_json::<Packet>(json, &registry).unwrap(), value);
}

/// Every payload field under `"{index}:{key}"`.
fn encode_tagged(fields: &[FieldValue<'_>], encoder: &Encoder<'_>) -> Result<WireNode, CodecError> {
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

#[test]
fn custom_payload_strategy() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Packet>(Customization::new().with_mixed_strategy(
        MixedStrategy::Custom(CustomStrategy::new(encode_tagged, decode_tagged)),
    ));
    let value = Packet::Data { id: 1, body: "x".into() };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "Data", "payload": {"0:id": 1, "1:1": "x"}}));
    assert_eq!(from_json::<Packet>(json, &registry).unwrap(), value);

    registry.customize::<Packet>(
        Customization::new()
            .with_inline_payload(true)
            .with_mixed_strategy(MixedStrategy::Custom(CustomStrategy::new(
                encode_tagged,
                decode_tagged,
            ))),
    );

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "Data", "0:id": 1, "1:1": "x"}));
    assert_eq!(from_json::<Packet>(json, &registry).unwrap(), value);
    assert_eq!(to_json(&Packet::Empty, &registry), json!({"type": "Empty"}));
}

/// The single field is positional, so its keys are not merged into the case
/// node even though it is a struct.
#[test]
fn inlined_struct_payload_stays_whole() {
    let registry = TypeRegistry::new();
    let value = Wrapped::Wrap(Point { x: 1, y: -1 });

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"type": "Wrap", "remainder": [{"x": 1, "y": -1}]}));
    assert_eq!(from_json::<Wrapped>(json, &registry).unwrap(), value);
}
