mod common;

use serde_json::json;
use uc_codec::codec;
use uc_codec::derive::Uncodable;
use uc_codec::registry::{Customization, MixedStrategy, TypeRegistry};
use uc_codec::{ErrorKind, PathSegment};

use common::{from_json, to_json};

#[derive(Uncodable, Debug, PartialEq)]
struct Person {
    name: String,
    age: u32,
    nickname: Option<String>,
}

#[derive(Uncodable, Debug, PartialEq)]
struct Rgb(u8, u8, u8);

/// `(0, b: 1, 2)`
#[derive(Uncodable, Debug, PartialEq)]
struct Mixed(u8, #[codec(rename = "b")] u8, u8);

/// The same layout, declared with named fields.
#[derive(Uncodable, Debug, PartialEq)]
#[codec(indices_as_names)]
struct Indexed {
    #[codec(positional)]
    first: u8,
    b: u8,
    #[codec(positional)]
    last: u8,
}

#[derive(Uncodable, Debug, PartialEq)]
#[codec(remainder = "rest")]
struct Tagged {
    tag: String,
    #[codec(positional)]
    x: i32,
    #[codec(positional)]
    y: i32,
}

/// A named field using the default remainder key.
#[derive(Uncodable, Debug, PartialEq)]
struct Shadowed {
    remainder: u8,
    #[codec(positional)]
    x: u8,
}

/// A named field using the key of the positional field before it.
#[derive(Uncodable, Debug, PartialEq)]
#[codec(indices_as_names)]
struct Renumbered {
    #[codec(positional)]
    x: u8,
    #[codec(rename = "0")]
    zero: u8,
}

#[derive(Uncodable, Debug, PartialEq)]
struct Marker;

#[derive(Uncodable, Debug, PartialEq)]
struct Empty {}

#[derive(Uncodable, Debug, PartialEq)]
struct Team {
    lead: Person,
    colors: Vec<Rgb>,
}

#[test]
fn named_fields_round_trip() {
    let registry = TypeRegistry::new();
    let value = Person {
        name: "Ada".into(),
        age: 36,
        nickname: Some("Countess".into()),
    };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"name": "Ada", "age": 36, "nickname": "Countess"}));
    assert_eq!(from_json::<Person>(json, &registry).unwrap(), value);
}

#[test]
fn positional_fields_are_an_ordered_sequence() {
    let registry = TypeRegistry::new();
    let value = Rgb(255, 128, 0);

    let json = to_json(&value, &registry);
    assert_eq!(json, json!([255, 128, 0]));
    assert_eq!(from_json::<Rgb>(json, &registry).unwrap(), value);
}

#[test]
fn mixed_fields_default_to_remainder() {
    let registry = TypeRegistry::new();
    let value = Mixed(0, 1, 2);

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"b": 1, "remainder": [0, 2]}));
    assert_eq!(from_json::<Mixed>(json, &registry).unwrap(), value);
}

#[test]
fn mixed_fields_with_a_custom_remainder_key() {
    let registry = TypeRegistry::new();
    let value = Tagged { tag: "p".into(), x: -1, y: 4 };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"tag": "p", "rest": [-1, 4]}));
    assert_eq!(from_json::<Tagged>(json, &registry).unwrap(), value);
}

#[test]
fn mixed_fields_keyed_by_index() {
    let registry = TypeRegistry::new();
    let value = Indexed { first: 0, b: 1, last: 2 };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"0": 0, "b": 1, "2": 2}));
    assert_eq!(from_json::<Indexed>(json, &registry).unwrap(), value);
}

#[test]
fn registry_override_wins_over_declared_strategy() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Indexed>(
        Customization::new().with_mixed_strategy(MixedStrategy::remainder("tail")),
    );
    let value = Indexed { first: 0, b: 1, last: 2 };

    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"b": 1, "tail": [0, 2]}));
    assert_eq!(from_json::<Indexed>(json, &registry).unwrap(), value);
}

#[test]
fn degenerate_products_read_nothing() {
    let registry = TypeRegistry::new();

    assert_eq!(to_json(&Marker, &registry), json!([]));
    assert_eq!(to_json(&Empty {}, &registry), json!([]));

    assert_eq!(from_json::<Marker>(json!([]), &registry).unwrap(), Marker);
    assert_eq!(from_json::<Marker>(json!({"noise": 1}), &registry).unwrap(), Marker);
    assert_eq!(from_json::<Empty>(json!(null), &registry).unwrap(), Empty {});
}

#[test]
fn nested_products() {
    let registry = TypeRegistry::new();
    let value = Team {
        lead: Person { name: "Grace".into(), age: 85, nickname: None },
        colors: vec![Rgb(1, 2, 3), Rgb(4, 5, 6)],
    };

    let json = to_json(&value, &registry);
    assert_eq!(
        json,
        json!({
            "lead": {"name": "Grace", "age": 85, "nickname": null},
            "colors": [[1, 2, 3], [4, 5, 6]],
        })
    );
    assert_eq!(from_json::<Team>(json, &registry).unwrap(), value);
}

#[test]
fn absent_optional_fields_decode_to_none() {
    let registry = TypeRegistry::new();
    let value: Person = from_json(json!({"name": "Linus", "age": 54}), &registry).unwrap();
    assert_eq!(value.nickname, None);
}

#[test]
fn extra_keys_are_ignored() {
    let registry = TypeRegistry::new();
    let value: Person =
        from_json(json!({"name": "Ken", "age": 80, "extra": [1, 2]}), &registry).unwrap();
    assert_eq!(value.name, "Ken");
}

#[test]
fn missing_required_field() {
    let registry = TypeRegistry::new();
    let err = from_json::<Person>(json!({"name": "Dennis"}), &registry).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingField("age".into()));
}

#[test]
fn errors_carry_the_path() {
    let registry = TypeRegistry::new();
    let json = json!({
        "lead": {"name": "Barbara", "age": 80, "nickname": null},
        "colors": [[1, 2, 3], [4, "five", 6]],
    });

    let err = from_json::<Team>(json, &registry).unwrap_err();
    let path: Vec<_> = err.path().iter().cloned().collect();
    assert_eq!(
        path,
        [
            PathSegment::Key("colors".into()),
            PathSegment::Index(1),
            PathSegment::Index(1),
        ]
    );
    assert_eq!(err.path().to_string(), "$.colors[1][1]");
}

#[test]
fn shape_mismatch() {
    let registry = TypeRegistry::new();
    let err = from_json::<Rgb>(json!({"r": 1}), &registry).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::TypeMismatch { expected: "sequence", found: "keyed" }
    );
}

#[test]
fn remainder_key_may_not_shadow_a_field() {
    let registry = TypeRegistry::new();
    let err = codec::encode(&Shadowed { remainder: 9, x: 1 }, &registry).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Custom(_)));

    let mut registry = TypeRegistry::new();
    registry.customize::<Shadowed>(
        Customization::new().with_mixed_strategy(MixedStrategy::remainder("rest")),
    );
    let value = Shadowed { remainder: 9, x: 1 };
    let json = to_json(&value, &registry);
    assert_eq!(json, json!({"remainder": 9, "rest": [1]}));
    assert_eq!(from_json::<Shadowed>(json, &registry).unwrap(), value);
}

#[test]
fn index_keys_may_not_shadow_a_field() {
    let registry = TypeRegistry::new();
    let err = codec::encode(&Renumbered { x: 1, zero: 2 }, &registry).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Custom(_)));
}
