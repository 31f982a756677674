mod common;

use serde_json::{Value, json};
use uc_codec::derive::Uncodable;
use uc_codec::mirror::{MirroredValue, mirror};
use uc_codec::registry::{Customization, TypeRegistry};
use uc_codec::{Excluded, Reflect};

use common::from_json;

#[derive(Uncodable, Debug, PartialEq)]
enum Message {
    #[codec(rename = "noContent")]
    NoContent,
    #[codec(rename = "single")]
    Single(i64),
    #[codec(rename = "moved")]
    Moved { to: String, code: u16 },
}

#[derive(Uncodable)]
struct Mixed(u8, #[codec(rename = "b")] u8, u8);

#[derive(Uncodable)]
struct Account {
    user: String,
    token: Excluded<String>,
    roles: Vec<String>,
    manager: Option<String>,
}

fn mirrored(value: &dyn Reflect) -> Value {
    serde_json::to_value(mirror(value).unwrap()).unwrap()
}

#[test]
fn sum_cases() {
    assert_eq!(mirrored(&Message::NoContent), Value::Null);
    assert_eq!(mirrored(&Message::Single(5)), json!({"type": "single", "value": 5}));
    assert_eq!(
        mirrored(&Message::Moved { to: "/a".into(), code: 301 }),
        json!({"type": "moved", "value": {"to": "/a", "code": 301}})
    );
}

#[test]
fn mirrored_payload_decodes_with_a_matching_key() {
    let mut registry = TypeRegistry::new();
    registry.customize::<Message>(Customization::new().with_payload_key("value"));

    let json = mirrored(&Message::Single(5));
    assert_eq!(from_json::<Message>(json, &registry).unwrap(), Message::Single(5));
}

#[test]
fn named_tuple_elements_become_single_entry_maps() {
    assert_eq!(mirrored(&Mixed(0, 1, 2)), json!([0, {"b": 1}, 2]));
}

#[test]
fn excluded_fields_are_skipped() {
    let account = Account {
        user: "ada".into(),
        token: Excluded("secret".into()),
        roles: vec!["admin".into()],
        manager: None,
    };

    assert_eq!(
        mirrored(&account),
        json!({"user": "ada", "roles": ["admin"], "manager": null})
    );
}

#[test]
fn excluded_fields_still_encode() {
    let registry = TypeRegistry::new();
    let account = Account {
        user: "ada".into(),
        token: Excluded("secret".into()),
        roles: Vec::new(),
        manager: None,
    };

    let node = uc_codec::codec::encode(&account, &registry).unwrap();
    assert_eq!(node.get("token").and_then(|node| node.as_str()), Some("secret"));
}

#[test]
fn mirrored_value_serializes() {
    let json = serde_json::to_string(&MirroredValue(&Message::Single(-1))).unwrap();
    assert_eq!(json, r#"{"type":"single","value":-1}"#);
}
