use serde::{Deserialize, Serialize};
use uc_codec::build::{Construct, FieldSource};
use uc_codec::codec::{self, Decode, Decoder};
use uc_codec::derive;
use uc_codec::impls::NonGenericTypeInfoCell;
use uc_codec::info::{OpaqueInfo, TypeInfo, Typed};
use uc_codec::registry::TypeRegistry;
use uc_codec::wire::WireNode;
use uc_codec::{CodecError, ErrorKind, Reflect, ReflectRef, Uncodable};

#[derive(derive::Uncodable, Debug, PartialEq)]
#[codec(inline_payload)]
enum Shape {
    Dot,
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

#[derive(derive::Uncodable, Debug, PartialEq)]
struct Scene {
    name: String,
    shapes: Vec<Shape>,
    origin: Coord,
}

/// Converts itself through serde.
#[derive(derive::Uncodable, Serialize, Deserialize, Debug, PartialEq)]
#[codec(native)]
struct Coord {
    x: i32,
    y: i32,
}

/// A type with no accessible structure.
#[derive(Debug)]
struct Handle;

impl Typed for Handle {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl Reflect for Handle {
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque
    }
}

impl Construct for Handle {
    fn construct<S: FieldSource>(_tag: usize, _source: &mut S) -> Result<Self, CodecError> {
        Ok(Self)
    }
}

impl Decode for Handle {
    fn decode(decoder: Decoder<'_>) -> Result<Self, CodecError> {
        decoder.decode_structural()
    }
}

fn scene() -> Scene {
    Scene {
        name: "demo".into(),
        shapes: vec![
            Shape::Dot,
            Shape::Circle { radius: 0.5 },
            Shape::Rect { width: 2.0, height: 1.0 },
        ],
        origin: Coord { x: -4, y: 9 },
    }
}

#[test]
fn json_round_trip() {
    let json = serde_json::to_value(Uncodable(scene())).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "demo",
            "shapes": [
                {"type": "Dot"},
                {"type": "Circle", "radius": 0.5},
                {"type": "Rect", "width": 2.0, "height": 1.0},
            ],
            "origin": {"x": -4, "y": 9},
        })
    );

    let Uncodable(back) = serde_json::from_value::<Uncodable<Scene>>(json).unwrap();
    assert_eq!(back, scene());
}

#[test]
fn ron_round_trip() {
    let text = ron::to_string(&Uncodable(scene())).unwrap();
    let Uncodable(back): Uncodable<Scene> = ron::from_str(&text).unwrap();
    assert_eq!(back, scene());
}

#[test]
fn decode_errors_surface_through_serde() {
    let json = serde_json::json!({"name": "demo", "shapes": [{"type": "Hexagon"}]});
    let err = serde_json::from_value::<Uncodable<Scene>>(json).unwrap_err();
    assert!(err.to_string().contains("Hexagon"));
}

#[test]
fn opaque_types_are_unsupported() {
    let registry = TypeRegistry::new();

    let err = codec::encode(&Handle, &registry).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedShape(_)));

    let err = codec::decode::<Handle>(WireNode::NULL, &registry).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedShape(_)));
}

#[test]
fn chars_from_the_transport_become_strings() {
    let node: WireNode = ron::from_str("'a'").unwrap();
    assert_eq!(node, WireNode::from("a"));

    let back: char = codec::decode(node, &TypeRegistry::new()).unwrap();
    assert_eq!(back, 'a');
}
