#![allow(dead_code, reason = "shared between test binaries")]

use serde_json::Value;
use uc_codec::codec::{self, Decode};
use uc_codec::registry::TypeRegistry;
use uc_codec::wire::WireNode;
use uc_codec::{CodecError, Reflect};

/// Encode `value` and render the node as JSON.
pub fn to_json(value: &dyn Reflect, registry: &TypeRegistry) -> Value {
    let node = codec::encode(value, registry).unwrap();
    serde_json::to_value(&node).unwrap()
}

/// Read `json` into a node and decode a `T` from it.
pub fn from_json<T: Decode>(json: Value, registry: &TypeRegistry) -> Result<T, CodecError> {
    let node: WireNode = serde_json::from_value(json).unwrap();
    codec::decode(node, registry)
}
