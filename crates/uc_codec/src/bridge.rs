use serde_core::de::{Deserialize, Deserializer, Error as _};
use serde_core::ser::{Error as _, Serialize, Serializer};

use crate::codec::{self, Decode};
use crate::registry::TypeRegistry;
use crate::wire::WireNode;
use crate::Reflect;

/// Registry used by [`Uncodable`]. Holds no overrides, so only the defaults
/// and the types' declared customizations apply.
static DEFAULT_REGISTRY: TypeRegistry = TypeRegistry::new();

/// Makes any reflected type usable with serde through the structural codec.
///
/// Serializing encodes the wrapped value to a [`WireNode`] and forwards that
/// to the serializer; deserializing reads a [`WireNode`] and decodes it.
///
/// # Examples
///
/// ```
/// use uc_codec::{derive, Uncodable};
///
/// #[derive(derive::Uncodable, Debug, PartialEq)]
/// enum Reply {
///     Ok,
///     Moved { to: String },
/// }
///
/// let json = serde_json::to_string(&Uncodable(Reply::Moved { to: "/a".into() })).unwrap();
/// assert_eq!(json, r#"{"payload":{"to":"/a"},"type":"Moved"}"#);
///
/// let Uncodable(back): Uncodable<Reply> = serde_json::from_str(&json).unwrap();
/// assert_eq!(back, Reply::Moved { to: "/a".into() });
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uncodable<T>(pub T);

impl<T> Uncodable<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Reflect> Serialize for Uncodable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::encode(&self.0, &DEFAULT_REGISTRY)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: Decode> Deserialize<'de> for Uncodable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = WireNode::deserialize(deserializer)?;
        codec::decode(node, &DEFAULT_REGISTRY)
            .map(Self)
            .map_err(D::Error::custom)
    }
}
