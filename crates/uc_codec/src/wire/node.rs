use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A keyed container, keyed by arbitrary strings.
pub type KeyedNode = BTreeMap<String, WireNode>;

/// A primitive leaf, or null.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

/// The keyed/sequential/scalar tree produced and consumed at the
/// serialization boundary.
///
/// The codecs never see bytes; a transport turns this tree into JSON,
/// RON or any other serde format through its `Serialize`/`Deserialize`
/// impls.
#[derive(Debug, Clone, PartialEq)]
pub enum WireNode {
    Scalar(Scalar),
    Sequence(Vec<WireNode>),
    Keyed(KeyedNode),
}

impl Default for WireNode {
    #[inline]
    fn default() -> Self {
        Self::NULL
    }
}

impl WireNode {
    pub const NULL: WireNode = WireNode::Scalar(Scalar::Null);

    /// An empty keyed node.
    #[inline]
    pub const fn keyed() -> Self {
        Self::Keyed(BTreeMap::new())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Returns the entry under `key` if this is a keyed node.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&WireNode> {
        match self {
            Self::Keyed(map) => map.get(key),
            _ => None,
        }
    }

    /// Whether this is a keyed node containing `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn as_keyed(&self) -> Option<&KeyedNode> {
        match self {
            Self::Keyed(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[WireNode]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// A short name of the node kind, used in mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(Scalar::Bool(_)) => "bool",
            Self::Scalar(Scalar::Int(_) | Scalar::UInt(_)) => "integer",
            Self::Scalar(Scalar::Float(_)) => "float",
            Self::Scalar(Scalar::Str(_)) => "string",
            Self::Sequence(_) => "sequence",
            Self::Keyed(_) => "keyed",
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident as $as:ty),* $(,)?) => {
        $(
            impl From<$ty> for WireNode {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::$variant(<$as>::from(value)))
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
    String => Str as String,
    &str => Str as String,
}

impl From<Vec<WireNode>> for WireNode {
    #[inline]
    fn from(value: Vec<WireNode>) -> Self {
        Self::Sequence(value)
    }
}

impl From<KeyedNode> for WireNode {
    #[inline]
    fn from(value: KeyedNode) -> Self {
        Self::Keyed(value)
    }
}

impl<T: Into<WireNode>> From<Option<T>> for WireNode {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NULL, Into::into)
    }
}
