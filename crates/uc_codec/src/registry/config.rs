use alloc::borrow::Cow;

use crate::registry::MixedStrategy;

pub const DEFAULT_CASE_NAME_KEY: &str = "type";
pub const DEFAULT_PAYLOAD_KEY: &str = "payload";
pub const DEFAULT_REMAINDER_KEY: &str = "remainder";

/// The fully resolved configuration of one type.
///
/// Only sum types read the case and payload keys; `mixed_strategy` applies
/// to a product's own mixed fields, and for a sum type to its payloads.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Key holding the case name of a sum value.
    pub case_name_key: Cow<'static, str>,
    /// Key holding the payload of a sum value, unless inlined.
    pub payload_key: Cow<'static, str>,
    /// Merge payload entries into the node holding the case name.
    pub inline_payload: bool,
    pub mixed_strategy: MixedStrategy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            case_name_key: Cow::Borrowed(DEFAULT_CASE_NAME_KEY),
            payload_key: Cow::Borrowed(DEFAULT_PAYLOAD_KEY),
            inline_payload: false,
            mixed_strategy: MixedStrategy::default(),
        }
    }
}
