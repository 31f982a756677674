use alloc::borrow::Cow;

use crate::registry::{CodecConfig, MixedStrategy};

/// A partial [`CodecConfig`]: each field that is set overrides the layer
/// below it, each field left unset keeps it.
///
/// # Examples
///
/// ```
/// use uc_codec::registry::{CodecConfig, Customization};
///
/// let config = Customization::new()
///     .with_payload_key("value")
///     .resolve(CodecConfig::default());
///
/// assert_eq!(config.payload_key, "value");
/// assert_eq!(config.case_name_key, "type");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Customization {
    case_name_key: Option<Cow<'static, str>>,
    payload_key: Option<Cow<'static, str>>,
    inline_payload: Option<bool>,
    mixed_strategy: Option<MixedStrategy>,
}

impl Customization {
    #[inline]
    pub const fn new() -> Self {
        Self {
            case_name_key: None,
            payload_key: None,
            inline_payload: None,
            mixed_strategy: None,
        }
    }

    #[inline]
    pub fn with_case_name_key(self, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            case_name_key: Some(key.into()),
            ..self
        }
    }

    #[inline]
    pub fn with_payload_key(self, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            payload_key: Some(key.into()),
            ..self
        }
    }

    #[inline]
    pub fn with_inline_payload(self, inline: bool) -> Self {
        Self {
            inline_payload: Some(inline),
            ..self
        }
    }

    #[inline]
    pub fn with_mixed_strategy(self, strategy: MixedStrategy) -> Self {
        Self {
            mixed_strategy: Some(strategy),
            ..self
        }
    }

    #[inline]
    pub fn case_name_key(&self) -> Option<&str> {
        self.case_name_key.as_deref()
    }

    #[inline]
    pub fn payload_key(&self) -> Option<&str> {
        self.payload_key.as_deref()
    }

    #[inline]
    pub fn inline_payload(&self) -> Option<bool> {
        self.inline_payload
    }

    #[inline]
    pub fn mixed_strategy(&self) -> Option<&MixedStrategy> {
        self.mixed_strategy.as_ref()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.case_name_key.is_none()
            && self.payload_key.is_none()
            && self.inline_payload.is_none()
            && self.mixed_strategy.is_none()
    }

    /// Overwrite the fields of `base` that are set here.
    pub fn resolve(&self, mut base: CodecConfig) -> CodecConfig {
        if let Some(key) = &self.case_name_key {
            base.case_name_key = key.clone();
        }
        if let Some(key) = &self.payload_key {
            base.payload_key = key.clone();
        }
        if let Some(inline) = self.inline_payload {
            base.inline_payload = inline;
        }
        if let Some(strategy) = &self.mixed_strategy {
            base.mixed_strategy = strategy.clone();
        }
        base
    }
}

/// A type that supplies its own [`Customization`].
///
/// Used by `#[derive(Uncodable)]` together with `#[codec(customized)]`.
///
/// # Examples
///
/// ```
/// use uc_codec::derive::Uncodable;
/// use uc_codec::registry::{Customization, Customized, TypeRegistry};
///
/// #[derive(Uncodable)]
/// #[codec(customized)]
/// enum Event {
///     Ping,
/// }
///
/// impl Customized for Event {
///     fn customization() -> Customization {
///         Customization::new().with_case_name_key("event")
///     }
/// }
///
/// let config = TypeRegistry::new().resolve_type::<Event>();
/// assert_eq!(config.case_name_key, "event");
/// ```
pub trait Customized {
    fn customization() -> Customization;
}
