use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt::{Debug, Formatter};
use std::sync::{PoisonError, RwLock};

use crate::info::{TypeInfo, Typed};
use crate::registry::{CodecConfig, Customization, TYPE_ID_HASH_STATE, TypeIdMap};

// -----------------------------------------------------------------------------
// TypeRegistry

/// Per-type customization overrides and the resolved-config cache.
///
/// A registry is passed explicitly to every encode and decode call; there is
/// no process-wide instance. The same registry (or one with the same
/// overrides) must be used in both directions for values to round-trip.
///
/// Resolved configs are cached per [`TypeId`]. The cache can be read
/// concurrently; when two threads resolve the same type at once both compute
/// the same config and the last write wins.
///
/// # Example
///
/// ```
/// use uc_codec::registry::{Customization, TypeRegistry};
///
/// # #[derive(uc_codec::derive::Uncodable)]
/// # enum Command { Stop }
/// let mut registry = TypeRegistry::new();
/// registry.customize::<Command>(Customization::new().with_case_name_key("op"));
///
/// assert_eq!(registry.resolve_type::<Command>().case_name_key, "op");
/// ```
pub struct TypeRegistry {
    overrides: TypeIdMap<Customization>,
    resolved: RwLock<TypeIdMap<Arc<CodecConfig>>>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TypeRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("overrides", &self.overrides.len())
            .finish_non_exhaustive()
    }
}

impl TypeRegistry {
    /// Create a registry without overrides.
    #[inline]
    pub const fn new() -> Self {
        Self {
            overrides: TypeIdMap::with_hasher(TYPE_ID_HASH_STATE),
            resolved: RwLock::new(TypeIdMap::with_hasher(TYPE_ID_HASH_STATE)),
        }
    }

    /// Register an override for `T`, replacing any earlier one.
    ///
    /// Fields set in `customization` win over both the defaults and the
    /// customization `T` declares for itself.
    #[inline]
    pub fn customize<T: Typed>(&mut self, customization: Customization) -> &mut Self {
        self.customize_by_id(TypeId::of::<T>(), customization)
    }

    /// See [`TypeRegistry::customize`].
    pub fn customize_by_id(&mut self, type_id: TypeId, customization: Customization) -> &mut Self {
        if self.overrides.insert(type_id, customization).is_some() {
            log::warn!("customization for {type_id:?} replaced an earlier override");
        }
        self.resolved
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id);
        self
    }

    /// The explicit override registered for `type_id`.
    #[inline]
    pub fn get_override(&self, type_id: TypeId) -> Option<&Customization> {
        self.overrides.get(&type_id)
    }

    /// Resolve the active config of the described type.
    pub fn resolve(&self, info: &TypeInfo) -> Arc<CodecConfig> {
        let type_id = info.type_id();

        if let Some(config) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return Arc::clone(config);
        }

        let mut config = CodecConfig::default();
        if let Some(declared) = info.customization() {
            config = declared.resolve(config);
        }
        if let Some(explicit) = self.overrides.get(&type_id) {
            config = explicit.resolve(config);
        }
        log::debug!("resolved codec config of `{}`: {config:?}", info.type_path());

        let config = Arc::new(config);
        self.resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_id, Arc::clone(&config));
        config
    }

    /// See [`TypeRegistry::resolve`].
    #[inline]
    pub fn resolve_type<T: Typed>(&self) -> Arc<CodecConfig> {
        self.resolve(T::type_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{CaseInfo, SumInfo};
    use crate::registry::MixedStrategy;

    struct Declared;

    impl Typed for Declared {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Sum(
                    SumInfo::new::<Self>(&[CaseInfo::unit(0, "a")]).with_customization(
                        Customization::new()
                            .with_case_name_key("kind")
                            .with_inline_payload(true),
                    ),
                )
            })
        }
    }

    #[test]
    fn defaults_without_customization() {
        let config = TypeRegistry::new().resolve_type::<u8>();
        assert_eq!(config.case_name_key, "type");
        assert_eq!(config.payload_key, "payload");
        assert!(!config.inline_payload);
        assert!(matches!(
            &config.mixed_strategy,
            MixedStrategy::UnnamedToRemainder(key) if key == "remainder"
        ));
    }

    #[test]
    fn declared_then_explicit_merge_field_by_field() {
        let mut registry = TypeRegistry::new();
        let declared = registry.resolve_type::<Declared>();
        assert_eq!(declared.case_name_key, "kind");
        assert!(declared.inline_payload);
        assert_eq!(declared.payload_key, "payload");

        registry.customize::<Declared>(Customization::new().with_payload_key("body"));
        let merged = registry.resolve_type::<Declared>();
        assert_eq!(merged.case_name_key, "kind");
        assert!(merged.inline_payload);
        assert_eq!(merged.payload_key, "body");

        registry.customize::<Declared>(Customization::new().with_inline_payload(false));
        let replaced = registry.resolve_type::<Declared>();
        assert!(!replaced.inline_payload);
        assert_eq!(replaced.payload_key, "payload");
    }

    #[test]
    fn resolution_is_cached() {
        let registry = TypeRegistry::new();
        let a = registry.resolve_type::<Declared>();
        let b = registry.resolve_type::<Declared>();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
