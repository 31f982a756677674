//! Per-type customization.
//!
//! A type's active [`CodecConfig`] is resolved from three layers, each merged
//! field by field onto the previous one:
//!
//! 1. the defaults (`"type"`, `"payload"`, no inlining, remainder under `"remainder"`);
//! 2. the [`Customization`] the type declares for itself, through derive
//!    attributes or [`Customized`];
//! 3. explicit overrides registered with [`TypeRegistry::customize`].
//!
//! ## Menu
//!
//! - [`TypeRegistry`]: override storage and the resolved-config cache.
//! - [`CodecConfig`], [`Customization`]: the resolved and the partial config.
//! - [`MixedStrategy`], [`CustomStrategy`]: how positional fields of mixed
//!   products are represented.

// -----------------------------------------------------------------------------
// Modules

mod config;
mod customization;
mod strategy;
mod type_id_map;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use config::{CodecConfig, DEFAULT_CASE_NAME_KEY, DEFAULT_PAYLOAD_KEY, DEFAULT_REMAINDER_KEY};
pub use customization::{Customization, Customized};
pub use strategy::{CustomDecodeFn, CustomEncodeFn, CustomStrategy, MixedStrategy};
pub use type_registry::TypeRegistry;

pub(crate) use type_id_map::{NameMap, TYPE_ID_HASH_STATE, TypeIdMap};
