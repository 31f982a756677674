//! Type descriptors and the shape classifier.
//!
//! Every codable type exposes a `&'static` [`TypeInfo`] through [`Typed`].
//! The info lists a product's fields or a sum's cases in declaration order,
//! which is the canonical order for positional resolution.
//!
//! ## Menu
//!
//! - [`TypeInfo`]: the descriptor, one variant per structural kind.
//! - [`FieldInfo`]: name (or position), declaration index and field type.
//! - [`ProductInfo`], [`SumInfo`], [`CaseInfo`]: composite descriptors.
//! - [`OptionalInfo`], [`ListInfo`], [`NativeInfo`], [`OpaqueInfo`]: the rest.
//! - [`TypeShape`]: the classification the codecs dispatch on.
//! - [`Typed`], [`DynamicTyped`]: static and dynamic access to a type's info.

// -----------------------------------------------------------------------------
// Modules

mod case_info;
mod field_info;
mod list_info;
mod native_info;
mod optional_info;
mod product_info;
mod shape;
mod sum_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use case_info::CaseInfo;
pub use field_info::FieldInfo;
pub use list_info::ListInfo;
pub use native_info::{NativeInfo, OpaqueInfo};
pub use optional_info::OptionalInfo;
pub use product_info::ProductInfo;
pub use shape::{TypeShape, classify, classify_fields};
pub use sum_info::SumInfo;
pub use type_info::TypeInfo;
pub use typed::{DynamicTyped, Typed};
