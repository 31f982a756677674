//! Kind-specific access to reflected values.
//!
//! Each trait is reached through the matching [`ReflectRef`](crate::ReflectRef)
//! variant. Fields and cases are addressed by declaration index, the same
//! index the [`info`](crate::info) descriptors use.

// -----------------------------------------------------------------------------
// Modules

mod list_ops;
mod product_ops;
mod sum_ops;

// -----------------------------------------------------------------------------
// Exports

pub use list_ops::{List, ListItemIter};
pub use product_ops::{Product, ProductFieldIter};
pub use sum_ops::{Sum, SumFieldIter};
