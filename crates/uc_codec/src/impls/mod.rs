//! Built-in implementations and the helpers for writing more.
//!
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//! - [`impl_native!`]: implements the codec traits for a serde type.
//!
//! ## Implemented Menu
//!
//! - native (through serde):
//!     - `bool`, `char`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `String`
//! - optional: `Option<T>`
//! - collections: `Vec<T>`, `VecDeque<T>`
//! - products: `()`, `(P0,)`, `(P0, P1, ...)`. the num of P <= 12
//! - wrappers: `Box<T>`, which is transparent to the codecs.
//!
//! [`Typed`]: crate::info::Typed
//! [`impl_native!`]: crate::impl_native

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod boxed;
mod list;
mod native;
mod option;
mod tuple;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
