//! Items reached by code generated by `#[derive(Uncodable)]`.
//!
//! Not public API; the contents may change without notice.
#![doc(hidden)]

pub mod macro_utils {
    pub use ::core::option::Option::{self, None, Some};
    pub use ::core::result::Result::{self, Err, Ok};

    pub use crate::build::{case_fields, field_at, invalid_tag, product_fields};
}
