//! A generic structural codec.
//!
//! Converts composite values (products with named and/or positional fields,
//! and sums with named cases and optional payloads) to and from a
//! format-agnostic [`WireNode`](wire::WireNode) tree, without per-type
//! marshalling code.
//!
//! ## Menu
//!
//! - [`wire`]: the keyed/sequential/scalar tree and its serde bridge.
//! - [`info`]: type descriptors and the shape classifier.
//! - [`ops`] / [`Reflect`]: read access to a value's fields.
//! - [`build`]: field-by-field construction of new values.
//! - [`registry`]: per-type customization.
//! - [`codec`]: the product and sum codecs and their entry points.
//! - [`mirror`]: the write-only "pure value" fallback.
//!
//! ## Example
//!
//! ```
//! use uc_codec::{derive::Uncodable, registry::TypeRegistry, codec};
//!
//! #[derive(Uncodable, Debug, PartialEq)]
//! enum Shape {
//!     Empty,
//!     Circle { radius: f64 },
//! }
//!
//! let registry = TypeRegistry::new();
//! let node = codec::encode(&Shape::Circle { radius: 1.5 }, &registry).unwrap();
//!
//! let back: Shape = codec::decode(node, &registry).unwrap();
//! assert_eq!(back, Shape::Circle { radius: 1.5 });
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `uc_codec`, which must also resolve
// inside the crate itself.
extern crate self as uc_codec;

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod bridge;
mod error;
mod exclude;
mod reflection;

pub mod build;
pub mod codec;
pub mod impls;
pub mod info;
pub mod mirror;
pub mod ops;
pub mod registry;
pub mod wire;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use bridge::Uncodable;
pub use error::{CodecError, CodingPath, ErrorKind, PathSegment};
pub use exclude::Excluded;
pub use reflection::{Reflect, ReflectRef};
pub use uc_codec_derive as derive;
