//! Field-by-field construction of new values, the decode side of the field
//! visitor.
//!
//! [`Construct`] is the per-type part, generated by
//! [`#[derive(Uncodable)]`](crate::derive::Uncodable): it asks a
//! [`FieldSource`] for each field in declaration order and assembles the
//! value. [`build`] is the generic part: it turns a provider of raw
//! [`WireNode`]s into a [`FieldSource`] that decodes each node into the
//! requested field type.
//!
//! A failure part way through drops the fields built so far; no partially
//! initialised value is ever observable.

// -----------------------------------------------------------------------------
// Modules

mod construct;
mod node_source;

// -----------------------------------------------------------------------------
// Exports

pub use construct::{Construct, FieldSource, case_fields, field_at, invalid_tag, product_fields};
pub use node_source::NodeSource;

use crate::CodecError;
use crate::info::FieldInfo;
use crate::registry::TypeRegistry;
use crate::wire::WireNode;

/// Build a `T` (the case with `tag`, for sum types; ignored for products)
/// from the nodes `provider` returns for each field.
///
/// `provider` is called once per field, in declaration order. Returning
/// `None` means the field is absent on the wire, which decodes to `None`
/// for optional fields and fails with
/// [`MissingField`](crate::ErrorKind::MissingField) otherwise.
/// Zero-field types never call `provider`.
///
/// # Examples
///
/// ```
/// use uc_codec::build::build;
/// use uc_codec::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
/// let pair: (u8, Option<bool>) = build(0, &registry, |field| {
///     (field.index() == 0).then(|| 7u8.into())
/// })
/// .unwrap();
///
/// assert_eq!(pair, (7, None));
/// ```
pub fn build<T, P>(tag: usize, registry: &TypeRegistry, provider: P) -> Result<T, CodecError>
where
    T: Construct,
    P: FnMut(&FieldInfo) -> Option<WireNode>,
{
    log::trace!("building `{}` (tag {tag})", T::type_info().type_path());
    T::construct(tag, &mut NodeSource::new(registry, provider))
}
