use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Uncodable)]`](crate::derive::Uncodable) and by
/// the built-in impls; manual impls should store the info in a
/// [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`].
///
/// # Examples
///
/// ```
/// use uc_codec::info::{FieldInfo, ProductInfo, TypeInfo, Typed};
/// use uc_codec::impls::NonGenericTypeInfoCell;
///
/// struct Meters(f64);
///
/// impl Typed for Meters {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Product(ProductInfo::new::<Self>(&[FieldInfo::positional::<f64>(0)]))
///         })
///     }
/// }
///
/// let info = Meters::type_info().as_product().unwrap();
/// assert_eq!(info.field_len(), 1);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// When holding a `dyn Reflect`, this is how the type's info is reached.
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
