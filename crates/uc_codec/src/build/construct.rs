use crate::codec::Decode;
use crate::info::{FieldInfo, TypeInfo, Typed};
use crate::{CodecError, ErrorKind};

/// A type that can be assembled from its fields.
///
/// # Examples
///
/// ```
/// use uc_codec::build::{Construct, FieldSource, field_at, product_fields};
/// use uc_codec::impls::NonGenericTypeInfoCell;
/// use uc_codec::info::{FieldInfo, ProductInfo, TypeInfo, Typed};
/// use uc_codec::CodecError;
///
/// struct Span {
///     start: u32,
///     len: u32,
/// }
///
/// impl Typed for Span {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Product(ProductInfo::new::<Self>(&[
///                 FieldInfo::named::<u32>("start", 0),
///                 FieldInfo::named::<u32>("len", 1),
///             ]))
///         })
///     }
/// }
///
/// impl Construct for Span {
///     fn construct<S: FieldSource>(_tag: usize, source: &mut S) -> Result<Self, CodecError> {
///         let fields = product_fields(Self::type_info())?;
///         Ok(Self {
///             start: source.field(field_at(fields, 0)?)?,
///             len: source.field(field_at(fields, 1)?)?,
///         })
///     }
/// }
/// ```
pub trait Construct: Typed + Sized {
    /// Build the value, or for sum types the case with `tag`, requesting
    /// every field from `source` in declaration order.
    fn construct<S: FieldSource>(tag: usize, source: &mut S) -> Result<Self, CodecError>;
}

/// Supplies decoded field values to [`Construct::construct`].
pub trait FieldSource {
    fn field<F: Decode>(&mut self, info: &FieldInfo) -> Result<F, CodecError>;
}

/// The fields of a product type.
pub fn product_fields(info: &'static TypeInfo) -> Result<&'static [FieldInfo], CodecError> {
    match info {
        TypeInfo::Product(product) => Ok(product.fields()),
        _ => Err(CodecError::new(ErrorKind::ReflectionFailure(info.type_path()))),
    }
}

/// The payload fields of the case with `tag` of a sum type.
pub fn case_fields(
    info: &'static TypeInfo,
    tag: usize,
) -> Result<&'static [FieldInfo], CodecError> {
    match info {
        TypeInfo::Sum(sum) => match sum.case_at(tag) {
            Some(case) => Ok(case.fields()),
            None => Err(invalid_tag(info, tag)),
        },
        _ => Err(CodecError::new(ErrorKind::ReflectionFailure(info.type_path()))),
    }
}

/// The field at `index`, as a fallible lookup.
#[inline]
pub fn field_at(fields: &[FieldInfo], index: usize) -> Result<&FieldInfo, CodecError> {
    fields
        .get(index)
        .ok_or_else(|| CodecError::new(ErrorKind::MissingField(alloc::format!("#{index}"))))
}

/// The error for a tag that names no case of the sum type.
#[cold]
pub fn invalid_tag(info: &'static TypeInfo, tag: usize) -> CodecError {
    CodecError::new(ErrorKind::InvalidCase(alloc::format!(
        "#{tag} of `{}`",
        info.type_path()
    )))
}
