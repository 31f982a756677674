use crate::info::{FieldInfo, TypeInfo};

/// How a type's data is organized, as far as the codecs are concerned.
///
/// Derived from a type's [`TypeInfo`], which is itself built once per type,
/// so the shape of a type never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// Converts itself through serde.
    Native,
    /// `Option<inner>`.
    Optional(&'static TypeInfo),
    /// Only named fields.
    ProductNamed,
    /// Only positional fields, or no fields at all (degenerate).
    ProductPositional,
    /// Both named and positional fields.
    ProductMixed,
    /// A tagged variant type, whatever its payloads look like.
    Sum,
    /// A homogeneous sequence of `item`.
    Collection(&'static TypeInfo),
    Unsupported,
}

impl TypeShape {
    /// Whether this is one of the three product shapes.
    #[inline]
    pub const fn is_product(&self) -> bool {
        matches!(
            self,
            Self::ProductNamed | Self::ProductPositional | Self::ProductMixed
        )
    }
}

/// Classify `info`.
///
/// # Examples
///
/// ```
/// use uc_codec::info::{Typed, TypeShape, classify};
///
/// assert_eq!(classify(<(u8, bool)>::type_info()), TypeShape::ProductPositional);
/// assert_eq!(classify(<()>::type_info()), TypeShape::ProductPositional);
/// assert_eq!(classify(<String>::type_info()), TypeShape::Native);
/// ```
pub fn classify(info: &'static TypeInfo) -> TypeShape {
    match info {
        TypeInfo::Native(_) => TypeShape::Native,
        TypeInfo::Optional(optional) => TypeShape::Optional(optional.inner_info()),
        TypeInfo::Product(product) => {
            shape_of_counts(product.named_len(), product.positional_len())
        }
        TypeInfo::Sum(_) => TypeShape::Sum,
        TypeInfo::List(list) => TypeShape::Collection(list.item_info()),
        TypeInfo::Opaque(_) => TypeShape::Unsupported,
    }
}

/// Classify a bare field list, such as a case payload, as a product.
pub fn classify_fields<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> TypeShape {
    let (named, positional) = fields.into_iter().fold((0, 0), |(named, positional), field| {
        if field.is_positional() {
            (named, positional + 1)
        } else {
            (named + 1, positional)
        }
    });
    shape_of_counts(named, positional)
}

#[inline]
const fn shape_of_counts(named: usize, positional: usize) -> TypeShape {
    match (named, positional) {
        (0, _) => TypeShape::ProductPositional,
        (_, 0) => TypeShape::ProductNamed,
        _ => TypeShape::ProductMixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{CaseInfo, ProductInfo, SumInfo, Typed};

    struct Probe;

    impl Typed for Probe {
        fn type_info() -> &'static TypeInfo {
            use crate::impls::NonGenericTypeInfoCell;
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| TypeInfo::Sum(SumInfo::new::<Self>(&[CaseInfo::unit(0, "only")])))
        }
    }

    fn product(fields: &[FieldInfo]) -> TypeShape {
        let info = TypeInfo::Product(ProductInfo::new::<Probe>(fields));
        let info: &'static TypeInfo = alloc::boxed::Box::leak(alloc::boxed::Box::new(info));
        classify(info)
    }

    #[test]
    fn products_classify_by_field_names() {
        assert_eq!(
            product(&[FieldInfo::named::<u8>("a", 0), FieldInfo::named::<u8>("b", 1)]),
            TypeShape::ProductNamed
        );
        assert_eq!(
            product(&[FieldInfo::positional::<u8>(0), FieldInfo::positional::<u8>(1)]),
            TypeShape::ProductPositional
        );
        assert_eq!(
            product(&[
                FieldInfo::positional::<u8>(0),
                FieldInfo::named::<u8>("b", 1),
                FieldInfo::positional::<u8>(2),
            ]),
            TypeShape::ProductMixed
        );
        assert_eq!(product(&[]), TypeShape::ProductPositional);
    }

    #[test]
    fn sums_and_wrappers() {
        assert_eq!(classify(Probe::type_info()), TypeShape::Sum);
        assert_eq!(
            classify(<Option<u8>>::type_info()),
            TypeShape::Optional(u8::type_info())
        );
        assert!(matches!(
            classify(<alloc::vec::Vec<u8>>::type_info()),
            TypeShape::Collection(_)
        ));
    }
}
