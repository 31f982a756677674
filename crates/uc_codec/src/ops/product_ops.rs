use crate::Reflect;

/// A product value (struct or tuple): a fixed list of fields.
pub trait Product {
    /// Returns the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_len(&self) -> usize;
}

impl dyn Product + '_ {
    /// Iterate fields in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> ProductFieldIter<'_> {
        ProductFieldIter::new(self)
    }
}

/// An iterator over the fields of a [`Product`].
pub struct ProductFieldIter<'a> {
    value: &'a dyn Product,
    index: usize,
}

impl<'a> ProductFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Product) -> Self {
        Self { value, index: 0 }
    }
}

impl<'a> Iterator for ProductFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.value.field_len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for ProductFieldIter<'_> {}
