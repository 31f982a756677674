use crate::Reflect;

/// A sum value (enum): the active case and its payload fields.
pub trait Sum {
    /// The tag of the active case, i.e. its declaration index.
    fn variant_index(&self) -> usize;

    /// Returns the payload field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Number of payload fields of the active case.
    fn field_len(&self) -> usize;
}

impl dyn Sum + '_ {
    /// Iterate payload fields in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> SumFieldIter<'_> {
        SumFieldIter::new(self)
    }
}

/// An iterator over the payload fields of a [`Sum`].
pub struct SumFieldIter<'a> {
    value: &'a dyn Sum,
    index: usize,
}

impl<'a> SumFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Sum) -> Self {
        Self { value, index: 0 }
    }
}

impl<'a> Iterator for SumFieldIter<'a> {
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

impl ExactSizeIterator for SumFieldIter<'_> {}
