use crate::Reflect;

/// A homogeneous, ordered sequence.
pub trait List {
    fn item_at(&self, index: usize) -> Option<&dyn Reflect>;

    fn len(&self) -> usize;
}

impl dyn List + '_ {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn iter_items(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    value: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn List) -> Self {
        Self { value, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value.item_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.value.len().saturating_sub(self.index);
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
