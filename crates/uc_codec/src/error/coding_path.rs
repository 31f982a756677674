use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};
use core::slice::Iter;

/// One step of a [`CodingPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A keyed entry, either a field name or a configured key.
    Key(String),
    /// A sequence element or positional field.
    Index(usize),
    /// A sum type case.
    Case(String),
}

/// The sequence of keys, indices and cases traversed to reach a value.
///
/// Renders as `$`, followed by `.key`, `[index]` and `::Case` per segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodingPath {
    segments: Vec<PathSegment>,
}

impl CodingPath {
    #[inline]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    #[inline]
    pub fn push_front(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate root-first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, PathSegment> {
        self.segments.iter()
    }
}

impl Display for CodingPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Case(case) => write!(f, "::{case}")?,
            }
        }
        Ok(())
    }
}
