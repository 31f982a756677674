//! Error type shared by the codecs, the wire bridge and the instance builder.

// -----------------------------------------------------------------------------
// Modules

mod coding_path;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use coding_path::{CodingPath, PathSegment};
pub use kind::ErrorKind;

use alloc::string::{String, ToString};
use core::fmt::Display;

use thiserror::Error;

// -----------------------------------------------------------------------------
// CodecError

/// A failed encode or decode.
///
/// Carries the [`ErrorKind`] and the [`CodingPath`] traversed from the root
/// value to the point of failure. Segments are prepended while the error
/// propagates outwards, so the path reads root-first.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} (at `{path}`)")]
pub struct CodecError {
    kind: ErrorKind,
    path: CodingPath,
}

impl CodecError {
    /// Create an error at the current (root) position.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: CodingPath::new(),
        }
    }

    /// Shorthand for [`ErrorKind::Custom`].
    #[inline]
    pub fn custom(msg: impl Display) -> Self {
        Self::new(ErrorKind::Custom(msg.to_string()))
    }

    /// Shorthand for [`ErrorKind::MissingField`].
    #[inline]
    pub fn missing_field(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField(key.into()))
    }

    /// Shorthand for [`ErrorKind::TypeMismatch`].
    #[inline]
    pub fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, found })
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    /// Prepend `segment`, i.e. record that the failure happened below it.
    #[inline]
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.push_front(segment);
        self
    }

    /// See [`CodecError::within`].
    #[inline]
    pub fn within_key(self, key: &str) -> Self {
        self.within(PathSegment::Key(key.into()))
    }

    /// See [`CodecError::within`].
    #[inline]
    pub fn within_index(self, index: usize) -> Self {
        self.within(PathSegment::Index(index))
    }

    /// See [`CodecError::within`].
    #[inline]
    pub fn within_case(self, case: &str) -> Self {
        self.within(PathSegment::Case(case.into()))
    }
}

impl serde_core::ser::Error for CodecError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::custom(msg)
    }
}

impl serde_core::de::Error for CodecError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::custom(msg)
    }

    fn missing_field(field: &'static str) -> Self {
        Self::missing_field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_root_first() {
        let err = CodecError::missing_field("b")
            .within_index(1)
            .within_case("Pair")
            .within_key("items");

        assert_eq!(err.kind(), &ErrorKind::MissingField("b".into()));
        assert_eq!(err.path().to_string(), "$.items::Pair[1]");
        assert_eq!(
            err.to_string(),
            "missing field `b` (at `$.items::Pair[1]`)"
        );
    }
}
