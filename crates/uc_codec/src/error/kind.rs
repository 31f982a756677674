use alloc::string::String;

use thiserror::Error;

/// The failure taxonomy.
///
/// None of these are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No descriptors could be produced for the type.
    #[error("reflection failure: `{0}` has no structural descriptor")]
    ReflectionFailure(&'static str),

    /// A decoded case name matched none of the declared cases.
    #[error("invalid case `{0}`")]
    InvalidCase(String),

    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The type's shape cannot be handled by the structural codec.
    #[error("unsupported shape: `{0}`")]
    UnsupportedShape(&'static str),

    /// Raised by a transport, a native impl or a custom strategy.
    #[error("{0}")]
    Custom(String),
}
