//! Error types for JKSN values.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::kind::Kind;

/// The error type for value operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a type error for a coercion from `actual` into `target`.
    #[must_use]
    pub fn type_error(target: &'static str, actual: Kind) -> Self {
        Self::new(ErrorKind::TypeError { target, actual })
    }

    /// Creates a nesting depth error.
    #[must_use]
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::new(ErrorKind::DepthExceeded { limit })
    }

    /// Returns true if this is a type error.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeError { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The value has no representation in the requested type.
    #[error("type error: cannot convert {actual} to {target}")]
    TypeError {
        /// Name of the requested representation.
        target: &'static str,
        /// Kind of the value being converted.
        actual: Kind,
    },

    /// Container nesting is deeper than the allowed limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}
