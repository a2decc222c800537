//! Kind tags for [`Value`](crate::Value).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The active variant of a [`Value`](crate::Value).
///
/// The declaration order is the fallback ranking used to order values
/// whose kinds are not otherwise comparable (see [`Kind::rank`]).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// No value at all.
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// IEEE-754 binary32.
    Float,
    /// IEEE-754 binary64.
    Double,
    /// Extended precision float.
    LongDouble,
    /// Text string.
    String,
    /// Opaque binary blob.
    Blob,
    /// Ordered sequence of values.
    Array,
    /// Key-ordered mapping from value to value.
    Object,
}

impl Kind {
    /// Every kind, in rank order.
    pub const ALL: [Kind; 11] = [
        Kind::Undefined,
        Kind::Null,
        Kind::Bool,
        Kind::Int,
        Kind::Float,
        Kind::Double,
        Kind::LongDouble,
        Kind::String,
        Kind::Blob,
        Kind::Array,
        Kind::Object,
    ];

    /// Position of this kind in the fallback ordering table.
    ///
    /// Consulted only when two values are of different kinds and are not
    /// both numeric. Numeric kinds occupy a contiguous block so that the
    /// fallback agrees with cross-numeric comparison.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Null => 1,
            Self::Bool => 2,
            Self::Int => 3,
            Self::Float => 4,
            Self::Double => 5,
            Self::LongDouble => 6,
            Self::String => 7,
            Self::Blob => 8,
            Self::Array => 9,
            Self::Object => 10,
        }
    }

    /// Returns true for `Int`, `Float`, `Double` and `LongDouble`.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::Double | Self::LongDouble
        )
    }

    /// Returns true for kinds whose payload lives on the heap.
    #[must_use]
    pub const fn is_heap_backed(self) -> bool {
        matches!(
            self,
            Self::String | Self::Blob | Self::Array | Self::Object
        )
    }

    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
            Self::String => "string",
            Self::Blob => "blob",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
