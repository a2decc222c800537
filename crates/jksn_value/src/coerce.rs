//! Loose coercions from any [`Value`] into primitive representations.
//!
//! Integer coercion is strict and reports a type error; float coercion is
//! permissive and yields `NaN`; boolean and string coercion never fail.
//! The string projection is the [`Display`](fmt::Display) impl, so
//! `value.to_string()` is the usual way to call it.

use std::fmt;

use crate::error::Error;
use crate::number::TWO_POW_63;
use crate::value::Value;

/// Floating-point targets for [`Value::to_number`].
pub trait Float: Copy {
    /// Not-a-number in this width.
    fn nan() -> Self;
    /// Converts an integer, rounding to nearest.
    fn from_int(n: i64) -> Self;
    /// Converts a binary32 value.
    fn from_f32(x: f32) -> Self;
    /// Converts a binary64 value, rounding to nearest.
    fn from_f64(x: f64) -> Self;
}

impl Float for f32 {
    fn nan() -> Self {
        f32::NAN
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_int(n: i64) -> Self {
        n as f32
    }

    fn from_f32(x: f32) -> Self {
        x
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    fn nan() -> Self {
        f64::NAN
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_int(n: i64) -> Self {
        n as f64
    }

    fn from_f32(x: f32) -> Self {
        f64::from(x)
    }

    fn from_f64(x: f64) -> Self {
        x
    }
}

impl Value {
    /// Truthiness.
    ///
    /// `Undefined` and `Null` are false, numbers are true when non-zero at
    /// their own width (so `NaN` is true), strings, blobs, arrays and objects
    /// are true when non-empty.
    #[must_use]
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(_) | Self::Float(_) | Self::Double(_) | Self::LongDouble(_) => self
                .as_number()
                .is_some_and(crate::number::Number::is_nonzero),
            Self::String(_) | Self::Blob(_) | Self::Array(_) | Self::Object(_) => !self.is_empty(),
        }
    }

    /// Integer coercion.
    ///
    /// Floats truncate toward zero. Strings must hold a base-10 integer
    /// literal (surrounding whitespace allowed).
    ///
    /// # Errors
    ///
    /// Returns a type error for `Undefined`, blobs, arrays and objects, for
    /// strings that do not parse or do not fit in an `i64`, and for floats
    /// that are `NaN`, infinite or out of range.
    pub fn to_int(&self) -> crate::Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Null => Ok(0),
            Self::Float(x) => self.truncate(f64::from(*x)),
            Self::Double(x) | Self::LongDouble(x) => self.truncate(*x),
            Self::String(s) => parse_int(s).ok_or_else(|| self.reject("int")),
            Self::Undefined | Self::Blob(_) | Self::Array(_) | Self::Object(_) => {
                Err(self.reject("int"))
            }
        }
    }

    /// Float coercion into `T`.
    ///
    /// Follows the same rules as [`Value::to_int`] but never fails: anything
    /// without a numeric reading becomes `NaN`.
    #[must_use]
    pub fn to_number<T: Float>(&self) -> T {
        match self {
            Self::Float(x) => T::from_f32(*x),
            Self::Double(x) | Self::LongDouble(x) => T::from_f64(*x),
            Self::Int(n) => T::from_int(*n),
            Self::Bool(b) => T::from_int(i64::from(*b)),
            Self::Null => T::from_int(0),
            Self::String(s) => parse_int(s).map_or_else(T::nan, T::from_int),
            Self::Undefined | Self::Blob(_) | Self::Array(_) | Self::Object(_) => T::nan(),
        }
    }

    /// Shorthand for `to_number::<f32>()`.
    #[must_use]
    pub fn to_float(&self) -> f32 {
        self.to_number()
    }

    /// Shorthand for `to_number::<f64>()`.
    #[must_use]
    pub fn to_double(&self) -> f64 {
        self.to_number()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn truncate(&self, x: f64) -> crate::Result<i64> {
        let whole = x.trunc();
        if whole.is_finite() && (-TWO_POW_63..TWO_POW_63).contains(&whole) {
            Ok(whole as i64)
        } else {
            Err(self.reject("int"))
        }
    }

    fn reject(&self, target: &'static str) -> Error {
        tracing::trace!(kind = %self.kind(), target, "coercion rejected");
        Error::type_error(target, self.kind())
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Writes a float using the `NaN` / `Infinity` / `-Infinity` spellings.
fn write_float<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    x: T,
    nan: bool,
    infinite: bool,
    negative: bool,
) -> fmt::Result {
    if nan {
        f.write_str("NaN")
    } else if infinite {
        f.write_str(if negative { "-Infinity" } else { "Infinity" })
    } else {
        write!(f, "{x}")
    }
}

/// String coercion.
///
/// Arrays join their elements' projections with `,` and no brackets;
/// objects render as `[object Object]`. Blobs that are not UTF-8 are
/// rendered lossily.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write_float(f, x, x.is_nan(), x.is_infinite(), x.is_sign_negative()),
            Self::Double(x) | Self::LongDouble(x) => {
                write_float(f, x, x.is_nan(), x.is_infinite(), x.is_sign_negative())
            }
            Self::String(s) => f.write_str(s),
            Self::Blob(b) => f.write_str(&String::from_utf8_lossy(b)),
            Self::Array(a) => {
                for (i, item) in a.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
        }
    }
}
