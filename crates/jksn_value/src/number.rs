//! Numeric promotion shared by equality, ordering and hashing.
//!
//! Every cross-kind numeric relation on [`Value`](crate::Value) goes through
//! [`Number::compare`], so `==` and `<` can never disagree about how an
//! `Int` relates to a `Double`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::kind::Kind;

/// 2^63 as an `f64`; the first float above every `i64`.
pub(crate) const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// A numeric payload projected out of a value.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    Int(i64),
    /// binary32 float.
    Float(f32),
    /// binary64 float.
    Double(f64),
    /// Extended precision float, held at the widest native width.
    LongDouble(f64),
}

impl Number {
    /// Returns the kind this number was projected from.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Double(_) => Kind::Double,
            Self::LongDouble(_) => Kind::LongDouble,
        }
    }

    /// Returns true if the number is non-zero at its native width.
    ///
    /// `NaN` is non-zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_nonzero(self) -> bool {
        match self {
            Self::Int(n) => n != 0,
            Self::Float(x) => x != 0.0,
            Self::Double(x) | Self::LongDouble(x) => x != 0.0,
        }
    }

    /// Widens to `f64`. Exact for every floating kind.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn widen(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(x) => f64::from(x),
            Self::Double(x) | Self::LongDouble(x) => x,
        }
    }

    /// Compares two numbers after promotion to the wider representation.
    ///
    /// Float against float compares at `f64`, which is exact for binary32
    /// operands. Int against float compares the exact mathematical values,
    /// so equality stays transitive for integers beyond the float mantissa.
    /// `NaN` equals `NaN` and sorts above every other number; `-0.0`
    /// equals `0.0`.
    #[must_use]
    pub fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(&b),
            (Self::Int(a), b) => cmp_int_real(a, b.widen()),
            (a, Self::Int(b)) => cmp_int_real(b, a.widen()).reverse(),
            (a, b) => cmp_real(a.widen(), b.widen()),
        }
    }

    /// Feeds a hash consistent with [`Number::compare`] into `state`.
    ///
    /// Integral floats hash like the equal `Int`, all `NaN`s hash alike and
    /// `-0.0` hashes like `0`.
    pub fn hash_into<H: Hasher>(self, state: &mut H) {
        match self {
            Self::Int(n) => {
                0u8.hash(state);
                n.hash(state);
            }
            other => {
                let x = other.widen();
                if let Some(n) = integral(x) {
                    0u8.hash(state);
                    n.hash(state);
                } else if x.is_nan() {
                    1u8.hash(state);
                    f64::NAN.to_bits().hash(state);
                } else {
                    1u8.hash(state);
                    x.to_bits().hash(state);
                }
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

/// Returns `x` as an `i64` when it is integral and in range.
#[allow(clippy::float_cmp)]
#[allow(clippy::cast_possible_truncation)]
fn integral(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&x) {
        Some(x as i64)
    } else {
        None
    }
}

/// Total order over `f64` with `NaN` as the greatest element.
fn cmp_real(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

/// Exact comparison of an integer against a float.
#[allow(clippy::cast_possible_truncation)]
fn cmp_int_real(i: i64, x: f64) -> Ordering {
    if x.is_nan() || x >= TWO_POW_63 {
        return Ordering::Less;
    }
    if x < -TWO_POW_63 {
        return Ordering::Greater;
    }
    // x is now within [-2^63, 2^63), so its integral part fits an i64.
    let whole = x.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal if x > whole => Ordering::Less,
        Ordering::Equal if x < whole => Ordering::Greater,
        ord => ord,
    }
}
