//! Extended integer values used as interval boundaries.
//!
//! A [`Bound`] is either a finite `i64` or one of the two infinities.
//! Infinities are explicit variants rather than floating-point values, so
//! equality and ordering are total and there is no `NaN` to worry about.

use std::cmp::Ordering;
use std::fmt;

/// Boundary value: a finite number or an infinity.
///
/// # Ordering
///
/// The total order is: `-∞ < finite values < +∞`.
///
/// # Example
///
/// ```rust
/// use rangeset_rs::bound::Bound;
///
/// assert!(Bound::NegInf < Bound::Finite(i64::MIN));
/// assert!(Bound::Finite(i64::MAX) < Bound::PosInf);
/// assert_eq!(Bound::from(7).to_string(), "7");
/// assert_eq!(Bound::PosInf.to_string(), "Infinity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Negative infinity (`-∞`).
    NegInf,
    /// Finite value.
    Finite(i64),
    /// Positive infinity (`+∞`).
    PosInf,
}

impl Bound {
    /// Extract finite value, if any.
    pub fn as_finite(self) -> Option<i64> {
        match self {
            Bound::Finite(n) => Some(n),
            _ => None,
        }
    }

    /// Check if this bound is finite.
    pub fn is_finite(self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// Check if this bound is one of the infinities.
    pub fn is_infinite(self) -> bool {
        !self.is_finite()
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::NegInf, Bound::NegInf) => Ordering::Equal,
            (Bound::NegInf, _) => Ordering::Less,
            (_, Bound::NegInf) => Ordering::Greater,
            (Bound::PosInf, Bound::PosInf) => Ordering::Equal,
            (Bound::PosInf, _) => Ordering::Greater,
            (_, Bound::PosInf) => Ordering::Less,
            (Bound::Finite(a), Bound::Finite(b)) => a.cmp(b),
        }
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Finite(value)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Finite(value.into())
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-Infinity"),
            Bound::Finite(n) => write!(f, "{}", n),
            Bound::PosInf => write!(f, "Infinity"),
        }
    }
}
