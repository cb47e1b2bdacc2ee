//! Well-formedness checks for endpoint sequences.
//!
//! A sequence is valid when:
//!
//! 1. it has even length,
//! 2. values are strictly increasing,
//! 3. a leading `-∞` is open,
//! 4. a trailing `+∞` is open.
//!
//! Validity is advisory: nothing in the crate refuses to build an invalid
//! sequence, but operations only give meaningful results on valid ones.

use std::fmt;

use crate::bound::Bound;
use crate::endpoint::Endpoint;

/// The first invariant a sequence breaks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Violation {
    /// A start has no matching end.
    OddLength { len: usize },
    /// `endpoints[index - 1].value >= endpoints[index].value`.
    NotIncreasing { index: usize },
    /// The sequence starts with a closed `-∞`.
    ClosedNegativeInfinity,
    /// The sequence ends with a closed `+∞`.
    ClosedPositiveInfinity,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OddLength { len } => write!(f, "odd number of endpoints ({})", len),
            Violation::NotIncreasing { index } => {
                write!(f, "endpoint {} does not increase over its predecessor", index)
            }
            Violation::ClosedNegativeInfinity => write!(f, "-Infinity must be an open bound"),
            Violation::ClosedPositiveInfinity => write!(f, "Infinity must be an open bound"),
        }
    }
}

impl std::error::Error for Violation {}

/// Checks the invariants in order, stopping at the first failure.
pub fn validate(endpoints: &[Endpoint]) -> Result<(), Violation> {
    if endpoints.len() % 2 != 0 {
        return Err(Violation::OddLength { len: endpoints.len() });
    }
    if let Some(i) = endpoints.windows(2).position(|w| w[0].value >= w[1].value) {
        return Err(Violation::NotIncreasing { index: i + 1 });
    }
    if let Some(first) = endpoints.first() {
        if first.value == Bound::NegInf && first.closed {
            return Err(Violation::ClosedNegativeInfinity);
        }
    }
    if let Some(last) = endpoints.last() {
        if last.value == Bound::PosInf && last.closed {
            return Err(Violation::ClosedPositiveInfinity);
        }
    }
    Ok(())
}

pub fn is_valid(endpoints: &[Endpoint]) -> bool {
    validate(endpoints).is_ok()
}
