use std::fmt;

use crate::endpoint::Endpoint;

/// One interval of a range set, as a `{left, right}` pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Interval {
    pub left: Endpoint,
    pub right: Endpoint,
}

impl Interval {
    pub fn new(left: Endpoint, right: Endpoint) -> Self {
        Self { left, right }
    }

    /// `[lo, hi]`
    pub fn closed(lo: i64, hi: i64) -> Self {
        Self::new(Endpoint::closed(lo), Endpoint::closed(hi))
    }

    /// `(lo, hi)`
    pub fn open(lo: i64, hi: i64) -> Self {
        Self::new(Endpoint::open(lo), Endpoint::open(hi))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            if self.left.closed { '[' } else { '(' },
            self.left.value,
            self.right.value,
            if self.right.closed { ']' } else { ')' },
        )
    }
}
