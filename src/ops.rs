//! Operator sugar for set operations on range sets.
//!
//! | Operator | Operation |
//! |----------|-----------|
//! | `a \| b` | [`RangeSet::union`] |
//! | `a & b`  | [`RangeSet::intersection`] |
//! | `a - b`  | [`RangeSet::difference`] |
//! | `a ^ b`  | [`RangeSet::symmetric_difference`] |
//! | `!a`     | [`RangeSet::complement`] |
//!
//! Operators are implemented on references, so operands are never consumed.

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use crate::range_set::RangeSet;

impl BitOr for &RangeSet {
    type Output = RangeSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitAnd for &RangeSet {
    type Output = RangeSet;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl Sub for &RangeSet {
    type Output = RangeSet;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl BitXor for &RangeSet {
    type Output = RangeSet;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl Not for &RangeSet {
    type Output = RangeSet;

    fn not(self) -> Self::Output {
        self.complement()
    }
}
