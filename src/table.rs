//! Truth tables describing how two sets are combined.
//!
//! A [`TruthTable`] maps the pair `(inside_a, inside_b)` to whether a point
//! belongs to the result. Every binary set operation on range sets is one
//! such table fed to [`combine`][crate::combine::combine].
//!
//! ```text
//!              B: false   B: true
//! A: false     [0][0]     [0][1]
//! A: true      [1][0]     [1][1]
//! ```

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable([[bool; 2]; 2]);

impl TruthTable {
    /// `A ∪ B`
    pub const UNION: TruthTable = TruthTable([[false, true], [true, true]]);
    /// `A ∩ B`
    pub const INTERSECTION: TruthTable = TruthTable([[false, false], [false, true]]);
    /// `A \ B`
    pub const DIFFERENCE: TruthTable = TruthTable([[false, false], [true, false]]);
    /// `A △ B`
    pub const SYMMETRIC_DIFFERENCE: TruthTable = TruthTable([[false, true], [true, false]]);
    /// `¬A`, ignoring B.
    pub const COMPLEMENT: TruthTable = TruthTable([[true, true], [false, false]]);

    /// Builds a table from rows indexed as `rows[inside_a][inside_b]`.
    pub const fn new(rows: [[bool; 2]; 2]) -> Self {
        TruthTable(rows)
    }

    /// Tabulates `f(inside_a, inside_b)`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(bool, bool) -> bool,
    {
        TruthTable([[f(false, false), f(false, true)], [f(true, false), f(true, true)]])
    }

    #[inline]
    pub fn eval(&self, inside_a: bool, inside_b: bool) -> bool {
        self.0[inside_a as usize][inside_b as usize]
    }

    /// The same operation with the operands swapped.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|a, b| self.eval(b, a))
    }

    /// The complement of the operation's result.
    pub fn negate(&self) -> Self {
        Self::from_fn(|a, b| !self.eval(a, b))
    }

    pub fn rows(&self) -> [[bool; 2]; 2] {
        self.0
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |v: bool| if v { '1' } else { '0' };
        write!(
            f,
            "{}{}{}{}",
            bit(self.eval(false, false)),
            bit(self.eval(false, true)),
            bit(self.eval(true, false)),
            bit(self.eval(true, true)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_named_tables() {
        assert_eq!(TruthTable::UNION, TruthTable::from_fn(|a, b| a || b));
        assert_eq!(TruthTable::INTERSECTION, TruthTable::from_fn(|a, b| a && b));
        assert_eq!(TruthTable::DIFFERENCE, TruthTable::from_fn(|a, b| a && !b));
        assert_eq!(TruthTable::SYMMETRIC_DIFFERENCE, TruthTable::from_fn(|a, b| a ^ b));
        assert_eq!(TruthTable::COMPLEMENT, TruthTable::from_fn(|a, _| !a));
    }

    #[test]
    fn test_eval_indexing() {
        let t = TruthTable::new([[false, true], [false, false]]);
        assert!(t.eval(false, true));
        assert!(!t.eval(true, false));
        assert!(!t.eval(false, false));
        assert!(!t.eval(true, true));
    }

    #[test]
    fn test_transpose() {
        assert_eq!(TruthTable::UNION.transpose(), TruthTable::UNION);
        assert_eq!(TruthTable::DIFFERENCE.transpose(), TruthTable::from_fn(|a, b| !a && b));
    }

    #[test]
    fn test_negate() {
        assert_eq!(TruthTable::UNION.negate(), TruthTable::from_fn(|a, b| !a && !b));
        assert_eq!(TruthTable::SYMMETRIC_DIFFERENCE.negate().negate(), TruthTable::SYMMETRIC_DIFFERENCE);
    }

    #[test]
    fn test_display() {
        assert_eq!(TruthTable::UNION.to_string(), "0111");
        assert_eq!(TruthTable::INTERSECTION.to_string(), "0001");
    }
}
