use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::bound::Bound;
use crate::combine::combine;
use crate::endpoint::Endpoint;
use crate::interval::Interval;
use crate::notation::{self, ParseError};
use crate::table::TruthTable;
use crate::validity::{self, Violation};

/// A set of real numbers stored as a flat, ordered list of interval boundaries.
///
/// Consecutive endpoint pairs `(endpoints[2k], endpoints[2k+1])` are the
/// intervals of the set. Well-formedness is *not* enforced on construction;
/// see [`RangeSet::validate`]. Every operation leaves its operands untouched
/// and returns a fresh set.
///
/// # Example
///
/// ```rust
/// use rangeset_rs::range_set::RangeSet;
///
/// let a: RangeSet = "[10,30][50,100]".parse().unwrap();
/// let b: RangeSet = "[20,40][110,120]".parse().unwrap();
///
/// assert_eq!(a.union(&b).to_string(), "[10,40][50,100][110,120]");
/// assert_eq!(a.intersection(&b).to_string(), "[20,30]");
/// assert!(a.intersection(&b).is_subset_of(&a));
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct RangeSet {
    endpoints: Vec<Endpoint>,
}

// Constructors
impl RangeSet {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// `(-∞, +∞)`
    pub fn full() -> Self {
        Self::new(vec![Endpoint::neg_inf(), Endpoint::pos_inf()])
    }

    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        intervals
            .into_iter()
            .flat_map(|iv| [iv.left, iv.right])
            .collect()
    }

    pub fn parse(text: &str) -> Result<Self, ParseError> {
        notation::parse(text).map(Self::new)
    }
}

// Storage access
impl RangeSet {
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Direct access to the storage, for staged construction.
    pub fn endpoints_mut(&mut self) -> &mut Vec<Endpoint> {
        &mut self.endpoints
    }

    pub fn push(&mut self, endpoint: Endpoint) {
        self.endpoints.push(endpoint);
    }

    pub fn into_endpoints(self) -> Vec<Endpoint> {
        self.endpoints
    }
}

// Queries
impl RangeSet {
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn num_ranges(&self) -> usize {
        self.endpoints.len() / 2
    }

    pub fn is_valid(&self) -> bool {
        validity::is_valid(&self.endpoints)
    }

    /// Reports the first broken invariant, if any.
    pub fn validate(&self) -> Result<(), Violation> {
        validity::validate(&self.endpoints)
    }

    /// Structural equality: same endpoints with the same tags.
    pub fn is_same(&self, other: &RangeSet) -> bool {
        self == other
    }

    pub fn is_subset_of(&self, other: &RangeSet) -> bool {
        self.intersection(other).is_same(self)
    }

    pub fn is_proper_subset_of(&self, other: &RangeSet) -> bool {
        self.is_subset_of(other) && !self.is_same(other)
    }

    /// Point membership. Only meaningful for valid sets.
    pub fn contains(&self, value: impl Into<Bound>) -> bool {
        let value = value.into();
        self.intervals().any(|iv| {
            let after_left = iv.left.value < value || (iv.left.value == value && iv.left.closed);
            let before_right = value < iv.right.value || (value == iv.right.value && iv.right.closed);
            after_left && before_right
        })
    }

    /// Intervals as `{left, right}` pairs. A dangling start is skipped.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.endpoints
            .chunks_exact(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
    }

    /// The intervals collected into a vector, for inspection.
    pub fn prettier(&self) -> Vec<Interval> {
        self.intervals().collect()
    }
}

// Set operations
impl RangeSet {
    /// Combines `self` with each of `others` in turn, folding from the left.
    ///
    /// With no `others`, the table is applied to `self` and the empty set.
    pub fn operate<'a, I>(&self, table: TruthTable, others: I) -> RangeSet
    where
        I: IntoIterator<Item = &'a RangeSet>,
    {
        let mut others = others.into_iter();
        let first = match others.next() {
            Some(rhs) => combine(table, &self.endpoints, &rhs.endpoints),
            None => combine(table, &self.endpoints, &[]),
        };
        let result = others.fold(first, |acc, rhs| combine(table, &acc, &rhs.endpoints));
        RangeSet::new(result)
    }

    pub fn union(&self, other: &RangeSet) -> RangeSet {
        RangeSet::new(combine(TruthTable::UNION, &self.endpoints, &other.endpoints))
    }

    pub fn intersection(&self, other: &RangeSet) -> RangeSet {
        RangeSet::new(combine(TruthTable::INTERSECTION, &self.endpoints, &other.endpoints))
    }

    /// Points of `self` that are not in `other`.
    pub fn difference(&self, other: &RangeSet) -> RangeSet {
        RangeSet::new(combine(TruthTable::DIFFERENCE, &self.endpoints, &other.endpoints))
    }

    pub fn symmetric_difference(&self, other: &RangeSet) -> RangeSet {
        RangeSet::new(combine(TruthTable::SYMMETRIC_DIFFERENCE, &self.endpoints, &other.endpoints))
    }

    pub fn complement(&self) -> RangeSet {
        RangeSet::new(combine(TruthTable::COMPLEMENT, &self.endpoints, &[]))
    }

    pub fn union_many<'a, I>(&self, others: I) -> RangeSet
    where
        I: IntoIterator<Item = &'a RangeSet>,
    {
        self.operate(TruthTable::UNION, others)
    }

    pub fn intersection_many<'a, I>(&self, others: I) -> RangeSet
    where
        I: IntoIterator<Item = &'a RangeSet>,
    {
        let others: Vec<&RangeSet> = others.into_iter().collect();
        if others.is_empty() {
            // Intersecting with nothing leaves the set as it is.
            debug!("intersection_many: no operands besides self");
            return self.clone();
        }
        self.operate(TruthTable::INTERSECTION, others)
    }
}

impl From<Vec<Endpoint>> for RangeSet {
    fn from(endpoints: Vec<Endpoint>) -> Self {
        Self::new(endpoints)
    }
}

impl FromIterator<Endpoint> for RangeSet {
    fn from_iter<T: IntoIterator<Item = Endpoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for RangeSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RangeSet {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        notation::write_endpoints(f, &self.endpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn rs(text: &str) -> RangeSet {
        text.parse().unwrap()
    }

    #[test]
    fn test_construct() {
        let a = RangeSet::new(vec![Endpoint::closed(1), Endpoint::open(2)]);
        let b = RangeSet::from_intervals([Interval::new(Endpoint::closed(1), Endpoint::open(2))]);
        let c: RangeSet = [Endpoint::closed(1), Endpoint::open(2)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, rs("[1,2)"));
        assert_eq!(RangeSet::try_from("[1,2)"), Ok(a));
    }

    #[test]
    fn test_parse_error_propagates() {
        assert!(RangeSet::parse("[abcd,123)").is_err());
        assert!("[12,34)(56".parse::<RangeSet>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let text = "(-Infinity,1](23,45)[67,89][100,Infinity)";
        assert_eq!(rs(text).to_string(), text);
    }

    #[test]
    fn test_is_empty() {
        assert!(RangeSet::empty().is_empty());
        assert!(rs("").is_empty());
        assert!(!rs("[1,2]").is_empty());
    }

    #[test]
    fn test_num_ranges() {
        assert_eq!(rs("").num_ranges(), 0);
        assert_eq!(rs("[1,2](3,4)[5,6)").num_ranges(), 3);
    }

    #[test]
    fn test_is_same() {
        assert!(rs("[1,2]").is_same(&rs("[ 1 , 2 ]")));
        assert!(!rs("[1,2]").is_same(&rs("[1,2)")));
        assert!(!rs("[1,2]").is_same(&rs("[1,2][3,4]")));
    }

    #[test]
    fn test_validity() {
        assert!(rs("(-Infinity,1](23,45)").is_valid());
        assert!(!rs("[5,1]").is_valid());
        assert_eq!(rs("[1,5][5,7]").validate(), Err(Violation::NotIncreasing { index: 2 }));
        let mut staged = rs("[1,2]");
        staged.push(Endpoint::closed(3));
        assert!(!staged.is_valid());
        staged.push(Endpoint::closed(4));
        assert!(staged.is_valid());
    }

    #[test]
    fn test_staged_fix_up() {
        let mut set = rs("[5,1]");
        assert!(!set.is_valid());
        set.endpoints_mut().swap(0, 1);
        assert!(set.is_valid());
        assert_eq!(set.to_string(), "[1,5]");
    }

    #[test]
    fn test_subset() {
        let a = rs("[20,30]");
        let b = rs("[10,40]");
        assert!(a.is_subset_of(&b));
        assert!(a.is_proper_subset_of(&b));
        assert!(!b.is_subset_of(&a));
        assert!(b.is_subset_of(&b));
        assert!(!b.is_proper_subset_of(&b));
        assert!(RangeSet::empty().is_subset_of(&a));
    }

    #[test]
    fn test_subset_boundary_tags() {
        assert!(rs("(10,20)").is_subset_of(&rs("[10,20]")));
        assert!(!rs("[10,20]").is_subset_of(&rs("(10,20)")));
    }

    #[test]
    fn test_contains() {
        let set = rs("(-Infinity,1](23,45)[67,89]");
        assert!(set.contains(-1000));
        assert!(set.contains(1));
        assert!(!set.contains(2));
        assert!(!set.contains(23));
        assert!(set.contains(24));
        assert!(!set.contains(45));
        assert!(set.contains(67));
        assert!(set.contains(89));
        assert!(!set.contains(Bound::PosInf));
        assert!(!RangeSet::full().contains(Bound::NegInf));
    }

    #[test]
    fn test_prettier() {
        let set = rs("[10,30](50,100)");
        assert_eq!(set.prettier(), vec![Interval::closed(10, 30), Interval::open(50, 100)]);
        let dangling = RangeSet::new(vec![Endpoint::closed(1), Endpoint::closed(2), Endpoint::closed(3)]);
        assert_eq!(dangling.prettier().len(), 1);
    }

    #[test]
    fn test_operations() {
        let a = rs("[10,30][50,100]");
        let b = rs("[20,40][110,120]");
        assert_eq!(a.union(&b), rs("[10,40][50,100][110,120]"));
        assert_eq!(a.intersection(&b), rs("[20,30]"));
        assert_eq!(a.difference(&b), rs("[10,20)[50,100]"));
        assert_eq!(a.symmetric_difference(&b), rs("[10,20)(30,40][50,100][110,120]"));
        assert_eq!(a.complement(), rs("(-Infinity,10)(30,50)(100,Infinity)"));
    }

    #[test]
    fn test_operate_left_fold() {
        let a = rs("[0,10]");
        let b = rs("[5,15]");
        let c = rs("[8,20]");
        assert_eq!(a.union_many([&b, &c]), rs("[0,20]"));
        assert_eq!(a.intersection_many([&b, &c]), rs("[8,10]"));
        assert_eq!(a.operate(TruthTable::UNION, [&b, &c]), a.union(&b).union(&c));
    }

    #[test]
    fn test_operate_without_operands() {
        let a = rs("[0,10]");
        let none: [&RangeSet; 0] = [];
        assert_eq!(a.union_many(none), a);
        assert_eq!(a.intersection_many(none), a);
        assert_eq!(a.operate(TruthTable::COMPLEMENT, none), a.complement());
    }

    #[test]
    fn test_operands_untouched() {
        let a = rs("[10,30][50,100]");
        let b = rs("[20,40][110,120]");
        let _ = a.union(&b);
        let _ = a.intersection(&b);
        assert_eq!(a, rs("[10,30][50,100]"));
        assert_eq!(b, rs("[20,40][110,120]"));
    }
}
