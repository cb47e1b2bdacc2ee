use std::fmt;

use crate::bound::Bound;

/// A single interval boundary: a value plus an open/closed tag.
///
/// `closed` means the value itself belongs to the interval. For infinite
/// values the tag carries no meaning, but well-formed sets keep it open.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Endpoint {
    pub value: Bound,
    pub closed: bool,
}

impl Endpoint {
    pub fn new(value: impl Into<Bound>, closed: bool) -> Self {
        Self {
            value: value.into(),
            closed,
        }
    }

    /// Inclusive boundary.
    pub fn closed(value: impl Into<Bound>) -> Self {
        Self::new(value, true)
    }

    /// Exclusive boundary.
    pub fn open(value: impl Into<Bound>) -> Self {
        Self::new(value, false)
    }

    pub fn neg_inf() -> Self {
        Self::open(Bound::NegInf)
    }

    pub fn pos_inf() -> Self {
        Self::open(Bound::PosInf)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.closed { "c" } else { "o" };
        write!(f, "{}{}", self.value, tag)
    }
}
