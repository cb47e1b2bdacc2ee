//! Boundary-merge combinator: the core of the crate.
//!
//! [`combine`] evaluates an arbitrary [`TruthTable`] over two endpoint
//! sequences in a single left-to-right sweep. No individual points are ever
//! materialized; the sweep only looks at boundaries.
//!
//! The sweep runs in three phases:
//!
//! 1. **Merge** ([`merge_events`]). Both sequences are walked with one cursor
//!    each. The `k`-th endpoint of a sequence opens an interval when `k` is
//!    even and closes one when `k` is odd. Endpoints are ordered by the key
//!    `(value, priority)`, see [`priority`]. Endpoints with equal keys are
//!    fused into a single event owned by both operands.
//!
//! 2. **Evaluate** ([`evaluate`]). Membership flags for both operands are
//!    updated event by event and the table is evaluated *after* each update,
//!    so every [`Sample`] describes the region immediately following its
//!    boundary. End events flip their `closed` tag: a closed end means the
//!    region after it starts open, and vice versa.
//!
//! 3. **Re-derive** ([`boundaries`]). Every change of the truth value becomes
//!    a boundary of the result. Touching intervals are glued together and a
//!    result that is still open at the end is closed with `+∞`.
//!
//! ## Tie-breaking
//!
//! At equal values, events are ordered
//!
//! ```text
//! open end (-2)  <  closed end (-1)  <  closed start (+1)  <  open start (+2)
//! ```
//!
//! which resolves exclusive boundaries as "outside" before inclusive ones are
//! resolved as "inside", regardless of which operand contributed them.
//! A consequence is that a closed end of one operand and a closed start of
//! the other at the same value are never seen as overlapping. That matches
//! the data model, which cannot represent a single point `[v,v]` anyway.

use std::cmp::Ordering;

use log::debug;

use crate::bound::Bound;
use crate::endpoint::Endpoint;
use crate::table::TruthTable;

/// Which operand(s) an event came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Source(u8);

impl Source {
    pub const A: Source = Source(0b01);
    pub const B: Source = Source(0b10);
    pub const BOTH: Source = Source(0b11);

    pub fn has_a(self) -> bool {
        self.0 & Self::A.0 != 0
    }

    pub fn has_b(self) -> bool {
        self.0 & Self::B.0 != 0
    }
}

/// Whether an endpoint opens or closes an interval.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Start,
    End,
}

impl Side {
    /// Side of the endpoint at `index` in a sequence.
    pub fn at(index: usize) -> Side {
        if index % 2 == 0 {
            Side::Start
        } else {
            Side::End
        }
    }
}

/// Tie-break rank of a boundary kind at equal values.
pub fn priority(side: Side, closed: bool) -> i8 {
    match (side, closed) {
        (Side::End, false) => -2,
        (Side::End, true) => -1,
        (Side::Start, true) => 1,
        (Side::Start, false) => 2,
    }
}

/// A boundary in the merged stream.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Event {
    pub endpoint: Endpoint,
    pub side: Side,
    pub source: Source,
}

impl Event {
    pub fn new(endpoint: Endpoint, side: Side, source: Source) -> Self {
        Self { endpoint, side, source }
    }

    /// Sort key of the event: `(value, priority)`.
    pub fn key(&self) -> (Bound, i8) {
        (self.endpoint.value, priority(self.side, self.endpoint.closed))
    }
}

/// Truth value of the region right after a boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sample {
    pub value: Bound,
    pub closed: bool,
    pub inside: bool,
}

/// Phase 1: merges the endpoints of `a` and `b` into one ordered event stream.
pub fn merge_events(a: &[Endpoint], b: &[Endpoint]) -> Vec<Event> {
    let mut events = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let ea = Event::new(a[i], Side::at(i), Source::A);
        let eb = Event::new(b[j], Side::at(j), Source::B);
        match ea.key().cmp(&eb.key()) {
            Ordering::Less => {
                events.push(ea);
                i += 1;
            }
            Ordering::Greater => {
                events.push(eb);
                j += 1;
            }
            Ordering::Equal => {
                // Same value, side and tag: one boundary shared by both.
                events.push(Event::new(a[i], Side::at(i), Source::BOTH));
                i += 1;
                j += 1;
            }
        }
    }

    // At most one of these is non-empty.
    events.extend((i..a.len()).map(|k| Event::new(a[k], Side::at(k), Source::A)));
    events.extend((j..b.len()).map(|k| Event::new(b[k], Side::at(k), Source::B)));

    events
}

/// Phase 2: tracks membership in both operands and applies the table.
///
/// When the stream does not start at `-∞` (or is empty), a seed sample at an
/// open `-∞` records the truth value left of all boundaries.
pub fn evaluate(table: TruthTable, events: &[Event]) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(events.len() + 1);

    let starts_at_neg_inf = events
        .first()
        .is_some_and(|e| e.endpoint.value == Bound::NegInf);
    if !starts_at_neg_inf {
        samples.push(Sample {
            value: Bound::NegInf,
            closed: false,
            inside: table.eval(false, false),
        });
    }

    let mut inside_a = false;
    let mut inside_b = false;
    for event in events {
        let entering = event.side == Side::Start;
        if event.source.has_a() {
            inside_a = entering;
        }
        if event.source.has_b() {
            inside_b = entering;
        }
        let closed = if entering {
            event.endpoint.closed
        } else {
            !event.endpoint.closed
        };
        samples.push(Sample {
            value: event.endpoint.value,
            closed,
            inside: table.eval(inside_a, inside_b),
        });
    }

    samples
}

/// Phase 3: turns truth-value transitions back into endpoints.
pub fn boundaries(samples: &[Sample]) -> Vec<Endpoint> {
    let mut result: Vec<Endpoint> = Vec::new();
    let mut inside = false;

    for sample in samples {
        // `+∞` is never attained; a result still open there is closed below.
        if sample.inside == inside || sample.value == Bound::PosInf {
            continue;
        }
        inside = sample.inside;

        if inside {
            let start = Endpoint::new(sample.value, sample.closed);
            if let Some(&end) = result.last() {
                if end.value == start.value && (end.closed || start.closed) {
                    debug!("boundaries: gluing intervals touching at {}", start.value);
                    result.pop();
                    continue;
                }
            }
            result.push(start);
        } else {
            result.push(Endpoint::new(sample.value, !sample.closed));
        }
    }

    if inside {
        result.push(Endpoint::pos_inf());
    }

    result
}

/// Combines two endpoint sequences under `table`.
///
/// Both inputs should be valid (see [`validity`][crate::validity]). The
/// output then holds exactly the points `x` for which
/// `table.eval(x ∈ a, x ∈ b)` is true. Invalid inputs never cause a panic,
/// but the output is meaningless.
pub fn combine(table: TruthTable, a: &[Endpoint], b: &[Endpoint]) -> Vec<Endpoint> {
    debug!("combine(table = {}, |a| = {}, |b| = {})", table, a.len(), b.len());

    let events = merge_events(a, b);
    let samples = evaluate(table, &events);
    boundaries(&samples)
}
