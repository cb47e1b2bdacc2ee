//! # rangeset-rs: Boolean algebra over sets of intervals
//!
//! **`rangeset-rs`** represents sets of real numbers as disjoint unions of intervals
//! ("range sets") and computes set algebra between them: union, intersection,
//! difference, and any other combination expressible as a 2×2 truth table.
//!
//! ## Data model
//!
//! A [`RangeSet`][crate::range_set::RangeSet] is a flat list of
//! [`Endpoint`][crate::endpoint::Endpoint]s. Consecutive pairs open and close one interval each.
//! Every endpoint is either **closed** (the value belongs to the interval) or **open**.
//! Values are [`Bound`][crate::bound::Bound]s: finite integers extended with `-∞` and `+∞`.
//!
//! A well-formed set has an even number of strictly increasing endpoints, and its
//! infinities are open. Well-formedness is checked on demand, never on construction,
//! so sets can be assembled in several steps and fixed up before use.
//!
//! ## Quick Start
//!
//! ```rust
//! use rangeset_rs::range_set::RangeSet;
//! use rangeset_rs::table::TruthTable;
//!
//! // 1. Parse two sets from bracket notation
//! let a: RangeSet = "[10,20]".parse().unwrap();
//! let b: RangeSet = "[30,40]".parse().unwrap();
//!
//! // 2. Built-in operations
//! assert_eq!((&a | &b).to_string(), "[10,20][30,40]");
//! assert!((&a & &b).is_empty());
//!
//! // 3. Any truth table: points outside both sets
//! let neither = TruthTable::from_fn(|in_a, in_b| !in_a && !in_b);
//! let gaps = a.operate(neither, [&b]);
//! assert_eq!(gaps.to_string(), "(-Infinity,10)(20,30)(40,Infinity)");
//! ```
//!
//! ## Core Components
//!
//! - **[`combine`]**: the single-sweep boundary-merge algorithm behind every operation.
//! - **[`range_set`]**: the [`RangeSet`][crate::range_set::RangeSet] type, relations and named operations.
//! - **[`notation`]**: parsing and printing of `(a,b]`-style text.
//! - **[`validity`]**: the well-formedness invariants.

pub mod bound;
pub mod combine;
pub mod endpoint;
pub mod interval;
pub mod notation;
pub mod ops;
pub mod range_set;
pub mod table;
pub mod validity;
