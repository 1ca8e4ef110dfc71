//! Closed `f64` intervals for tracking bounds.
//!
//! [`Interval`] is a plain `Copy` value. Inverted bounds (`lo > hi`) denote
//! the empty interval, so no operation can fail: unions grow a bound as
//! samples are observed, intersections of disjoint intervals are simply empty.

pub mod interval;
pub mod key;
pub mod parse;
mod project;

pub use interval::Interval;
pub use key::IntervalKey;
pub use parse::{BoundSide, ParseIntervalError};
