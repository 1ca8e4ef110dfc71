use ordered_float::OrderedFloat;

use crate::interval::Interval;

/// Totally ordered, hashable form of an [`Interval`].
///
/// Orders lexicographically by `(lo, hi)`, with NaN sorting above every other
/// value. This order only exists to put intervals in maps and sets or sort
/// them deterministically; it says nothing about whether two intervals
/// overlap. Use [`Interval::precedes`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalKey {
    lo: OrderedFloat<f64>,
    hi: OrderedFloat<f64>,
}

impl IntervalKey {
    pub fn lo(&self) -> f64 {
        self.lo.0
    }

    pub fn hi(&self) -> f64 {
        self.hi.0
    }
}

impl Interval {
    /// Returns the totally ordered form of this interval.
    pub fn key(&self) -> IntervalKey {
        IntervalKey {
            lo: OrderedFloat(self.lo),
            hi: OrderedFloat(self.hi),
        }
    }
}

impl From<Interval> for IntervalKey {
    fn from(interval: Interval) -> Self {
        interval.key()
    }
}

impl From<IntervalKey> for Interval {
    fn from(key: IntervalKey) -> Self {
        Interval::new(key.lo.0, key.hi.0)
    }
}
