use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Mul, MulAssign, RangeInclusive},
};

use itertools::{Itertools, MinMaxResult};

/// A closed interval `[lo, hi]` over `f64`.
///
/// An interval with `lo > hi` is empty. Emptiness is an ordinary value rather
/// than an error: nothing is validated on construction and operations such as
/// [`Interval::intersect`] silently produce inverted bounds when the operands
/// are disjoint.
///
/// Equality compares the stored bounds exactly. Two empty intervals are only
/// equal if their bounds are, so `Interval::new(1.0, -1.0)` and
/// [`Interval::empty`] compare unequal.
///
/// `Interval` deliberately does not implement `PartialOrd`. See
/// [`Interval::precedes`] for the disjointness relation, and
/// [`IntervalKey`](crate::key::IntervalKey) for a total order usable in
/// collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// The empty interval, absorbed by [`Interval::union`].
    pub const EMPTY: Self = Self::new(f64::INFINITY, f64::NEG_INFINITY);

    /// The interval containing every value.
    pub const UNIVERSE: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    /// Creates an interval from its bounds verbatim.
    ///
    /// The bounds are not reordered, so passing `lo > hi` creates an empty
    /// interval.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Returns the empty interval `[+inf, -inf]`.
    ///
    /// ```rust
    /// # use ranged::Interval;
    /// let x = Interval::new(-1.0, 4.0);
    /// assert_eq!(Interval::empty().union(x), x);
    /// ```
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns the degenerate interval `[value, value]`.
    pub const fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Returns `true` if `lo > hi`.
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Returns `hi - lo`, or `0.0` if the interval is empty.
    pub fn width(&self) -> f64 {
        (self.hi - self.lo).max(0.0)
    }

    /// Returns the center of the interval.
    ///
    /// The result carries no meaning for empty intervals.
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// Returns `true` if `lo <= value <= hi`.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Returns `true` if every point of `other` lies within `self`.
    ///
    /// An empty `other` is contained by any interval.
    pub fn contains_interval(&self, other: Self) -> bool {
        other.is_empty() || (self.lo <= other.lo && other.hi <= self.hi)
    }

    /// Returns the point of the interval closest to `value`.
    ///
    /// Empty intervals have no points, and return `value` unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.is_empty() {
            value
        } else {
            value.max(self.lo).min(self.hi)
        }
    }

    /// Returns the convex hull of both intervals.
    ///
    /// This is not a set union: two disjoint intervals produce a single
    /// interval spanning the gap between them.
    ///
    /// ```rust
    /// # use ranged::Interval;
    /// let x = Interval::new(0.0, 2.0);
    /// let y = Interval::new(3.0, 5.0);
    /// assert_eq!(x.union(y), Interval::new(0.0, 5.0));
    /// ```
    pub fn union(&self, other: Self) -> Self {
        Self::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    /// Grows `self` in place to the convex hull of `self` and `other`.
    pub fn union_with(&mut self, other: Self) {
        self.lo = self.lo.min(other.lo);
        self.hi = self.hi.max(other.hi);
    }

    /// Grows `self` in place to include `value`.
    pub fn expand(&mut self, value: f64) {
        self.lo = self.lo.min(value);
        self.hi = self.hi.max(value);
    }

    /// Returns the smallest interval containing `self` and `value`.
    pub fn expanded(&self, value: f64) -> Self {
        Self::new(self.lo.min(value), self.hi.max(value))
    }

    /// Returns the overlap of both intervals.
    ///
    /// Disjoint operands produce an empty interval with `lo > hi`.
    ///
    /// ```rust
    /// # use ranged::Interval;
    /// let x = Interval::new(0.0, 3.5);
    /// assert_eq!(x.intersect(Interval::new(3.0, 4.0)), Interval::new(3.0, 3.5));
    /// assert!(x.intersect(Interval::new(5.0, 6.0)).is_empty());
    /// ```
    pub fn intersect(&self, other: Self) -> Self {
        Self::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    /// Shrinks `self` in place to its overlap with `other`.
    pub fn intersect_with(&mut self, other: Self) {
        self.lo = self.lo.max(other.lo);
        self.hi = self.hi.min(other.hi);
    }

    /// Multiplies both bounds by `factor`, reordering them if the factor is
    /// negative.
    ///
    /// Scaling by zero always produces `[0, 0]`, including for unbounded and
    /// empty intervals.
    ///
    /// ```rust
    /// # use ranged::Interval;
    /// assert_eq!(Interval::new(-5.0, -3.0).scale(-1.0), Interval::new(3.0, 5.0));
    /// assert_eq!(Interval::new(-2.0, 2.0).scale(0.0), Interval::point(0.0));
    /// ```
    pub fn scale(&self, factor: f64) -> Self {
        if factor == 0.0 {
            return Self::point(0.0);
        }

        let a = self.lo * factor;
        let b = self.hi * factor;
        Self::new(a.min(b), a.max(b))
    }

    /// Scales `self` in place. See [`Interval::scale`].
    pub fn scale_by(&mut self, factor: f64) {
        if factor == 0.0 {
            self.lo = 0.0;
            self.hi = 0.0;
            return;
        }

        let a = self.lo * factor;
        let b = self.hi * factor;
        self.lo = a.min(b);
        self.hi = a.max(b);
    }

    /// Returns `true` if `self` lies entirely and strictly below `other`.
    ///
    /// This is a disjointness test, not an ordering: intervals which overlap
    /// or touch are incomparable, and neither precedes the other. Do not use
    /// it as a sort comparator.
    ///
    /// Empty operands are not special-cased. With the `[+inf, -inf]` bounds
    /// of [`Interval::empty`] on either side, both `precedes` and `follows`
    /// hold. Other inverted bounds give whatever the comparison yields. Check
    /// [`Interval::is_empty`] first when that matters.
    ///
    /// ```rust
    /// # use ranged::Interval;
    /// let x = Interval::new(0.0, 2.0);
    /// assert!(x.precedes(Interval::new(3.0, 5.0)));
    /// assert!(!x.precedes(Interval::new(1.0, 3.0)));
    /// assert!(!x.precedes(Interval::new(2.0, 3.0)));
    /// ```
    pub fn precedes(&self, other: Self) -> bool {
        self.hi < other.lo
    }

    /// Returns `true` if `self` lies entirely and strictly above `other`.
    ///
    /// The counterpart of [`Interval::precedes`], with the same caveats.
    pub fn follows(&self, other: Self) -> bool {
        self.lo > other.hi
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}

impl BitOr for Interval {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Interval {
    fn bitor_assign(&mut self, rhs: Self) {
        self.union_with(rhs)
    }
}

impl BitAnd for Interval {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl BitAndAssign for Interval {
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersect_with(rhs)
    }
}

impl Mul<f64> for Interval {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Interval> for f64 {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Self::Output {
        rhs.scale(self)
    }
}

impl MulAssign<f64> for Interval {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_by(rhs)
    }
}

/// Grows the interval to the hull of the samples. NaN samples are ignored.
impl Extend<f64> for Interval {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        let mut skipped = 0usize;
        let samples = iter.into_iter().filter(|v| {
            if v.is_nan() {
                skipped += 1;
                false
            } else {
                true
            }
        });

        match samples.minmax() {
            MinMaxResult::NoElements => {}
            MinMaxResult::OneElement(v) => self.expand(v),
            MinMaxResult::MinMax(lo, hi) => self.union_with(Self::new(lo, hi)),
        }

        if skipped > 0 {
            tracing::debug!(skipped, "ignored NaN samples");
        }
    }
}

impl FromIterator<f64> for Interval {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        let mut result = Self::empty();
        result.extend(iter);
        result
    }
}

impl Extend<Interval> for Interval {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for other in iter {
            self.union_with(other);
        }
    }
}

impl FromIterator<Interval> for Interval {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut result = Self::empty();
        result.extend(iter);
        result
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

impl From<RangeInclusive<f64>> for Interval {
    fn from(range: RangeInclusive<f64>) -> Self {
        let (lo, hi) = range.into_inner();
        Self::new(lo, hi)
    }
}

impl From<Interval> for RangeInclusive<f64> {
    fn from(interval: Interval) -> Self {
        interval.lo..=interval.hi
    }
}

impl From<(f64, f64)> for Interval {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self::new(lo, hi)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.lo, interval.hi)
    }
}
