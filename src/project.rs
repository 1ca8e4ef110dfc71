use glam::{DVec2, DVec3};

use crate::interval::Interval;

impl Interval {
    /// Returns the interval spanned by `point · axis` over all points.
    ///
    /// This is the shadow of the point set on the line through the origin
    /// along `axis`. The axis is not normalized, so the result is scaled by
    /// its length.
    ///
    /// A zero or non-finite axis, or no points, produces an empty interval.
    ///
    /// ```rust
    /// # use glam::DVec3;
    /// # use ranged::Interval;
    /// let points = [DVec3::new(1.0, 2.0, 0.0), DVec3::new(-3.0, 0.5, 4.0)];
    /// assert_eq!(Interval::project(points, DVec3::X), Interval::new(-3.0, 1.0));
    /// ```
    pub fn project<I>(points: I, axis: DVec3) -> Self
    where
        I: IntoIterator<Item = DVec3>,
    {
        if !axis.is_finite() || axis.length_squared() == 0.0 {
            tracing::debug!(?axis, "degenerate projection axis");
            return Self::empty();
        }

        points.into_iter().map(|p| p.dot(axis)).collect()
    }

    /// Planar counterpart of [`Interval::project`].
    pub fn project_2d<I>(points: I, axis: DVec2) -> Self
    where
        I: IntoIterator<Item = DVec2>,
    {
        if !axis.is_finite() || axis.length_squared() == 0.0 {
            tracing::debug!(?axis, "degenerate projection axis");
            return Self::empty();
        }

        points.into_iter().map(|p| p.dot(axis)).collect()
    }
}
