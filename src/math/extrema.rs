use crate::math::{interval_overlap, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned extents of a shape, used by the broad phase
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Extrema {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extrema {
    /// Creates extrema from explicit bounds
    #[inline]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Creates extrema centered at `center` with the given half extent on both axes
    #[inline]
    pub fn around(center: Vector2, half_extent: f64) -> Self {
        Self::new(
            center.x - half_extent,
            center.x + half_extent,
            center.y - half_extent,
            center.y + half_extent,
        )
    }

    /// Scans a set of points for their bounds
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let first = points.first()?;
        let mut extrema = Self::new(first.x, first.x, first.y, first.y);

        for point in points.iter().skip(1) {
            extrema.min_x = extrema.min_x.min(point.x);
            extrema.max_x = extrema.max_x.max(point.x);
            extrema.min_y = extrema.min_y.min(point.y);
            extrema.max_y = extrema.max_y.max(point.y);
        }

        Some(extrema)
    }

    /// Shifts the bounds by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vector2) {
        self.min_x += delta.x;
        self.max_x += delta.x;
        self.min_y += delta.y;
        self.max_y += delta.y;
    }

    /// Signed overlap of the x ranges
    #[inline]
    pub fn overlap_x(&self, other: &Self) -> f64 {
        interval_overlap((self.min_x, self.max_x), (other.min_x, other.max_x))
    }

    /// Signed overlap of the y ranges
    #[inline]
    pub fn overlap_y(&self, other: &Self) -> f64 {
        interval_overlap((self.min_y, self.max_y), (other.min_y, other.max_y))
    }

    /// Returns true if both axes overlap by a strictly positive amount
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.overlap_x(other) > 0.0 && self.overlap_y(other) > 0.0
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center of the bounds
    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }
}
