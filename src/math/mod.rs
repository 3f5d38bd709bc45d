mod vector;
mod extrema;
pub mod polygon;

pub use vector::Vector2;
pub use extrema::Extrema;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Signed overlap of two closed intervals `(min, max)`.
///
/// Zero or negative means the intervals are disjoint or only touch.
#[inline]
pub fn interval_overlap(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.1.min(b.1) - a.0.max(b.0)
}
