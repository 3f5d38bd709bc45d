use nalgebra as na;
use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A 2D vector used for positions, velocities, forces and impulses
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new 2D vector
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new 2D vector with all components set to zero
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the z-component of the cross product of two 2D vectors
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length of the vector
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction.
    ///
    /// A zero-length vector normalizes to the zero vector instead of NaN.
    #[inline]
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length > 0.0 {
            *self / length
        } else {
            Self::ZERO
        }
    }

    /// Returns true if the vector is approximately zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        crate::math::approx_zero(self.length_squared())
    }

    /// Returns the perpendicular `(y, -x)`
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotates the vector by `angle` radians counter-clockwise about `pivot`
    #[inline]
    pub fn rotate(&self, angle: f64, pivot: Vector2) -> Self {
        let rotation = na::Rotation2::new(angle);
        Self::rotate_with(&rotation, *self, pivot)
    }

    /// Rotates `point` about `pivot` with a precomputed rotation
    #[inline]
    pub(crate) fn rotate_with(rotation: &na::Rotation2<f64>, point: Vector2, pivot: Vector2) -> Self {
        let local = (point - pivot).to_nalgebra();
        Self::from_nalgebra(&(rotation * local)) + pivot
    }

    /// Distance between two vectors
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Returns true if both components differ by less than `EPSILON`
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        crate::math::approx_eq(self.x, other.x) && crate::math::approx_eq(self.y, other.y)
    }

    /// Convert to nalgebra Vector2
    #[inline]
    pub fn to_nalgebra(&self) -> na::Vector2<f64> {
        na::Vector2::new(self.x, self.y)
    }

    /// Convert from nalgebra Vector2
    #[inline]
    pub fn from_nalgebra(v: &na::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from(array: [f64; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self * rhs.x, self * rhs.y)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}
