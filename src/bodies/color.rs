#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// RGB color used when drawing a body, each channel in `0..=1`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Sky blue, used for moving game objects
    pub const BLUE: Self = Self { r: 0.52, g: 0.81, b: 0.98 };

    /// Orange, used for platforms
    pub const ORANGE: Self = Self { r: 1.0, g: 0.52, b: 0.0 };

    /// Creates a new color, clamping each channel into `0..=1`
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLUE
    }
}
