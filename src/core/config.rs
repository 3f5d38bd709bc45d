use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Tunable constants for a scene and its gameplay behaviors
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Per-axis cap applied to every body's velocity after integration
    pub velocity_limit: Vector2,

    /// Vertical force applied by the gravity behavior
    pub gravity: f64,

    /// Penetration left in place when resolving platform contact
    pub min_overlap: f64,

    /// Ticks between patrol direction changes
    pub patrol_switch_ticks: u32,

    /// Ticks a squashed goomba stays visible before removal
    pub squash_ticks: u32,

    /// Ticks star mode lasts
    pub star_ticks: u32,

    /// Ticks before a fireball expires
    pub fireball_ticks: u32,

    /// Horizontal speed of a kicked koopa shell
    pub koopa_shell_speed: f64,

    /// Initial patrol velocity of enemies
    pub enemy_speed: Vector2,

    /// Initial patrol velocity of powerups
    pub powerup_speed: Vector2,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            velocity_limit: Vector2::new(150.0, 500.0),
            gravity: -1050.0,
            min_overlap: 0.1,
            patrol_switch_ticks: 500,
            squash_ticks: 200,
            star_ticks: 2000,
            fireball_ticks: 500,
            koopa_shell_speed: 100.0,
            enemy_speed: Vector2::new(20.0, 0.0),
            powerup_speed: Vector2::new(20.0, 0.0),
        }
    }
}
