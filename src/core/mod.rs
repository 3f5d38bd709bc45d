pub mod scene;
pub mod config;
pub mod storage;
pub mod events;

pub use self::scene::Scene;
pub use self::config::SceneConfig;
pub use self::storage::BodyStorage;
pub use self::events::{EventQueue, GameEvent, SoundCue};

use crate::math::Vector2;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for an interaction in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionHandle(pub(crate) u32);

/// Coarse category of a body.
///
/// Buckets are ticked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Background,
    Platform,
    Powerup,
    Token,
    Enemy,
    Player,
}

impl Role {
    /// Number of roles
    pub const COUNT: usize = 6;

    /// Every role in tick order
    pub const ALL: [Role; Role::COUNT] = [
        Role::Background,
        Role::Platform,
        Role::Powerup,
        Role::Token,
        Role::Enemy,
        Role::Player,
    ];

    /// Position of the role's bucket
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Role::Background => "background",
            Role::Platform => "platform",
            Role::Powerup => "powerup",
            Role::Token => "token",
            Role::Enemy => "enemy",
            Role::Player => "player",
        };
        f.write_str(name)
    }
}

/// Named bodies that level code and cameras look up directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The kill floor under the level
    Floor,
    /// The ceiling of the level
    Roof,
    /// The wall at the start of the level
    LeftWall,
    /// The wall at the end of the level
    RightWall,
}

/// Identifier of a sublevel a tunnel leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SublevelId(pub u32);

/// A request, produced during a tick, for the level loader to swap scenes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TransitionRequest {
    /// The sublevel to load
    pub sublevel: SublevelId,

    /// Where the player should appear in the new scene
    pub exit: Vector2,
}
