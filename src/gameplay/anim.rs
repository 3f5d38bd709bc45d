use crate::core::Role;
use crate::gameplay::{Powerup, Subrole};
use crate::math::Vector2;

/// Frames per second of multi-frame animations
pub const FRAME_RATE: f64 = 20.0;

/// Seconds a frame stays on screen before the next one
pub const FRAME_TIME: f64 = 5.0 / FRAME_RATE;

/// Where an animation lives on its sprite sheet and how to draw it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetEntry {
    /// Row and column of the first frame
    pub start: (u32, u32),

    /// Number of frames in the animation
    pub frames: u32,

    /// Draw scale
    pub scale: Vector2,

    /// Offset from the body's bounding box when drawing
    pub adjust: Vector2,
}

impl SheetEntry {
    const fn new(start: (u32, u32), frames: u32, scale: (f64, f64), adjust: (f64, f64)) -> Self {
        Self {
            start,
            frames,
            scale: Vector2::new(scale.0, scale.1),
            adjust: Vector2::new(adjust.0, adjust.1),
        }
    }
}

/// Animation state of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimState {
    PlayerIdleRight,
    PlayerIdleLeft,
    PlayerRunningRight,
    PlayerRunningLeft,
    PlayerJumpingRight,
    PlayerJumpingLeft,
    PlayerGroundpoundLeft,
    PlayerGroundpoundRight,
    GoombaWalking,
    GoombaSquashed,
    KoopaLeft,
    KoopaRight,
    KoopaShell,
    Token,
    Health,
    Fireball,
    BlockItem,
    BlockToken,
    BlockHealth,
    BlockStar,
    BlockFire,
    Background,
    Still,
}

impl AnimState {
    /// Initial state for a new sprite
    pub fn select(role: Role, subrole: Subrole) -> Self {
        if role == Role::Player {
            return AnimState::PlayerIdleRight;
        }
        match subrole {
            Subrole::Goomba => AnimState::GoombaWalking,
            Subrole::Koopa => AnimState::KoopaRight,
            Subrole::Powerup(Powerup::Health) => AnimState::Health,
            Subrole::Fireball => AnimState::Fireball,
            Subrole::ItemBlock(_) => AnimState::BlockItem,
            _ => match role {
                Role::Background => AnimState::Background,
                Role::Token => AnimState::Token,
                _ => AnimState::Still,
            },
        }
    }

    /// State of an item block after it released `powerup`
    pub fn spent_block(powerup: Powerup) -> Self {
        match powerup {
            Powerup::Health => AnimState::BlockHealth,
            Powerup::Star => AnimState::BlockStar,
            Powerup::Fire => AnimState::BlockFire,
            Powerup::Token => AnimState::BlockToken,
        }
    }

    pub fn is_groundpound(self) -> bool {
        matches!(self, AnimState::PlayerGroundpoundLeft | AnimState::PlayerGroundpoundRight)
    }

    pub fn sheet(self) -> SheetEntry {
        const PLAYER_SCALE: (f64, f64) = (1.5, 1.5);
        const PLAYER_ADJUST: (f64, f64) = (-10.0, -5.0);
        const BLOCK_SCALE: (f64, f64) = (2.4, 2.2);
        const BLOCK_ADJUST: (f64, f64) = (-17.0, -17.0);

        match self {
            AnimState::PlayerIdleRight => SheetEntry::new((0, 6), 1, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerIdleLeft => SheetEntry::new((0, 5), 1, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerRunningRight => SheetEntry::new((0, 7), 3, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerRunningLeft => SheetEntry::new((0, 2), 3, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerJumpingRight => SheetEntry::new((0, 11), 1, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerJumpingLeft => SheetEntry::new((0, 0), 1, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerGroundpoundLeft => SheetEntry::new((1, 0), 1, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::PlayerGroundpoundRight => SheetEntry::new((1, 11), 1, PLAYER_SCALE, PLAYER_ADJUST),
            AnimState::GoombaWalking => SheetEntry::new((0, 0), 2, (1.0, 1.0), (10.0, 5.0)),
            AnimState::GoombaSquashed => SheetEntry::new((0, 2), 1, (1.0, 1.0), (0.0, 10.0)),
            AnimState::KoopaLeft => SheetEntry::new((0, 5), 2, (1.0, 1.0), (0.0, 5.0)),
            AnimState::KoopaRight => SheetEntry::new((0, 7), 2, (1.0, 1.0), (0.0, 5.0)),
            AnimState::KoopaShell => SheetEntry::new((0, 12), 1, (1.0, 1.0), (-10.0, 10.0)),
            AnimState::Token => SheetEntry::new((0, 0), 1, (0.2, 0.2), (70.0, 90.0)),
            AnimState::Health => SheetEntry::new((0, 0), 1, (0.03, 0.03), (225.0, 220.0)),
            AnimState::Fireball => SheetEntry::new((0, 0), 1, (0.05, 0.05), (122.0, 120.0)),
            AnimState::BlockItem => SheetEntry::new((0, 0), 1, BLOCK_SCALE, BLOCK_ADJUST),
            AnimState::BlockToken => SheetEntry::new((0, 1), 1, BLOCK_SCALE, BLOCK_ADJUST),
            AnimState::BlockHealth => SheetEntry::new((0, 4), 1, BLOCK_SCALE, BLOCK_ADJUST),
            AnimState::BlockStar => SheetEntry::new((0, 2), 1, BLOCK_SCALE, BLOCK_ADJUST),
            AnimState::BlockFire => SheetEntry::new((0, 3), 1, BLOCK_SCALE, BLOCK_ADJUST),
            AnimState::Background => SheetEntry::new((0, 0), 1, (1.0, 1.0), (0.0, 0.0)),
            AnimState::Still => SheetEntry::new((0, 0), 1, (0.2, 0.2), (0.0, 0.0)),
        }
    }

    pub fn frames(self) -> u32 {
        self.sheet().frames
    }
}
