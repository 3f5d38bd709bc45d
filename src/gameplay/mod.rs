//! Platformer rules expressed as behaviors, plus the sprite payload they read.
//!
//! Behaviors bound to two bodies take the actor (player, enemy, fireball)
//! first and the thing it meets second.

pub mod anim;
mod sprite;
mod movement;
mod player;
mod enemies;
mod blocks;
mod spawn;
mod controls;

pub use self::anim::{AnimState, SheetEntry};
pub use self::sprite::{PowerMode, Powerup, Sprite, Subrole, Tunnel, IMMOBILIZATION_LIMIT, IMMOBILIZATION_TICK};
pub use self::movement::{rebound, Gravity, Patrol};
pub use self::player::{PlayerAnimation, StarTimer, TokenPickup};
pub use self::enemies::{Fireball, Goomba, Koopa, KoopaVsEnemy, Lifetime};
pub use self::blocks::{DeathBlock, InvisibleBlock, ItemBlock, RegularBlock, TunnelBlock};
pub use self::spawn::*;
pub use self::controls::{apply_action, PlayerAction};

use crate::forces::InteractionContext;

/// Smallest axis component treated as a hit from that direction
pub const AXIS_THRESHOLD: f64 = 0.1;

/// Sprite of the `index`-th bound body.
///
/// # Panics
///
/// Panics if the body carries no sprite.
pub(crate) fn sprite_of<'c>(ctx: &'c InteractionContext<'_>, index: usize) -> &'c Sprite {
    let handle = ctx.handle(index);
    match ctx.body(index).get_info::<Sprite>() {
        Some(sprite) => sprite,
        None => panic!("body {:?} carries no sprite", handle),
    }
}

/// Mutable sprite of the `index`-th bound body.
///
/// # Panics
///
/// Panics if the body carries no sprite.
pub(crate) fn sprite_of_mut<'c>(ctx: &'c mut InteractionContext<'_>, index: usize) -> &'c mut Sprite {
    let handle = ctx.handle(index);
    match ctx.body_mut(index).get_info_mut::<Sprite>() {
        Some(sprite) => sprite,
        None => panic!("body {:?} carries no sprite", handle),
    }
}
