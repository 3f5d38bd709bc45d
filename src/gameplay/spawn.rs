//! Level population: constructors for every kind of game object and the
//! wiring that binds them together with behaviors.

use crate::bodies::{Color, RigidBody};
use crate::core::{BodyHandle, Marker, Role, Scene};
use crate::error::PhysicsError;
use crate::gameplay::{
    DeathBlock, Fireball, Gravity, Goomba, InvisibleBlock, ItemBlock, Koopa, KoopaVsEnemy, Lifetime, Patrol,
    PlayerAnimation, Powerup, RegularBlock, Sprite, StarTimer, Subrole, TokenPickup, TunnelBlock,
};
use crate::math::Vector2;
use crate::shapes::Shape;
use crate::Result;

pub const PLAYER_MASS: f64 = 10.0;
pub const PLAYER_SIZE: Vector2 = Vector2::new(25.0, 28.0);
pub const PLAYER_HEALTH: u32 = 3;

pub const ENEMY_MASS: f64 = 10.0;
pub const KOOPA_SIZE: f64 = 15.0;
pub const ENEMY_SIZE: f64 = 10.0;

pub const FIREBALL_MASS: f64 = 10.0;
pub const FIREBALL_SIZE: f64 = 5.0;
pub const FIREBALL_SPEED: f64 = 40.0;

pub const TOKEN_MASS: f64 = 10.0;
pub const TOKEN_SIZE: f64 = 10.0;

pub const PLATFORM_MASS: f64 = f64::INFINITY;

pub const POWERUP_MASS: f64 = 10.0;
pub const POWERUP_SIZE: Vector2 = Vector2::new(10.0, 15.0);

/// Thickness of the level borders
pub const BORDER_THICKNESS: f64 = 30.0;

/// Adds a player centered on `position`; `slot` is `Subrole::Player1` or `Subrole::Player2`
pub fn add_player(scene: &mut Scene, position: Vector2, slot: Subrole) -> Result<BodyHandle> {
    let shape = Shape::rectangle(Vector2::ZERO, PLAYER_SIZE)?;
    let sprite = Sprite::new(Role::Player, slot, PLAYER_HEALTH);
    let mut body = RigidBody::with_info(shape, PLAYER_MASS, Color::BLUE, sprite)?;
    body.set_centroid(position);
    Ok(scene.add_body(Role::Player, body))
}

/// Adds a goomba or koopa centered on `position`
pub fn add_enemy(scene: &mut Scene, position: Vector2, subrole: Subrole) -> Result<BodyHandle> {
    let radius = if subrole == Subrole::Koopa { KOOPA_SIZE } else { ENEMY_SIZE };
    let shape = Shape::circle(position, radius)?;
    let body = RigidBody::with_info(shape, ENEMY_MASS, Color::BLUE, Sprite::new(Role::Enemy, subrole, 1))?;
    Ok(scene.add_body(Role::Enemy, body))
}

pub fn add_token(scene: &mut Scene, position: Vector2) -> Result<BodyHandle> {
    let shape = Shape::circle(position, TOKEN_SIZE)?;
    let body = RigidBody::with_info(shape, TOKEN_MASS, Color::BLUE, Sprite::new(Role::Token, Subrole::None, 1))?;
    Ok(scene.add_body(Role::Token, body))
}

pub fn add_powerup(scene: &mut Scene, position: Vector2, powerup: Powerup) -> Result<BodyHandle> {
    let shape = Shape::rectangle(Vector2::ZERO, POWERUP_SIZE)?;
    let sprite = Sprite::new(Role::Powerup, Subrole::Powerup(powerup), 0);
    let mut body = RigidBody::with_info(shape, POWERUP_MASS, Color::BLUE, sprite)?;
    body.set_centroid(position);
    Ok(scene.add_body(Role::Powerup, body))
}

/// Launches a fireball mid-game and binds it to every enemy and platform already in the scene
pub fn add_fireball(scene: &mut Scene, position: Vector2, velocity: Vector2) -> Result<BodyHandle> {
    let shape = Shape::circle(position, FIREBALL_SIZE)?;
    let mut body = RigidBody::with_info(shape, FIREBALL_MASS, Color::BLUE, Sprite::new(Role::Enemy, Subrole::Fireball, 1))?;
    body.set_velocity(velocity);

    let enemies = scene.bodies_in(Role::Enemy).to_vec();
    let fireball = scene.add_body(Role::Enemy, body);

    for enemy in enemies {
        if subrole_of(scene, enemy)? != Subrole::Fireball {
            scene.add_interaction(vec![enemy, fireball], Fireball)?;
        }
    }
    scene.add_interaction(vec![fireball], Lifetime::new())?;
    platform_interactions(scene, fireball)?;

    Ok(fireball)
}

/// Adds a platform of `size` centered on `position`.
///
/// Item and tunnel blocks are backed by a regular block of the same geometry so
/// they stay solid.
pub fn add_platform(scene: &mut Scene, position: Vector2, size: Vector2, subrole: Subrole) -> Result<BodyHandle> {
    let handle = scene.add_body(Role::Platform, platform_body(Shape::rectangle(Vector2::ZERO, size)?, position, subrole)?);
    if needs_backing(subrole) {
        let backing = platform_body(Shape::rectangle(Vector2::ZERO, size)?, position, Subrole::RegularBlock)?;
        scene.add_body(Role::Platform, backing);
    }
    Ok(handle)
}

/// Adds a platform spanning the corners `p1` and `p2`.
///
/// The backing block of item and tunnel blocks is inset by one unit.
pub fn add_platform_corners(scene: &mut Scene, p1: Vector2, p2: Vector2, subrole: Subrole) -> Result<BodyHandle> {
    let shape = Shape::rectangle(p1, p2)?;
    let centroid = shape.get_centroid();
    let handle = scene.add_body(Role::Platform, platform_body(shape, centroid, subrole)?);
    if needs_backing(subrole) {
        let inset = Vector2::new(1.0, 1.0);
        let shape = Shape::rectangle(p1 + inset, p2 - inset)?;
        let centroid = shape.get_centroid();
        scene.add_body(Role::Platform, platform_body(shape, centroid, Subrole::RegularBlock)?);
    }
    Ok(handle)
}

/// Adds a backdrop anchored at the origin
pub fn add_background(scene: &mut Scene, size: Vector2, subrole: Subrole) -> Result<BodyHandle> {
    let shape = Shape::rectangle(Vector2::ZERO, size)?;
    let body = RigidBody::with_info(shape, PLATFORM_MASS, Color::BLUE, Sprite::new(Role::Background, subrole, 0))?;
    Ok(scene.add_body(Role::Background, body))
}

/// Encloses a level spanning `(0, 0)` to `max` with a kill floor, a roof and two walls.
///
/// Each border is marked so cameras and level code can find it by name.
pub fn add_borders(scene: &mut Scene, max: Vector2) -> Result<()> {
    let horizontal = Vector2::new(max.x, BORDER_THICKNESS);
    let vertical = Vector2::new(BORDER_THICKNESS, max.y);

    let floor = add_platform(scene, Vector2::new(max.x / 2.0, -BORDER_THICKNESS / 2.0), horizontal, Subrole::DeathBlock)?;
    let roof = add_platform(scene, Vector2::new(max.x / 2.0, max.y), horizontal, Subrole::RegularBlock)?;
    let left = add_platform(scene, Vector2::new(0.0, max.y / 2.0), vertical, Subrole::RegularBlock)?;
    let right = add_platform(scene, Vector2::new(max.x, max.y / 2.0), vertical, Subrole::RegularBlock)?;

    scene.mark(Marker::Floor, floor)?;
    scene.mark(Marker::Roof, roof)?;
    scene.mark(Marker::LeftWall, left)?;
    scene.mark(Marker::RightWall, right)?;
    Ok(())
}

/// Binds every behavior a freshly populated level needs.
///
/// Call once after the level is populated and before the first tick.
pub fn wire_interactions(scene: &mut Scene) -> Result<()> {
    let players = scene.bodies_in(Role::Player).to_vec();
    let enemies = scene.bodies_in(Role::Enemy).to_vec();
    let tokens = scene.bodies_in(Role::Token).to_vec();
    let powerups = scene.bodies_in(Role::Powerup).to_vec();

    let mut enemy_kinds = Vec::with_capacity(enemies.len());
    for &enemy in &enemies {
        enemy_kinds.push((enemy, subrole_of(scene, enemy)?));
    }

    for &player in &players {
        scene.add_interaction(vec![player], PlayerAnimation)?;
        scene.add_interaction(vec![player], StarTimer::new())?;

        for &(enemy, kind) in &enemy_kinds {
            match kind {
                Subrole::Goomba => {
                    scene.add_interaction(vec![player, enemy], Goomba::new())?;
                }
                Subrole::Koopa => {
                    scene.add_interaction(vec![player, enemy], Koopa::new())?;
                }
                _ => {}
            }
        }

        for &token in &tokens {
            scene.add_interaction(vec![player, token], TokenPickup)?;
        }
    }

    let enemy_speed = scene.get_config().enemy_speed;
    for &(enemy, kind) in &enemy_kinds {
        platform_interactions(scene, enemy)?;

        if kind == Subrole::Koopa {
            scene.get_body_mut(enemy)?.set_velocity(enemy_speed);
            for &(other, _) in enemy_kinds.iter().filter(|(other, _)| *other != enemy) {
                scene.add_interaction(vec![other, enemy], KoopaVsEnemy)?;
            }
        } else {
            scene.get_body_mut(enemy)?.set_velocity(-enemy_speed);
            scene.add_interaction(vec![enemy], Patrol::new())?;
        }
    }

    let powerup_speed = scene.get_config().powerup_speed;
    for &powerup in &powerups {
        platform_interactions(scene, powerup)?;
        scene.get_body_mut(powerup)?.set_velocity(-powerup_speed);
        scene.add_interaction(vec![powerup], Patrol::new())?;
    }

    for &player in &players {
        platform_interactions(scene, player)?;
    }

    log::debug!(
        "wired {} players, {} enemies, {} tokens and {} powerups into {} interactions",
        players.len(),
        enemies.len(),
        tokens.len(),
        powerups.len(),
        scene.interaction_count()
    );
    Ok(())
}

/// Binds gravity and the matching block behavior of every platform to `body`
pub fn platform_interactions(scene: &mut Scene, body: BodyHandle) -> Result<()> {
    if scene.role_len(Role::Platform) == 0 {
        return Ok(());
    }

    let actor = role_of(scene, body)?;
    let gravity = scene.get_config().gravity;
    scene.add_interaction(vec![body], Gravity::new(gravity))?;

    for platform in scene.bodies_in(Role::Platform).to_vec() {
        match subrole_of(scene, platform)? {
            Subrole::RegularBlock => {
                scene.add_interaction(vec![body, platform], RegularBlock)?;
            }
            Subrole::DeathBlock => {
                scene.add_interaction(vec![body, platform], DeathBlock)?;
            }
            Subrole::TunnelBlock(_) if actor == Role::Player => {
                scene.add_interaction(vec![body, platform], TunnelBlock)?;
            }
            Subrole::ItemBlock(_) if actor == Role::Player => {
                scene.add_interaction(vec![body, platform], ItemBlock)?;
            }
            Subrole::InvisibleBlock if actor == Role::Enemy => {
                scene.add_interaction(vec![body, platform], InvisibleBlock)?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn platform_body(shape: Shape, position: Vector2, subrole: Subrole) -> Result<RigidBody> {
    let mut body = RigidBody::with_info(shape, PLATFORM_MASS, Color::ORANGE, Sprite::new(Role::Platform, subrole, 0))?;
    body.set_centroid(position);
    Ok(body)
}

fn needs_backing(subrole: Subrole) -> bool {
    matches!(subrole, Subrole::ItemBlock(_) | Subrole::TunnelBlock(_))
}

fn sprite_in(scene: &Scene, handle: BodyHandle) -> Result<&Sprite> {
    scene
        .get_body(handle)?
        .get_info::<Sprite>()
        .ok_or_else(|| PhysicsError::InvalidParameter(format!("Body with handle {:?} carries no sprite", handle)))
}

fn subrole_of(scene: &Scene, handle: BodyHandle) -> Result<Subrole> {
    sprite_in(scene, handle).map(Sprite::get_subrole)
}

fn role_of(scene: &Scene, handle: BodyHandle) -> Result<Role> {
    sprite_in(scene, handle).map(Sprite::get_role)
}
