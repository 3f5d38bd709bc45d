use crate::bodies::{Contact, RigidBody};
use crate::core::{BodyHandle, Scene, SoundCue};
use crate::error::PhysicsError;
use crate::gameplay::{add_fireball, AnimState, PowerMode, Sprite, FIREBALL_SPEED};
use crate::math::Vector2;
use crate::Result;

/// Upward impulse of a jump
pub const JUMP_IMPULSE: Vector2 = Vector2::new(0.0, 2000.0);

/// Downward impulse of a groundpound
pub const GROUNDPOUND_IMPULSE: Vector2 = Vector2::new(0.0, -1000.0);

/// Horizontal running speed
pub const MOVE_SPEED: f64 = 800.0;

/// Nudge that lifts a body clear of the surface it touches before it moves away
pub const CONTACT_BUMP: f64 = 2.0;

/// Input-level commands for a player body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    Jump,
    GroundPound,
    Fireball,
    /// A movement key was let go
    Release,
}

/// Applies `action` to the player body `player`.
///
/// Actions that are not possible right now (jumping in mid-air, throwing
/// fireballs without fire mode) are ignored.
pub fn apply_action(scene: &mut Scene, player: BodyHandle, action: PlayerAction) -> Result<()> {
    match action {
        PlayerAction::MoveLeft => run(scene.get_body_mut(player)?, -MOVE_SPEED),
        PlayerAction::MoveRight => run(scene.get_body_mut(player)?, MOVE_SPEED),
        PlayerAction::Jump => {
            if jump(scene.get_body_mut(player)?)? {
                scene.play(SoundCue::Jump);
            }
            Ok(())
        }
        PlayerAction::GroundPound => groundpound(scene.get_body_mut(player)?),
        PlayerAction::Fireball => throw_fireball(scene, player),
        PlayerAction::Release => {
            let body = scene.get_body_mut(player)?;
            let v = body.get_velocity();
            body.set_velocity(Vector2::new(0.0, v.y));
            Ok(())
        }
    }
}

fn player_sprite(body: &RigidBody) -> Result<&Sprite> {
    body.get_info::<Sprite>()
        .ok_or_else(|| PhysicsError::InvalidParameter("controlled body carries no sprite".to_string()))
}

fn player_sprite_mut(body: &mut RigidBody) -> Result<&mut Sprite> {
    body.get_info_mut::<Sprite>()
        .ok_or_else(|| PhysicsError::InvalidParameter("controlled body carries no sprite".to_string()))
}

fn run(body: &mut RigidBody, speed: f64) -> Result<()> {
    if player_sprite(body)?.is_immobilized() {
        return Ok(());
    }

    let contact = body.get_contact();
    if contact.contains(Contact::LEFT) && speed > 0.0 {
        body.translate(Vector2::new(CONTACT_BUMP, 0.0));
    }
    if contact.contains(Contact::RIGHT) && speed < 0.0 {
        body.translate(Vector2::new(-CONTACT_BUMP, 0.0));
    }

    let v = body.get_velocity();
    body.set_velocity(Vector2::new(speed, v.y));
    Ok(())
}

/// Returns true if the player left the ground
fn jump(body: &mut RigidBody) -> Result<bool> {
    if !body.get_contact().contains(Contact::BELOW) {
        return Ok(false);
    }

    let state = if body.get_velocity().x > 0.0 {
        AnimState::PlayerJumpingRight
    } else {
        AnimState::PlayerJumpingLeft
    };
    player_sprite_mut(body)?.set_state(state);

    body.translate(Vector2::new(0.0, CONTACT_BUMP));
    body.add_impulse(JUMP_IMPULSE);
    Ok(true)
}

fn groundpound(body: &mut RigidBody) -> Result<()> {
    let v = body.get_velocity();
    let airborne = !body.get_contact().contains(Contact::BELOW);
    let sprite = player_sprite_mut(body)?;

    let facing = match sprite.get_state() {
        _ if v.x > 0.0 => Some(AnimState::PlayerGroundpoundRight),
        _ if v.x < 0.0 => Some(AnimState::PlayerGroundpoundLeft),
        AnimState::PlayerIdleRight => Some(AnimState::PlayerGroundpoundRight),
        AnimState::PlayerIdleLeft => Some(AnimState::PlayerGroundpoundLeft),
        _ => None,
    };
    if let Some(state) = facing {
        if state != sprite.get_state() {
            sprite.set_state(state);
        }
    }

    if airborne {
        sprite.immobilize();
        body.add_impulse(GROUNDPOUND_IMPULSE);
    }
    Ok(())
}

/// Throws a fireball ahead of a player in fire mode
fn throw_fireball(scene: &mut Scene, player: BodyHandle) -> Result<()> {
    let body = scene.get_body(player)?;
    let sprite = player_sprite(body)?;
    if sprite.get_power_mode() != PowerMode::Fire {
        return Ok(());
    }

    let position = body.get_centroid();
    let v = body.get_velocity();
    let launch = if v.x > 0.0 {
        Some((12.5, FIREBALL_SPEED))
    } else if v.x < 0.0 {
        Some((-12.5, -FIREBALL_SPEED))
    } else {
        match sprite.get_state() {
            AnimState::PlayerIdleRight => Some((18.5, FIREBALL_SPEED)),
            AnimState::PlayerIdleLeft => Some((-18.5, -FIREBALL_SPEED)),
            _ => None,
        }
    };

    if let Some((offset, speed)) = launch {
        scene.play(SoundCue::Fireball);
        add_fireball(scene, position + Vector2::new(offset, 0.0), Vector2::new(speed, 0.0))?;
    }
    Ok(())
}
