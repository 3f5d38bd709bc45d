use std::any::Any;
use crate::bodies::Contact;
use crate::core::SoundCue;
use crate::forces::{Behavior, InteractionContext};
use crate::gameplay::{sprite_of, sprite_of_mut, AnimState, PowerMode};

/// Collects a token the first time the player touches it
#[derive(Debug, Clone, Default)]
pub struct TokenPickup;

impl Behavior for TokenPickup {
    fn behavior_type(&self) -> &'static str {
        "TokenPickup"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if ctx.is_colliding() || !ctx.collision().collided {
            return;
        }

        ctx.contact_state().begin();
        sprite_of_mut(ctx, 0).add_token();
        ctx.play(SoundCue::Token);
        ctx.body_mut(1).remove();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Ends star mode after a fixed number of ticks
#[derive(Debug, Clone, Default)]
pub struct StarTimer {
    ticks: u32,
}

impl StarTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks spent in the current star mode
    pub fn get_ticks(&self) -> u32 {
        self.ticks
    }
}

impl Behavior for StarTimer {
    fn behavior_type(&self) -> &'static str {
        "StarTimer"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if !sprite_of(ctx, 0).is_star() {
            return;
        }

        self.ticks += 1;
        if self.ticks >= ctx.config().star_ticks {
            sprite_of_mut(ctx, 0).set_power_mode(PowerMode::Normal);
            self.ticks = 0;
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Picks the player's idle, running or jumping animation from its motion
#[derive(Debug, Clone, Default)]
pub struct PlayerAnimation;

impl Behavior for PlayerAnimation {
    fn behavior_type(&self) -> &'static str {
        "PlayerAnimation"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let v = ctx.body(0).get_velocity();
        let sprite = sprite_of_mut(ctx, 0);
        let state = sprite.get_state();

        let next = if v.x == 0.0 {
            match state {
                AnimState::PlayerRunningRight | AnimState::PlayerJumpingRight => AnimState::PlayerIdleRight,
                AnimState::PlayerRunningLeft | AnimState::PlayerJumpingLeft => AnimState::PlayerIdleLeft,
                other => other,
            }
        } else if !sprite.get_contact().contains(Contact::BELOW) {
            if v.x > 0.0 {
                AnimState::PlayerJumpingRight
            } else {
                AnimState::PlayerJumpingLeft
            }
        } else if v.x > 0.0 {
            AnimState::PlayerRunningRight
        } else {
            AnimState::PlayerRunningLeft
        };

        if next != state {
            sprite.set_state(next);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
