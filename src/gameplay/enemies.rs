use std::any::Any;
use crate::core::Role;
use crate::forces::{Behavior, InteractionContext};
use crate::gameplay::{rebound, sprite_of, sprite_of_mut, AnimState, AXIS_THRESHOLD};
use crate::math::Vector2;

/// Player against goomba: a stomp squashes it, a side hit hurts the player.
///
/// A squashed goomba stops, shows its squashed frame and is removed once the
/// squash counter reaches `squash_ticks`.
#[derive(Debug, Clone, Default)]
pub struct Goomba {
    squashed: u32,
}

impl Goomba {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks since the goomba was stomped, zero while it is alive
    pub fn get_squashed(&self) -> u32 {
        self.squashed
    }
}

impl Behavior for Goomba {
    fn behavior_type(&self) -> &'static str {
        "Goomba"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if self.squashed >= 1 {
            self.squashed += 1;
            ctx.body_mut(1).set_velocity(Vector2::ZERO);
            sprite_of_mut(ctx, 1).set_state(AnimState::GoombaSquashed);
            if self.squashed >= ctx.config().squash_ticks {
                ctx.body_mut(1).remove();
            }
            return;
        }

        let info = ctx.collision();
        if ctx.is_colliding() {
            if !info.collided {
                ctx.contact_state().end();
            }
            return;
        }
        if !info.collided {
            return;
        }

        if sprite_of(ctx, 0).is_star() {
            ctx.body_mut(1).remove();
            return;
        }

        let player_above = ctx.body(0).get_centroid().y > ctx.body(1).get_centroid().y;
        if info.axis.y.abs() > AXIS_THRESHOLD && player_above {
            self.squashed += 1;
            sprite_of_mut(ctx, 0).add_kill();
            ctx.contact_state().begin();
        } else if info.axis.x.abs() > AXIS_THRESHOLD {
            sprite_of_mut(ctx, 0).lower_health();
            ctx.contact_state().begin();
            rebound(ctx, &info, 1.0, true, false);

            let v = ctx.body(1).get_velocity();
            ctx.body_mut(1).set_velocity(Vector2::new(-v.x, 0.0));
            ctx.body_mut(0).translate(Vector2::new(-info.overlap_vector.x, 0.0));
            sprite_of_mut(ctx, 0).immobilize();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Player against koopa.
///
/// Every stomp counts a hit: odd hits pull the koopa into its shell and stop it,
/// even hits kick the shell away from the player at `koopa_shell_speed`.
#[derive(Debug, Clone, Default)]
pub struct Koopa {
    hits: u32,
}

impl Koopa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_hits(&self) -> u32 {
        self.hits
    }
}

impl Behavior for Koopa {
    fn behavior_type(&self) -> &'static str {
        "Koopa"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let v = ctx.body(1).get_velocity();
        let koopa = sprite_of_mut(ctx, 1);
        match koopa.get_state() {
            AnimState::KoopaShell => {}
            AnimState::KoopaRight if v.x > 0.0 => {}
            AnimState::KoopaLeft if v.x < 0.0 => {}
            _ if v.x > 0.0 => koopa.set_state(AnimState::KoopaRight),
            _ if v.x < 0.0 => koopa.set_state(AnimState::KoopaLeft),
            _ => {}
        }

        let info = ctx.collision();
        if ctx.is_colliding() {
            if !info.collided {
                ctx.contact_state().end();
            }
            return;
        }
        if !info.collided {
            return;
        }

        if sprite_of(ctx, 0).is_star() {
            ctx.body_mut(1).remove();
            return;
        }

        let player = ctx.body(0).get_centroid();
        let shell = ctx.body(1).get_centroid();
        if info.axis.y.abs() > AXIS_THRESHOLD && player.y > shell.y {
            self.hits += 1;
            if self.hits % 2 == 1 {
                sprite_of_mut(ctx, 1).set_state(AnimState::KoopaShell);
                ctx.body_mut(1).set_velocity(Vector2::ZERO);
            } else {
                let speed = ctx.config().koopa_shell_speed;
                let direction = if player.x > shell.x { -speed } else { speed };
                ctx.body_mut(1).set_velocity(Vector2::new(direction, 0.0));
            }

            rebound(ctx, &info, 1.0, true, false);
            ctx.contact_state().begin();
        } else if info.axis.x.abs() > AXIS_THRESHOLD {
            ctx.contact_state().begin();
            sprite_of_mut(ctx, 0).lower_health();
            rebound(ctx, &info, 1.0, true, false);

            let v = ctx.body(1).get_velocity();
            ctx.body_mut(1).set_velocity(Vector2::new(-v.x, v.y));
            sprite_of_mut(ctx, 0).immobilize();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A koopa shell knocking out another enemy; bound as (enemy, koopa)
#[derive(Debug, Clone, Default)]
pub struct KoopaVsEnemy;

impl Behavior for KoopaVsEnemy {
    fn behavior_type(&self) -> &'static str {
        "KoopaVsEnemy"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let info = ctx.collision();
        if ctx.is_colliding() {
            if !info.collided {
                ctx.contact_state().end();
            }
            return;
        }
        if !info.collided || sprite_of(ctx, 1).get_state() != AnimState::KoopaShell {
            return;
        }

        let enemy_below = ctx.body(0).get_centroid().y < ctx.body(1).get_centroid().y;
        if (info.axis.y.abs() > AXIS_THRESHOLD && enemy_below) || info.axis.x.abs() > AXIS_THRESHOLD {
            ctx.body_mut(0).remove();
            ctx.contact_state().begin();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A fireball burning an enemy; bound as (enemy, fireball)
#[derive(Debug, Clone, Default)]
pub struct Fireball;

impl Behavior for Fireball {
    fn behavior_type(&self) -> &'static str {
        "Fireball"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if !ctx.collision().collided {
            return;
        }

        let enemy = sprite_of_mut(ctx, 0);
        enemy.drain_health();
        if enemy.get_role() != Role::Player {
            ctx.body_mut(0).remove();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Removes a body once it has existed for `fireball_ticks` ticks
#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    ticks: u32,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_ticks(&self) -> u32 {
        self.ticks
    }
}

impl Behavior for Lifetime {
    fn behavior_type(&self) -> &'static str {
        "Lifetime"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if self.ticks >= ctx.config().fireball_ticks {
            ctx.body_mut(0).remove();
        }
        self.ticks += 1;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
