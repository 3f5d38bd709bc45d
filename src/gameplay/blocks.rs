use std::any::Any;
use crate::bodies::Contact;
use crate::core::{Role, SoundCue, TransitionRequest};
use crate::forces::{Behavior, InteractionContext};
use crate::gameplay::{rebound, sprite_of, sprite_of_mut, AnimState, Subrole, AXIS_THRESHOLD};
use crate::math::Vector2;

/// Clears the actor's contact sides once it leaves the block
fn release_contact(ctx: &mut InteractionContext<'_>) {
    if ctx.contact_state().end() {
        sprite_of_mut(ctx, 0).set_contact(Contact::empty());
    }
}

/// Bounces an enemy off the side of a block, away from the block's centroid.
///
/// Returns false if the actor is not an enemy or already bounced this contact.
fn bounce_enemy(ctx: &mut InteractionContext<'_>, overlap: f64, away: f64) -> bool {
    if sprite_of(ctx, 0).get_role() != Role::Enemy || ctx.is_colliding() {
        return false;
    }

    let push = overlap + ctx.config().min_overlap;
    ctx.body_mut(0).translate(Vector2::new(away * push, 0.0));
    let v = ctx.body(0).get_velocity();
    ctx.body_mut(0).set_velocity(Vector2::new(-v.x, 0.0));
    ctx.contact_state().begin();
    true
}

/// Solid ground and walls.
///
/// Pushes the actor back out along the collision axis, leaving `min_overlap`
/// of penetration so the contact persists, and records the contact side.
/// Enemies bounce off walls and fireballs bounce off floors but burn out on walls.
#[derive(Debug, Clone, Default)]
pub struct RegularBlock;

impl Behavior for RegularBlock {
    fn behavior_type(&self) -> &'static str {
        "RegularBlock"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let info = ctx.collision();
        if !info.collided {
            release_contact(ctx);
            return;
        }

        let min_overlap = ctx.config().min_overlap;
        let actor = ctx.body(0).get_centroid();
        let block = ctx.body(1).get_centroid();
        let (subrole, contact) = {
            let sprite = sprite_of(ctx, 0);
            (sprite.get_subrole(), sprite.get_contact())
        };

        if info.axis.y.abs() > AXIS_THRESHOLD {
            if subrole == Subrole::Fireball && !ctx.is_colliding() {
                rebound(ctx, &info, 1.0, true, false);
                ctx.body_mut(0).translate(Vector2::new(0.0, info.overlap + min_overlap));
                ctx.contact_state().begin();
                return;
            }

            let walls = contact & (Contact::LEFT | Contact::RIGHT);
            if actor.y > block.y {
                sprite_of_mut(ctx, 0).set_contact(walls | Contact::BELOW);
                ctx.body_mut(0).translate(Vector2::new(0.0, info.overlap - min_overlap));
            } else {
                sprite_of_mut(ctx, 0).set_contact(walls | Contact::ABOVE);
                ctx.body_mut(0).translate(Vector2::new(0.0, -(info.overlap - min_overlap)));
            }
        } else if info.axis.x.abs() > AXIS_THRESHOLD {
            if subrole == Subrole::Fireball {
                ctx.body_mut(0).remove();
                return;
            }

            let floors = contact & (Contact::ABOVE | Contact::BELOW);
            if actor.x > block.x {
                if bounce_enemy(ctx, info.overlap, 1.0) {
                    return;
                }
                sprite_of_mut(ctx, 0).set_contact(floors | Contact::LEFT);
                ctx.body_mut(0).translate(Vector2::new(info.overlap - min_overlap, 0.0));
            } else {
                if bounce_enemy(ctx, info.overlap, -1.0) {
                    return;
                }
                sprite_of_mut(ctx, 0).set_contact(floors | Contact::RIGHT);
                ctx.body_mut(0).translate(Vector2::new(-(info.overlap - min_overlap), 0.0));
            }
        }

        ctx.contact_state().begin();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A wall only enemies can see: they turn around at it, everything else passes through
#[derive(Debug, Clone, Default)]
pub struct InvisibleBlock;

impl Behavior for InvisibleBlock {
    fn behavior_type(&self) -> &'static str {
        "InvisibleBlock"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let info = ctx.collision();
        if !info.collided {
            release_contact(ctx);
            return;
        }

        if info.axis.x.abs() > AXIS_THRESHOLD {
            if sprite_of(ctx, 0).get_subrole() == Subrole::Fireball {
                ctx.body_mut(0).remove();
                return;
            }

            let away = if ctx.body(0).get_centroid().x > ctx.body(1).get_centroid().x { 1.0 } else { -1.0 };
            if bounce_enemy(ctx, info.overlap, away) {
                return;
            }
        }

        ctx.contact_state().begin();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Kills whatever touches it; non-players are removed outright
#[derive(Debug, Clone, Default)]
pub struct DeathBlock;

impl Behavior for DeathBlock {
    fn behavior_type(&self) -> &'static str {
        "DeathBlock"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if !ctx.collision().collided {
            return;
        }

        let victim = sprite_of_mut(ctx, 0);
        let before = victim.get_health();
        victim.drain_health();
        let died = before > 0 && victim.get_health() == 0;

        if victim.get_role() == Role::Player {
            if died {
                ctx.play(SoundCue::Death);
            }
        } else {
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

/// Sends the player to a sublevel when it enters from a permitted side.
///
/// Entering from the top requires a groundpound.
#[derive(Debug, Clone, Default)]
pub struct TunnelBlock;

impl Behavior for TunnelBlock {
    fn behavior_type(&self) -> &'static str {
        "TunnelBlock"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let info = ctx.collision();
        if !info.collided {
            release_contact(ctx);
            return;
        }

        let tunnel = match sprite_of(ctx, 1).get_tunnel() {
            Some(tunnel) => *tunnel,
            None => panic!("tunnel behavior bound to {:?}, which is not a tunnel block", ctx.handle(1)),
        };
        let player = ctx.body(0).get_centroid();
        let block = ctx.body(1).get_centroid();

        let enters = if info.axis.y.abs() > AXIS_THRESHOLD {
            if player.y > block.y {
                tunnel.top && sprite_of(ctx, 0).get_state().is_groundpound()
            } else {
                tunnel.bottom
            }
        } else if info.axis.x.abs() > AXIS_THRESHOLD {
            if player.x > block.x {
                tunnel.right
            } else {
                tunnel.left
            }
        } else {
            false
        };

        if enters {
            sprite_of_mut(ctx, 0).set_exit(tunnel.exit);
            ctx.request_transition(TransitionRequest {
                sublevel: tunnel.sublevel,
                exit: tunnel.exit,
            });
        }

        ctx.contact_state().begin();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Releases the block's item to the player once per game.
///
/// Triggered by jumping into the block from below, or by a groundpound
/// landing on it faster than 10 units per second.
#[derive(Debug, Clone, Default)]
pub struct ItemBlock;

impl Behavior for ItemBlock {
    fn behavior_type(&self) -> &'static str {
        "ItemBlock"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        // Never released, the block stays spent
        if ctx.is_colliding() {
            return;
        }

        let info = ctx.collision();
        if !info.collided || info.axis.y.abs() <= AXIS_THRESHOLD {
            return;
        }

        let item = match sprite_of(ctx, 1).get_item() {
            Some(item) => item,
            None => panic!("item behavior bound to {:?}, which holds no item", ctx.handle(1)),
        };

        let triggered = if sprite_of(ctx, 0).get_state().is_groundpound() {
            ctx.body(0).get_velocity().y < -10.0
        } else {
            ctx.body(0).get_centroid().y < ctx.body(1).get_centroid().y
        };
        if !triggered {
            return;
        }

        let cue = sprite_of_mut(ctx, 0).activate_powerup(item);
        ctx.play(cue);
        sprite_of_mut(ctx, 1).set_state(AnimState::spent_block(item));
        ctx.contact_state().begin();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
