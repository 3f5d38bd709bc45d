use std::any::Any;
use crate::bodies::Contact;
use crate::collision::CollisionInfo;
use crate::forces::{elastic_impulse, Behavior, InteractionContext};
use crate::math::Vector2;

/// Elastic bounce between the two bound bodies.
///
/// Downward impulses are dropped so a bounce can never push a body into the
/// floor.
pub fn rebound(ctx: &mut InteractionContext<'_>, info: &CollisionInfo, elasticity: f64, apply_first: bool, apply_second: bool) {
    let mut impulse = elastic_impulse(ctx.body(0), ctx.body(1), info, elasticity);
    if impulse.y < 0.0 {
        impulse.y = 0.0;
    }

    if apply_first {
        ctx.body_mut(0).add_impulse(-impulse);
    }
    if apply_second {
        ctx.body_mut(1).add_impulse(impulse);
    }
}

/// Constant downward pull on a body that is not standing on anything
#[derive(Debug, Clone)]
pub struct Gravity {
    /// Vertical force, negative for down
    force: f64,
}

impl Gravity {
    pub fn new(force: f64) -> Self {
        Self { force }
    }

    pub fn get_force(&self) -> f64 {
        self.force
    }
}

impl Behavior for Gravity {
    fn behavior_type(&self) -> &'static str {
        "Gravity"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if ctx.body(0).get_contact().contains(Contact::BELOW) {
            return;
        }
        ctx.body_mut(0).add_force(Vector2::new(0.0, self.force));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Walks a body back and forth by flipping its horizontal velocity on a fixed tick count
#[derive(Debug, Clone, Default)]
pub struct Patrol {
    ticks: u32,
}

impl Patrol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks since the last turn
    pub fn get_ticks(&self) -> u32 {
        self.ticks
    }
}

impl Behavior for Patrol {
    fn behavior_type(&self) -> &'static str {
        "Patrol"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        self.ticks += 1;
        if self.ticks > ctx.config().patrol_switch_ticks {
            let v = ctx.body(0).get_velocity();
            ctx.body_mut(0).set_velocity(Vector2::new(-v.x, 0.0));
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
