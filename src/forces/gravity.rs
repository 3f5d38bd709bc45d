use crate::forces::{Behavior, InteractionContext};
use crate::math::Vector2;
use std::any::Any;

/// Constant pull applied to a finite body attracted by an infinite one
pub const ANCHORED_PULL: Vector2 = Vector2::new(0.0, -1.0e4);

/// Inverse-square attraction between two bodies
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    /// The gravitational constant
    constant: f64,
}

impl NewtonianGravity {
    /// Creates a new gravity behavior with the given gravitational constant
    pub fn new(constant: f64) -> Self {
        Self { constant }
    }

    /// Gets the gravitational constant
    pub fn get_constant(&self) -> f64 {
        self.constant
    }

    /// Sets the gravitational constant
    pub fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
    }
}

impl Behavior for NewtonianGravity {
    fn behavior_type(&self) -> &'static str {
        "NewtonianGravity"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let m1 = ctx.body(0).get_mass();
        let m2 = ctx.body(1).get_mass();

        // An infinite mass would produce an infinite force; the other body just falls
        if m1.is_infinite() {
            if m2.is_finite() {
                ctx.body_mut(1).add_force(ANCHORED_PULL);
            }
            return;
        }
        if m2.is_infinite() {
            ctx.body_mut(0).add_force(ANCHORED_PULL);
            return;
        }

        let displacement = ctx.body(1).get_centroid() - ctx.body(0).get_centroid();
        let distance_squared = displacement.length_squared();
        if crate::math::approx_zero(distance_squared) {
            return;
        }

        // F = G * m1 * m2 / r^2, pulling the bodies toward each other
        let magnitude = self.constant * m1 * m2 / distance_squared;
        let force = displacement.normalize() * magnitude;

        ctx.body_mut(0).add_force(force);
        ctx.body_mut(1).add_force(-force);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
