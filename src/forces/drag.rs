use crate::forces::{Behavior, InteractionContext};
use std::any::Any;

/// Linear drag opposing a single body's velocity
#[derive(Debug, Clone)]
pub struct Drag {
    /// Drag coefficient
    coefficient: f64,
}

impl Drag {
    /// Creates a new drag behavior with the given coefficient
    pub fn new(coefficient: f64) -> Self {
        Self {
            coefficient: coefficient.max(0.0),
        }
    }

    /// Gets the drag coefficient
    pub fn get_coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Sets the drag coefficient
    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient.max(0.0);
    }
}

impl Behavior for Drag {
    fn behavior_type(&self) -> &'static str {
        "Drag"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let velocity = ctx.body(0).get_velocity();
        let force = -velocity.normalize() * (self.coefficient * velocity.length());
        ctx.body_mut(0).add_force(force);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
