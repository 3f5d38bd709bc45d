use crate::forces::{Behavior, InteractionContext};
use std::any::Any;

/// A zero-rest-length spring between the centroids of two bodies
#[derive(Debug, Clone)]
pub struct Spring {
    /// The spring stiffness coefficient
    stiffness: f64,
}

impl Spring {
    /// Creates a new spring with the given stiffness
    pub fn new(stiffness: f64) -> Self {
        Self {
            stiffness: stiffness.max(0.0),
        }
    }

    /// Gets the spring stiffness coefficient
    pub fn get_stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Sets the spring stiffness coefficient
    pub fn set_stiffness(&mut self, stiffness: f64) {
        self.stiffness = stiffness.max(0.0);
    }
}

impl Behavior for Spring {
    fn behavior_type(&self) -> &'static str {
        "Spring"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        // Hooke's law with zero rest length: F = k * (c2 - c1) on the first body
        let displacement = ctx.body(1).get_centroid() - ctx.body(0).get_centroid();
        let force = displacement * self.stiffness;

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
