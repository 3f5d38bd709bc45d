use crate::bodies::RigidBody;
use crate::collision::CollisionInfo;
use crate::core::{BodyHandle, BodyStorage};
use crate::forces::{Behavior, InteractionContext};
use crate::math::Vector2;
use std::any::Any;

/// Effective mass of a two-body collision.
///
/// Degenerates to the finite mass when the other is infinite, and is infinite
/// when both are.
pub fn reduced_mass(m1: f64, m2: f64) -> f64 {
    match (m1.is_infinite(), m2.is_infinite()) {
        (true, true) => f64::INFINITY,
        (true, false) => m2,
        (false, true) => m1,
        (false, false) => m1 * m2 / (m1 + m2),
    }
}

/// Impulse exchanged by two bodies in an elastic collision along `info.axis`.
///
/// The returned impulse acts on the second body; the first receives its negation.
/// Two infinite masses exchange nothing.
pub fn elastic_impulse(body1: &RigidBody, body2: &RigidBody, info: &CollisionInfo, elasticity: f64) -> Vector2 {
    let m_reduced = reduced_mass(body1.get_mass(), body2.get_mass());
    if m_reduced.is_infinite() {
        return Vector2::ZERO;
    }

    let v1 = body1.get_velocity().dot(&info.axis);
    let v2 = body2.get_velocity().dot(&info.axis);
    info.axis * (m_reduced * (1.0 + elasticity) * (v1 - v2))
}

/// Queues the elastic collision impulse on either or both bodies
pub fn resolve_elastic(
    bodies: &mut BodyStorage<RigidBody>,
    first: BodyHandle,
    second: BodyHandle,
    info: &CollisionInfo,
    elasticity: f64,
    apply_first: bool,
    apply_second: bool,
) {
    let impulse = elastic_impulse(&bodies[first], &bodies[second], info, elasticity);

    if apply_first {
        bodies[first].add_impulse(-impulse);
    }
    if apply_second {
        bodies[second].add_impulse(impulse);
    }
}

/// Bounces two bodies apart once per contact
#[derive(Debug, Clone)]
pub struct PhysicsCollision {
    /// Coefficient of restitution, 0 for perfectly inelastic and 1 for elastic
    elasticity: f64,
}

impl PhysicsCollision {
    /// Creates a new collision response with the given elasticity
    pub fn new(elasticity: f64) -> Self {
        Self {
            elasticity: elasticity.max(0.0),
        }
    }

    pub fn get_elasticity(&self) -> f64 {
        self.elasticity
    }
}

impl Behavior for PhysicsCollision {
    fn behavior_type(&self) -> &'static str {
        "PhysicsCollision"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        let info = ctx.collision();

        if !info.collided {
            ctx.contact_state().end();
            return;
        }
        if !ctx.contact_state().begin() {
            return;
        }

        let (first, second) = (ctx.handle(0), ctx.handle(1));
        resolve_elastic(ctx.bodies_mut(), first, second, &info, self.elasticity, true, true);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Removes both bodies the first time they overlap
#[derive(Debug, Clone, Default)]
pub struct DestructiveCollision;

impl Behavior for DestructiveCollision {
    fn behavior_type(&self) -> &'static str {
        "DestructiveCollision"
    }

    fn apply(&mut self, ctx: &mut InteractionContext<'_>) {
        if ctx.collision().collided {
            ctx.body_mut(0).remove();
            ctx.body_mut(1).remove();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
