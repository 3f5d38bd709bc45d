mod behavior;
mod interaction;
mod gravity;
mod spring;
mod drag;
mod collision;

pub use self::behavior::{Behavior, InteractionContext};
pub use self::interaction::{ContactState, Interaction, InteractionRegistry};
pub use self::gravity::{NewtonianGravity, ANCHORED_PULL};
pub use self::spring::Spring;
pub use self::drag::Drag;
pub use self::collision::{elastic_impulse, reduced_mass, resolve_elastic, DestructiveCollision, PhysicsCollision};
