//! Separating-axis collision detection between convex shapes.

mod broad_phase;
mod narrow_phase;

pub use self::broad_phase::collision_possible;
pub use self::narrow_phase::{find_shape_collision, CollisionInfo};

use crate::bodies::RigidBody;

/// Checks two bodies for overlap.
///
/// Works on borrowed shapes; neither body is modified.
pub fn find_collision(body1: &RigidBody, body2: &RigidBody) -> CollisionInfo {
    find_shape_collision(body1.get_shape(), body2.get_shape())
}
