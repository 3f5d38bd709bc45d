use crate::collision::collision_possible;
use crate::math::{interval_overlap, Vector2};
use crate::shapes::Shape;

/// Result of a separating-axis test between two shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Whether the shapes overlap
    pub collided: bool,

    /// Unit axis of least penetration, pointing from the first shape toward the second
    pub axis: Vector2,

    /// Penetration depth along `axis`
    pub overlap: f64,

    /// `axis * overlap`, the translation that would separate the second shape from the first
    pub overlap_vector: Vector2,
}

impl CollisionInfo {
    /// A result reporting no collision
    pub fn none() -> Self {
        Self {
            collided: false,
            axis: Vector2::ZERO,
            overlap: 0.0,
            overlap_vector: Vector2::ZERO,
        }
    }

    fn along(axis: Vector2, overlap: f64) -> Self {
        Self {
            collided: true,
            axis,
            overlap,
            overlap_vector: axis * overlap,
        }
    }
}

impl Default for CollisionInfo {
    fn default() -> Self {
        Self::none()
    }
}

/// Full separating-axis test.
///
/// Every normal of `shape1` and then `shape2` is tried as a candidate axis. The
/// first axis with no positive overlap proves separation; otherwise the axis with
/// the smallest overlap wins, earlier axes winning ties.
pub fn find_shape_collision(shape1: &Shape, shape2: &Shape) -> CollisionInfo {
    if !collision_possible(shape1, shape2) {
        return CollisionInfo::none();
    }

    let mut best: Option<(Vector2, f64)> = None;
    for axis in shape1.get_normals().into_iter().chain(shape2.get_normals()) {
        if axis.is_zero() {
            continue;
        }

        let overlap = interval_overlap(shape1.project(axis), shape2.project(axis));
        if overlap <= 0.0 {
            return CollisionInfo::none();
        }

        match best {
            Some((_, min)) if overlap >= min => {}
            _ => best = Some((axis, overlap)),
        }
    }

    let Some((mut axis, overlap)) = best else {
        return CollisionInfo::none();
    };

    // Orient the axis from the first shape toward the second
    if axis.dot(&(shape2.get_centroid() - shape1.get_centroid())) < 0.0 {
        axis = -axis;
    }

    CollisionInfo::along(axis, overlap)
}
