use crate::shapes::Shape;

/// Cheap rejection test on the cached extrema of two shapes.
///
/// Returns false as soon as either axis shows no positive overlap.
pub fn collision_possible(shape1: &Shape, shape2: &Shape) -> bool {
    shape1.get_extrema().intersects(&shape2.get_extrema())
}
