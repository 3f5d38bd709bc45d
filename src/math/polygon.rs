//! Geometry of simple polygons given as an ordered vertex list.
//!
//! Every function treats the list as cyclic: the last vertex connects back to the first.

use crate::math::Vector2;

#[inline]
fn edges(vertices: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

#[inline]
fn assert_polygon(vertices: &[Vector2]) {
    assert!(
        vertices.len() >= 3,
        "a polygon needs at least 3 vertices, got {}",
        vertices.len()
    );
}

/// Signed shoelace sum; positive for counter-clockwise winding
fn signed_area(vertices: &[Vector2]) -> f64 {
    0.5 * edges(vertices).map(|(a, b)| a.cross(&b)).sum::<f64>()
}

/// Area of the polygon (shoelace formula).
///
/// # Panics
///
/// Panics if fewer than 3 vertices are given.
pub fn area(vertices: &[Vector2]) -> f64 {
    assert_polygon(vertices);
    signed_area(vertices).abs()
}

/// Centroid of the polygon, or `None` when its area is zero.
///
/// Works for either winding since the signed area cancels the orientation.
///
/// # Panics
///
/// Panics if fewer than 3 vertices are given.
pub fn centroid(vertices: &[Vector2]) -> Option<Vector2> {
    assert_polygon(vertices);
    let signed = signed_area(vertices);
    if crate::math::approx_zero(signed) {
        return None;
    }

    let mut sum = Vector2::ZERO;
    for (a, b) in edges(vertices) {
        let cross = a.cross(&b);
        sum += (a + b) * cross;
    }

    Some(sum / (6.0 * signed))
}

/// Unit normal of every edge `(v[i], v[i + 1])`, in vertex order.
///
/// Each normal is the normalized perpendicular `(y, -x)` of the edge vector,
/// which points outward for counter-clockwise polygons.
pub fn normals(vertices: &[Vector2]) -> Vec<Vector2> {
    edges(vertices)
        .map(|(a, b)| (b - a).perpendicular().normalize())
        .collect()
}

/// Largest distance from `center` to any vertex
pub fn bounding_radius(vertices: &[Vector2], center: Vector2) -> f64 {
    vertices
        .iter()
        .map(|v| v.distance(&center))
        .fold(0.0, f64::max)
}
