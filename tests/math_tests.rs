use approx::{assert_abs_diff_eq, assert_relative_eq};
use platformer_physics::math::{interval_overlap, polygon, Extrema, Vector2};
use platformer_physics::shapes::Shape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Random convex polygon: a regular n-gon with a random center, size and phase
fn random_convex(rng: &mut StdRng) -> Vec<Vector2> {
    let n = rng.gen_range(3..12);
    let center = Vector2::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
    let radius = rng.gen_range(0.5..50.0);
    let phase = rng.gen_range(0.0..TAU);

    (0..n)
        .map(|i| {
            let angle = phase + TAU * i as f64 / n as f64;
            center + Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[test]
fn test_vector_operations() {
    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::new(-1.0, 2.0);

    assert_eq!(a + b, Vector2::new(2.0, 6.0));
    assert_eq!(a - b, Vector2::new(4.0, 2.0));
    assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
    assert_eq!(-a, Vector2::new(-3.0, -4.0));
    assert_eq!(a.dot(&b), 5.0);
    assert_eq!(a.cross(&b), 10.0);
    assert_eq!(a.length(), 5.0);
    assert_eq!(a.perpendicular(), Vector2::new(4.0, -3.0));
    assert_relative_eq!(a.normalize(), Vector2::new(0.6, 0.8));
}

#[test]
fn test_normalize_zero_vector() {
    let n = Vector2::ZERO.normalize();
    assert!(n.is_zero());
    assert!(!n.x.is_nan() && !n.y.is_nan());
}

#[test]
fn test_vector_rotation() {
    let v = Vector2::new(2.0, 1.0);
    let rotated = v.rotate(FRAC_PI_2, Vector2::new(1.0, 1.0));
    assert_abs_diff_eq!(rotated, Vector2::new(1.0, 2.0), epsilon = 1e-12);

    let half_turn = v.rotate(PI, Vector2::ZERO);
    assert_abs_diff_eq!(half_turn, Vector2::new(-2.0, -1.0), epsilon = 1e-12);
}

#[test]
fn test_nalgebra_conversion() {
    let v = Vector2::new(1.5, -2.5);
    assert_eq!(Vector2::from_nalgebra(&v.to_nalgebra()), v);
}

#[test]
fn test_interval_overlap() {
    assert_eq!(interval_overlap((0.0, 2.0), (1.0, 5.0)), 1.0);
    assert_eq!(interval_overlap((0.0, 2.0), (2.0, 5.0)), 0.0);
    assert!(interval_overlap((0.0, 2.0), (3.0, 5.0)) < 0.0);
}

#[test]
fn test_square_area_and_centroid() {
    let square = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    assert_relative_eq!(polygon::area(&square), 1.0);

    let centroid = polygon::centroid(&square).unwrap();
    assert_relative_eq!(centroid, Vector2::new(0.5, 0.5));
}

#[test]
fn test_clockwise_area_is_positive() {
    let triangle = [Vector2::new(0.0, 0.0), Vector2::new(0.0, 3.0), Vector2::new(4.0, 0.0)];
    assert_relative_eq!(polygon::area(&triangle), 6.0);

    let centroid = polygon::centroid(&triangle).unwrap();
    assert_relative_eq!(centroid, Vector2::new(4.0 / 3.0, 1.0));
}

#[test]
fn test_zero_area_has_no_centroid() {
    let line = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0)];
    assert!(polygon::centroid(&line).is_none());
}

#[test]
fn test_centroid_inside_convex_hull() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let vertices = random_convex(&mut rng);
        assert!(polygon::area(&vertices) > 0.0);

        let c = polygon::centroid(&vertices).unwrap();
        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            // Counter-clockwise winding keeps every interior point to the left of each edge
            assert!((b - a).cross(&(c - a)) > 0.0);
        }
    }
}

#[test]
fn test_polygon_normals_are_unit_and_outward() {
    let shape = Shape::rectangle(Vector2::new(0.0, 0.0), Vector2::new(4.0, 2.0)).unwrap();
    let normals = shape.get_normals();
    assert_eq!(normals.len(), 4);

    let centroid = shape.get_centroid();
    for (i, normal) in normals.iter().enumerate() {
        assert_relative_eq!(normal.length(), 1.0);
        let vertex = shape.get_vertices()[i];
        assert!(normal.dot(&(vertex - centroid)) > 0.0);
    }
}

#[test]
fn test_translate_round_trip_is_exact() {
    let mut shape = Shape::rectangle(Vector2::new(0.0, 0.0), Vector2::new(4.0, 2.0)).unwrap();
    let original = shape.clone();
    assert_eq!(shape.get_centroid(), Vector2::new(2.0, 1.0));

    let delta = Vector2::new(3.5, -1.25);
    shape.translate(delta);
    assert_eq!(shape.get_centroid(), Vector2::new(5.5, -0.25));
    shape.translate(-delta);

    assert_eq!(shape.get_vertices(), original.get_vertices());
    assert_eq!(shape.get_centroid(), original.get_centroid());
    assert_eq!(shape.get_extrema(), original.get_extrema());
}

#[test]
fn test_rotate_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let mut shape = Shape::polygon(random_convex(&mut rng)).unwrap();
        let original = shape.clone();
        let angle = rng.gen_range(-TAU..TAU);
        let pivot = Vector2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));

        shape.rotate(angle, pivot);
        shape.rotate(-angle, pivot);

        for (v, o) in shape.get_vertices().iter().zip(original.get_vertices()) {
            assert_abs_diff_eq!(*v, *o, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(shape.get_centroid(), original.get_centroid(), epsilon = 1e-9);
    }
}

#[test]
fn test_circle_shape() {
    let circle = Shape::circle(Vector2::new(1.0, 2.0), 3.0).unwrap();
    assert!(circle.is_circle());
    assert_eq!(circle.get_vertices().len(), 60);
    assert_abs_diff_eq!(circle.get_vertices()[0], Vector2::new(4.0, 2.0), epsilon = 1e-12);
    assert_eq!(circle.get_centroid(), Vector2::new(1.0, 2.0));
    assert_eq!(circle.get_radius(), 3.0);

    for vertex in circle.get_vertices() {
        assert_relative_eq!(vertex.distance(&circle.get_centroid()), 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_extrema() {
    let a = Extrema::new(0.0, 2.0, 0.0, 2.0);
    let mut b = Extrema::new(1.0, 3.0, 1.0, 3.0);
    assert!(a.intersects(&b));
    assert_eq!(a.overlap_x(&b), 1.0);

    b.translate(Vector2::new(1.0, 0.0));
    assert!(!a.intersects(&b));
    assert_eq!(b.center(), Vector2::new(3.0, 2.0));
    assert_eq!(b.width(), 2.0);
    assert_eq!(b.height(), 2.0);

    let points = [Vector2::new(1.0, -1.0), Vector2::new(-2.0, 4.0)];
    assert_eq!(Extrema::from_points(&points), Some(Extrema::new(-2.0, 1.0, -1.0, 4.0)));
    assert_eq!(Extrema::from_points(&[]), None);
}

#[test]
fn test_shape_area() {
    let circle = Shape::circle(Vector2::new(3.0, -2.0), 2.0).unwrap();
    assert_relative_eq!(circle.get_area(), 4.0 * PI, max_relative = 1e-12);

    let rect = Shape::rectangle(Vector2::new(1.0, 1.0), Vector2::new(5.0, 4.0)).unwrap();
    assert_relative_eq!(rect.get_area(), 12.0, max_relative = 1e-12);

    // Rotation does not change area
    let mut turned = rect.clone();
    turned.rotate(0.7, turned.get_centroid());
    assert_relative_eq!(turned.get_area(), 12.0, max_relative = 1e-9);
}
