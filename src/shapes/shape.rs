use crate::error::PhysicsError;
use crate::math::{polygon, Extrema, Vector2};
use crate::Result;
use nalgebra as na;
use std::f64::consts::TAU;

/// Number of vertices used to approximate a circle
pub const CIRCLE_POINTS: usize = 60;

/// The geometric family of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// A circle, carried as a regular `CIRCLE_POINTS`-gon for projection
    Circle {
        /// The analytic radius of the circle
        radius: f64,
    },

    /// An arbitrary convex polygon
    Polygon,
}

/// A convex collision shape owned by a body.
///
/// Cloning a shape copies its vertex list, so a clone never aliases the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    vertices: Vec<Vector2>,
    centroid: Vector2,
    radius: f64,
    extrema: Extrema,
}

impl Shape {
    /// Creates a circle approximated by a regular polygon.
    ///
    /// The first vertex sits at `center + (radius, 0)` and the rest follow counter-clockwise.
    pub fn circle(center: Vector2, radius: f64) -> Result<Self> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "circle radius must be positive and finite, got {}",
                radius
            )));
        }

        let step = TAU / CIRCLE_POINTS as f64;
        let vertices = (0..CIRCLE_POINTS)
            .map(|i| {
                let angle = step * i as f64;
                center + Vector2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();

        Ok(Self {
            kind: ShapeKind::Circle { radius },
            vertices,
            centroid: center,
            radius,
            extrema: Extrema::around(center, radius),
        })
    }

    /// Creates a polygon from an ordered vertex list
    pub fn polygon(vertices: Vec<Vector2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::InvalidParameter(format!(
                "a polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let centroid = polygon::centroid(&vertices).ok_or_else(|| {
            PhysicsError::InvalidParameter("polygon has zero area".to_string())
        })?;
        let radius = polygon::bounding_radius(&vertices, centroid);
        let extrema = Extrema::from_points(&vertices).ok_or_else(|| {
            PhysicsError::InternalError("polygon extrema from empty vertex list".to_string())
        })?;

        Ok(Self {
            kind: ShapeKind::Polygon,
            vertices,
            centroid,
            radius,
            extrema,
        })
    }

    /// Creates an axis-aligned rectangle from two opposite corners, wound counter-clockwise
    pub fn rectangle(corner1: Vector2, corner2: Vector2) -> Result<Self> {
        let (min_x, max_x) = (corner1.x.min(corner2.x), corner1.x.max(corner2.x));
        let (min_y, max_y) = (corner1.y.min(corner2.y), corner1.y.max(corner2.y));
        if max_x - min_x <= 0.0 || max_y - min_y <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "rectangle corners {} and {} are degenerate",
                corner1, corner2
            )));
        }

        Self::polygon(vec![
            Vector2::new(min_x, min_y),
            Vector2::new(max_x, min_y),
            Vector2::new(max_x, max_y),
            Vector2::new(min_x, max_y),
        ])
    }

    pub fn get_kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn is_circle(&self) -> bool {
        matches!(self.kind, ShapeKind::Circle { .. })
    }

    /// Returns the vertices in order
    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    pub fn get_centroid(&self) -> Vector2 {
        self.centroid
    }

    /// Returns the circle radius, or the bounding radius of a polygon
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Returns the cached axis-aligned extrema
    pub fn get_extrema(&self) -> Extrema {
        self.extrema
    }

    pub fn get_area(&self) -> f64 {
        match self.kind {
            ShapeKind::Circle { radius } => std::f64::consts::PI * radius * radius,
            ShapeKind::Polygon => polygon::area(&self.vertices),
        }
    }

    /// Candidate separating axes of this shape.
    ///
    /// Circles use the radial direction of every vertex, polygons their edge normals.
    pub fn get_normals(&self) -> Vec<Vector2> {
        match self.kind {
            ShapeKind::Circle { .. } => self
                .vertices
                .iter()
                .map(|v| (*v - self.centroid).normalize())
                .collect(),
            ShapeKind::Polygon => polygon::normals(&self.vertices),
        }
    }

    /// Projects every vertex onto `axis` and returns the `(min, max)` interval
    pub fn project(&self, axis: Vector2) -> (f64, f64) {
        self.vertices
            .iter()
            .map(|v| v.dot(&axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p), max.max(p))
            })
    }

    /// Shifts every vertex, the centroid and the extrema by `delta`
    pub fn translate(&mut self, delta: Vector2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
        self.centroid += delta;
        self.extrema.translate(delta);
    }

    /// Rotates the shape by `angle` radians about `pivot` and recomputes its extrema
    pub fn rotate(&mut self, angle: f64, pivot: Vector2) {
        if angle == 0.0 {
            return;
        }

        let rotation = na::Rotation2::new(angle);
        for vertex in &mut self.vertices {
            *vertex = Vector2::rotate_with(&rotation, *vertex, pivot);
        }
        self.centroid = Vector2::rotate_with(&rotation, self.centroid, pivot);

        self.extrema = match self.kind {
            ShapeKind::Circle { radius } => Extrema::around(self.centroid, radius),
            ShapeKind::Polygon => {
                Extrema::from_points(&self.vertices).unwrap_or(self.extrema)
            }
        };
    }
}
