mod shape;

pub use shape::{Shape, ShapeKind, CIRCLE_POINTS};
