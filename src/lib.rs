pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod forces;
pub mod gameplay;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, InteractionHandle, Marker, Role, Scene, SceneConfig, TransitionRequest};
pub use crate::bodies::{Color, RigidBody};
pub use crate::shapes::Shape;
pub use crate::math::Vector2;

/// Error types for the physics core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for physics core operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
