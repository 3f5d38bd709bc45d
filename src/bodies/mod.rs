mod rigid_body;
mod color;
mod info;

pub use self::rigid_body::{RigidBody, apply_normal_force, limit_velocity};
pub use self::color::Color;
pub use self::info::BodyInfo;
pub use self::contact_flags::Contact;

use crate::math::Vector2;

/// A pending effect accumulated on a body until its next tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceType {
    /// Continuous force, divided by mass and scaled by the time step
    Force(Vector2),

    /// Instantaneous change in momentum
    Impulse(Vector2),
}

/// Flags describing which sides of a body currently rest against something solid
pub mod contact_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Contact sides reported by a body's payload
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct Contact: u8 {
            /// Something solid is to the left
            const LEFT = 0x01;

            /// Something solid is to the right
            const RIGHT = 0x02;

            /// Something solid is overhead
            const ABOVE = 0x04;

            /// The body is standing on something
            const BELOW = 0x08;
        }
    }
}
