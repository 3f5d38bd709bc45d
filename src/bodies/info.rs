use crate::bodies::Contact;
use std::any::Any;
use std::fmt::Debug;

/// Game-specific record attached to a body.
///
/// The body consults it for contact sides before integrating and advances its
/// timers at the start of every tick. Concrete types are recovered through
/// `RigidBody::get_info`.
pub trait BodyInfo: Debug + 'static {
    /// Sides on which the body currently rests against something solid
    fn contact(&self) -> Contact {
        Contact::empty()
    }

    /// Advances payload timers by `dt` seconds
    fn tick(&mut self, _dt: f64) {}

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
