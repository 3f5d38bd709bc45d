use crate::bodies::RigidBody;
use crate::collision::{find_collision, CollisionInfo};
use crate::core::{BodyHandle, BodyStorage, EventQueue, SceneConfig, SoundCue, TransitionRequest};
use crate::forces::ContactState;
use std::any::Any;
use std::fmt::Debug;

/// A per-tick rule bound to a fixed set of bodies.
///
/// The implementing struct carries whatever state the rule needs between ticks
/// (counters, coefficients); the owning interaction drops it together with itself.
pub trait Behavior: Debug + 'static {
    /// Returns the type name of the behavior
    fn behavior_type(&self) -> &'static str;

    /// Runs the rule once for the current tick
    fn apply(&mut self, ctx: &mut InteractionContext<'_>);

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Returns a dynamic mutable reference to any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Everything a behavior may touch while it runs
pub struct InteractionContext<'a> {
    pub(crate) bodies: &'a mut BodyStorage<RigidBody>,
    pub(crate) participants: &'a [BodyHandle],
    pub(crate) contact: &'a mut ContactState,
    pub(crate) events: &'a mut EventQueue,
    pub(crate) transition: &'a mut Option<TransitionRequest>,
    pub(crate) config: &'a SceneConfig,
}

impl<'a> InteractionContext<'a> {
    /// Number of bodies bound to the interaction
    pub fn body_count(&self) -> usize {
        self.participants.len()
    }

    /// Handle of the `index`-th bound body.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn handle(&self, index: usize) -> BodyHandle {
        match self.participants.get(index) {
            Some(handle) => *handle,
            None => panic!(
                "interaction has {} bodies, index {} is out of range",
                self.participants.len(),
                index
            ),
        }
    }

    /// Borrows the `index`-th bound body
    pub fn body(&self, index: usize) -> &RigidBody {
        &self.bodies[self.handle(index)]
    }

    /// Mutably borrows the `index`-th bound body
    pub fn body_mut(&mut self, index: usize) -> &mut RigidBody {
        let handle = self.handle(index);
        &mut self.bodies[handle]
    }

    /// Gives access to every body in the scene, for helpers that touch two bodies at once
    pub fn bodies_mut(&mut self) -> &mut BodyStorage<RigidBody> {
        &mut *self.bodies
    }

    /// Runs the separating-axis test between two bound bodies
    pub fn find_collision(&self, first: usize, second: usize) -> CollisionInfo {
        find_collision(self.body(first), self.body(second))
    }

    /// Collision between the first and second bound bodies
    pub fn collision(&self) -> CollisionInfo {
        self.find_collision(0, 1)
    }

    /// Whether the interaction is inside a contact episode
    pub fn is_colliding(&self) -> bool {
        self.contact.is_touching()
    }

    pub fn set_colliding(&mut self, colliding: bool) {
        self.contact.set(colliding);
    }

    /// Debounce state of the interaction
    pub fn contact_state(&mut self) -> &mut ContactState {
        &mut *self.contact
    }

    /// Queues a sound cue for the audio layer
    pub fn play(&mut self, cue: SoundCue) {
        self.events.play(cue);
    }

    /// Fills the scene's transition slot for the level loader
    pub fn request_transition(&mut self, request: TransitionRequest) {
        if let Some(pending) = self.transition.replace(request) {
            log::warn!("transition to {:?} replaced by {:?} before it was consumed", pending.sublevel, request.sublevel);
        }
        log::info!("sublevel {:?} requested, exit at {}", request.sublevel, request.exit);
    }

    pub fn config(&self) -> &SceneConfig {
        self.config
    }
}
