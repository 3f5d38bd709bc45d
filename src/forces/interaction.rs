use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage, EventQueue, InteractionHandle, SceneConfig, TransitionRequest};
use crate::forces::{Behavior, InteractionContext};

/// Debounce state of an interaction.
///
/// Behaviors that should fire once per contact move to `Touching` on the
/// leading edge and back to `Separated` once the bodies part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactState {
    #[default]
    Separated,
    Touching,
}

impl ContactState {
    pub fn is_touching(self) -> bool {
        self == ContactState::Touching
    }

    /// Enters `Touching`; returns true only on the leading edge
    pub fn begin(&mut self) -> bool {
        let edge = *self == ContactState::Separated;
        *self = ContactState::Touching;
        edge
    }

    /// Enters `Separated`; returns true only on the trailing edge
    pub fn end(&mut self) -> bool {
        let edge = *self == ContactState::Touching;
        *self = ContactState::Separated;
        edge
    }

    pub fn set(&mut self, touching: bool) {
        *self = if touching {
            ContactState::Touching
        } else {
            ContactState::Separated
        };
    }
}

/// A behavior bound to a fixed list of bodies
#[derive(Debug)]
pub struct Interaction {
    handle: InteractionHandle,
    bodies: Vec<BodyHandle>,
    behavior: Box<dyn Behavior>,
    contact: ContactState,
}

impl Interaction {
    pub fn get_handle(&self) -> InteractionHandle {
        self.handle
    }

    /// Handle of the `index`-th bound body.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_body(&self, index: usize) -> BodyHandle {
        match self.bodies.get(index) {
            Some(handle) => *handle,
            None => panic!(
                "interaction has {} bodies, index {} is out of range",
                self.bodies.len(),
                index
            ),
        }
    }

    pub fn get_bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    /// Returns true if `body` is one of the bound bodies
    pub fn involves(&self, body: BodyHandle) -> bool {
        self.bodies.contains(&body)
    }

    pub fn is_colliding(&self) -> bool {
        self.contact.is_touching()
    }

    pub fn set_colliding(&mut self, colliding: bool) {
        self.contact.set(colliding);
    }

    pub fn get_contact_state(&self) -> ContactState {
        self.contact
    }

    pub fn behavior_type(&self) -> &'static str {
        self.behavior.behavior_type()
    }

    /// Borrows the behavior and its state as a concrete type
    pub fn behavior_as<T: Behavior>(&self) -> Option<&T> {
        self.behavior.as_any().downcast_ref::<T>()
    }

    /// Mutably borrows the behavior and its state as a concrete type
    pub fn behavior_as_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.behavior.as_any_mut().downcast_mut::<T>()
    }

    /// Swaps in a new behavior, returning the previous one
    pub fn replace_behavior(&mut self, behavior: Box<dyn Behavior>) -> Box<dyn Behavior> {
        std::mem::replace(&mut self.behavior, behavior)
    }

    pub(crate) fn run(
        &mut self,
        bodies: &mut BodyStorage<RigidBody>,
        events: &mut EventQueue,
        transition: &mut Option<TransitionRequest>,
        config: &SceneConfig,
    ) {
        let mut ctx = InteractionContext {
            bodies,
            participants: &self.bodies,
            contact: &mut self.contact,
            events,
            transition,
            config,
        };
        self.behavior.apply(&mut ctx);
    }
}

/// Ordered collection of the interactions in a scene
#[derive(Debug)]
pub struct InteractionRegistry {
    interactions: Vec<Interaction>,
    next_id: u32,
}

impl InteractionRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            interactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Binds `behavior` to `bodies` and appends it after every existing interaction
    pub fn add(&mut self, bodies: Vec<BodyHandle>, behavior: Box<dyn Behavior>) -> InteractionHandle {
        let handle = InteractionHandle(self.next_id);
        self.next_id += 1;
        self.interactions.push(Interaction {
            handle,
            bodies,
            behavior,
            contact: ContactState::Separated,
        });
        handle
    }

    /// Removes an interaction, keeping the order of the rest
    pub fn remove(&mut self, handle: InteractionHandle) -> Option<Interaction> {
        let index = self.interactions.iter().position(|i| i.handle == handle)?;
        Some(self.interactions.remove(index))
    }

    /// Removes every interaction bound to `body`; returns how many were dropped
    pub fn remove_for_body(&mut self, body: BodyHandle) -> usize {
        let before = self.interactions.len();
        self.interactions.retain(|i| !i.involves(body));
        before - self.interactions.len()
    }

    /// Number of interactions bound to `body`
    pub fn count_for_body(&self, body: BodyHandle) -> usize {
        self.interactions.iter().filter(|i| i.involves(body)).count()
    }

    pub fn get(&self, handle: InteractionHandle) -> Option<&Interaction> {
        self.interactions.iter().find(|i| i.handle == handle)
    }

    pub fn get_mut(&mut self, handle: InteractionHandle) -> Option<&mut Interaction> {
        self.interactions.iter_mut().find(|i| i.handle == handle)
    }

    pub(crate) fn get_index_mut(&mut self, index: usize) -> Option<&mut Interaction> {
        self.interactions.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Iterates the interactions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }
}

impl Default for InteractionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
