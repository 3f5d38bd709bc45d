use std::collections::HashMap;
use crate::bodies::RigidBody;
use crate::core::{
    BodyHandle, BodyStorage, EventQueue, GameEvent, InteractionHandle, Marker, Role,
    SceneConfig, SoundCue, TransitionRequest,
};
use crate::error::PhysicsError;
use crate::forces::{Behavior, Interaction, InteractionRegistry};
use crate::Result;

/// A level in play: bodies bucketed by role plus the interactions between them
#[derive(Debug)]
pub struct Scene {
    /// All bodies in the scene
    bodies: BodyStorage<RigidBody>,

    /// Body handles per role, in insertion order
    roles: [Vec<BodyHandle>; Role::COUNT],

    /// Reverse lookup from body to its role
    body_roles: HashMap<BodyHandle, Role>,

    /// All interactions, in registration order
    interactions: InteractionRegistry,

    /// Named bodies
    markers: HashMap<Marker, BodyHandle>,

    /// Tunable constants
    config: SceneConfig,

    /// Events waiting to be drained by the caller
    events: EventQueue,

    /// Transition requested by a behavior during the current tick
    transition: Option<TransitionRequest>,

    /// The total elapsed scene time
    time: f64,
}

impl Scene {
    /// Creates an empty scene with default settings
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Creates an empty scene with the given configuration
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            roles: Default::default(),
            body_roles: HashMap::new(),
            interactions: InteractionRegistry::new(),
            markers: HashMap::new(),
            config,
            events: EventQueue::new(),
            transition: None,
            time: 0.0,
        }
    }

    /// Returns the total elapsed scene time
    pub fn get_time(&self) -> f64 {
        self.time
    }

    /// Returns a reference to the scene configuration
    pub fn get_config(&self) -> &SceneConfig {
        &self.config
    }

    /// Returns a mutable reference to the scene configuration
    pub fn get_config_mut(&mut self) -> &mut SceneConfig {
        &mut self.config
    }

    /// Adds a body to the end of `role`'s bucket and returns its handle
    pub fn add_body(&mut self, role: Role, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.add(body);
        self.roles[role.index()].push(handle);
        self.body_roles.insert(handle, role);

        log::debug!("added {} body {:?}", role, handle);
        self.events.push(GameEvent::BodyAdded { body: handle, role });

        handle
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Read access to every body, for rendering
    pub fn get_bodies(&self) -> &BodyStorage<RigidBody> {
        &self.bodies
    }

    /// Role bucket a body lives in
    pub fn get_role(&self, handle: BodyHandle) -> Option<Role> {
        self.body_roles.get(&handle).copied()
    }

    /// Handles in `role`'s bucket, in insertion order
    pub fn bodies_in(&self, role: Role) -> &[BodyHandle] {
        &self.roles[role.index()]
    }

    /// Handle at `index` within `role`'s bucket.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn body_at(&self, role: Role, index: usize) -> BodyHandle {
        let bucket = &self.roles[role.index()];
        match bucket.get(index) {
            Some(handle) => *handle,
            None => panic!("{} bucket has {} bodies, index {} is out of range", role, bucket.len(), index),
        }
    }

    pub fn role_len(&self, role: Role) -> usize {
        self.roles[role.index()].len()
    }

    /// Total number of bodies in the scene
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Names a body so it can be found without knowing its bucket position
    pub fn mark(&mut self, marker: Marker, handle: BodyHandle) -> Result<()> {
        if !self.bodies.contains(handle) {
            return Err(PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)));
        }
        self.markers.insert(marker, handle);
        Ok(())
    }

    /// Looks up a named body
    pub fn get_marked(&self, marker: Marker) -> Option<BodyHandle> {
        self.markers.get(&marker).copied()
    }

    /// Registers `behavior` to run every tick against `bodies`, in that order
    pub fn add_interaction<B: Behavior>(&mut self, bodies: Vec<BodyHandle>, behavior: B) -> Result<InteractionHandle> {
        self.add_boxed_interaction(bodies, Box::new(behavior))
    }

    /// Registers an already boxed behavior
    pub fn add_boxed_interaction(&mut self, bodies: Vec<BodyHandle>, behavior: Box<dyn Behavior>) -> Result<InteractionHandle> {
        if bodies.is_empty() {
            return Err(PhysicsError::InvalidParameter(format!(
                "{} interaction needs at least one body",
                behavior.behavior_type()
            )));
        }
        if let Some(missing) = bodies.iter().find(|h| !self.bodies.contains(**h)) {
            return Err(PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", missing)));
        }

        log::debug!("registered {} interaction on {:?}", behavior.behavior_type(), bodies);
        Ok(self.interactions.add(bodies, behavior))
    }

    /// Removes an interaction immediately
    pub fn remove_interaction(&mut self, handle: InteractionHandle) -> Result<Interaction> {
        self.interactions
            .remove(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Interaction with handle {:?} not found", handle)))
    }

    /// Gets a reference to an interaction by its handle
    pub fn get_interaction(&self, handle: InteractionHandle) -> Result<&Interaction> {
        self.interactions
            .get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Interaction with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to an interaction by its handle
    pub fn get_interaction_mut(&mut self, handle: InteractionHandle) -> Result<&mut Interaction> {
        self.interactions
            .get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Interaction with handle {:?} not found", handle)))
    }

    /// Iterates the interactions in registration order
    pub fn interactions(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    /// Number of interactions bound to `handle`
    pub fn interactions_for(&self, handle: BodyHandle) -> usize {
        self.interactions.count_for_body(handle)
    }

    /// Queues a sound cue outside of a tick
    pub fn play(&mut self, cue: SoundCue) {
        self.events.play(cue);
    }

    /// Events queued since the last drain
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Removes and returns every queued event in order.
    ///
    /// Nothing else trims the queue, so callers must drain it once per frame.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Advances the scene by `dt` seconds.
    ///
    /// Runs every interaction registered before the call, then walks the role
    /// buckets in order, reaping removed bodies together with every interaction
    /// bound to them and integrating the rest. Returns the sublevel transition
    /// requested during this tick, if any.
    ///
    /// Events raised during the tick pile up until [`Scene::drain_events`] is called.
    pub fn tick(&mut self, dt: f64) -> Option<TransitionRequest> {
        self.time += dt;
        log::trace!("tick at t={:.4}", self.time);

        let count = self.interactions.len();
        for index in 0..count {
            if let Some(interaction) = self.interactions.get_index_mut(index) {
                interaction.run(&mut self.bodies, &mut self.events, &mut self.transition, &self.config);
            }
        }

        for role in Role::ALL {
            let mut index = 0;
            while index < self.roles[role.index()].len() {
                let handle = self.roles[role.index()][index];
                if self.bodies[handle].is_removed() {
                    // The bucket shrinks in place, so the next body now sits at `index`
                    self.roles[role.index()].remove(index);
                    self.reap(handle, role);
                } else {
                    self.bodies[handle].tick(dt, self.config.velocity_limit);
                    index += 1;
                }
            }
        }

        self.transition.take()
    }

    fn reap(&mut self, handle: BodyHandle, role: Role) {
        let dropped = self.interactions.remove_for_body(handle);
        self.bodies.remove(handle);
        self.body_roles.remove(&handle);
        self.markers.retain(|_, marked| *marked != handle);

        log::debug!("reaped {} body {:?} with {} interactions", role, handle, dropped);
        self.events.push(GameEvent::BodyRemoved { body: handle, role });
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
