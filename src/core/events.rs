use crate::core::{BodyHandle, Role};
use std::collections::VecDeque;

/// Sound cues raised by gameplay for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Token,
    Powerup,
    Death,
    /// Never raised by the core; level code queues it through `Scene::play` when a level is won
    Victory,
    Fireball,
}

/// Something that happened in a scene that outside layers may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A sound should be played
    Sound(SoundCue),

    /// A body was added to a role bucket
    BodyAdded {
        /// The new body
        body: BodyHandle,

        /// The bucket it was added to
        role: Role,
    },

    /// A body was reaped at the end of a tick
    BodyRemoved {
        /// The removed body
        body: BodyHandle,

        /// The bucket it was removed from
        role: Role,
    },
}

/// A queue of scene events, drained by the caller.
///
/// The queue is unbounded; it only shrinks through `Scene::drain_events`.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the queue
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Queues a sound cue
    pub fn play(&mut self, cue: SoundCue) {
        self.push(GameEvent::Sound(cue));
    }

    /// Removes and returns every queued event in order
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Gets all queued sound cues in order
    pub fn sound_cues(&self) -> Vec<SoundCue> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Sound(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    /// Gets all removal events for a specific body
    pub fn removals_of(&self, body: BodyHandle) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::BodyRemoved { body: b, .. } if *b == body))
            .collect()
    }
}
