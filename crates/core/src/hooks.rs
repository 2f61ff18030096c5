//! Collaborator interfaces the engine calls into
//!
//! Sound playback and persistence live outside the engine. They are injected
//! at construction so the engine never touches process-wide state.

use crate::types::SoundEvent;

/// Receives discrete gameplay events, in order
///
/// Implementations must not call back into the engine.
pub trait SoundHooks {
    fn play(&mut self, event: SoundEvent);
}

/// Narrow key-value contract for the high score
pub trait PersistenceStore {
    /// Called at construction and on every reset
    fn load_high_score(&self) -> u32;

    /// Called whenever a new high score is set
    fn save_high_score(&mut self, score: u32);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSound;

impl SoundHooks for NullSound {
    fn play(&mut self, _event: SoundEvent) {}
}

/// Records every event (tests, replays, visual cues)
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SoundEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SoundEvent] {
        &self.events
    }

    /// Take and clear the recorded events
    pub fn take(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn contains(&self, event: SoundEvent) -> bool {
        self.events.contains(&event)
    }
}

impl SoundHooks for EventLog {
    fn play(&mut self, event: SoundEvent) {
        self.events.push(event);
    }
}

/// In-memory high score store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    high_score: u32,
    saves: u32,
}

impl MemoryStore {
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            saves: 0,
        }
    }

    /// Number of times the engine persisted a score
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl PersistenceStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.high_score = score;
        self.saves += 1;
    }
}

impl<T: SoundHooks + ?Sized> SoundHooks for Box<T> {
    fn play(&mut self, event: SoundEvent) {
        (**self).play(event);
    }
}

impl<T: PersistenceStore + ?Sized> PersistenceStore for Box<T> {
    fn load_high_score(&self) -> u32 {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, score: u32) {
        (**self).save_high_score(score);
    }
}
