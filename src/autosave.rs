//! Debounced persistence. Store mutations bump a version counter; once
//! the counter has been quiet for the delay, the scene is written out.
//! Rendering never blocks on a write and bursts of edits collapse into
//! one save.

use std::time::{Duration, Instant};

use crate::persistence::SceneStorage;
use crate::store::SceneStore;

pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct Autosave {
    tracked_version: u64,
    dirty_since: Option<Instant>,
    delay: Duration,
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY)
    }
}

impl Autosave {
    pub fn new(delay: Duration) -> Self {
        Self { tracked_version: 0, dirty_since: None, delay }
    }

    /// Start from the store's current version so whatever it was
    /// constructed with does not count as an edit.
    pub fn tracking(store: &SceneStore) -> Self {
        Self { tracked_version: store.version(), ..Self::default() }
    }

    /// True while a save is scheduled but not yet written.
    pub fn pending(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Call once per frame. Returns true when a save was written this
    /// call. A version change restarts the quiet-period timer.
    pub fn tick(&mut self, store: &SceneStore, storage: &mut dyn SceneStorage) -> bool {
        let version = store.version();
        if version != self.tracked_version {
            self.tracked_version = version;
            self.dirty_since = Some(Instant::now());
            return false;
        }
        match self.dirty_since {
            Some(since) if since.elapsed() >= self.delay => {
                self.dirty_since = None;
                log::debug!("Autosave after quiet period");
                store.save_to_storage(storage);
                true
            }
            _ => false,
        }
    }

    /// Write immediately if anything is outstanding. Used on shutdown.
    pub fn flush(&mut self, store: &SceneStore, storage: &mut dyn SceneStorage) {
        if self.dirty_since.take().is_some() {
            store.save_to_storage(storage);
        }
    }
}
