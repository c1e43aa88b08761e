//! Capability traits injected into the playback engine
//!
//! The engine receives its collaborators at construction time instead of
//! reaching for ambient services, so every one of them can be replaced with
//! an in-memory fake in tests.

use crate::error::Result;
use crate::types::PlayableItem;
use std::collections::HashMap;

/// The track catalog as seen by the playback engine.
///
/// The full catalog surface (CRUD, search, uploads) belongs to the host;
/// the engine only needs to notify plays and resolve lyric locators.
pub trait Catalog: Send {
    /// Report that playback of `track_id` started.
    ///
    /// Fire-and-forget from the engine's perspective: failures are logged
    /// by the caller and never interrupt playback.
    fn increment_play_count(&self, track_id: &str) -> Result<()>;

    /// Resolve an item's lyric locator to raw timed-text.
    ///
    /// Returns `Ok(None)` when the item has no resolvable lyrics. Items
    /// carrying inline lyric payloads never reach this method.
    fn resolve_lyrics(&self, item: &PlayableItem) -> Result<Option<String>>;
}

/// Durable string-keyed storage for cross-session state.
///
/// Matches the surface of browser local storage reduced to what the engine
/// needs; hosts back it with whatever they have (web storage, a settings
/// file, a database table).
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key` and its value
    fn remove(&mut self, key: &str);
}

/// In-memory [`KeyValueStore`] for tests and hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
