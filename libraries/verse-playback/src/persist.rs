//! Cross-session persistence over an injected key-value store
//!
//! Best-effort by contract: a failed write is logged and dropped, a missing
//! or corrupt read degrades to "nothing stored". Nothing here ever
//! propagates a storage failure to the caller.

use crate::types::RepeatPolicy;
use serde::{Deserialize, Serialize};
use tracing::warn;
use verse_core::{KeyValueStore, PlayableItem};

/// Storage key for the last-session snapshot
pub const SNAPSHOT_KEY: &str = "playback.snapshot";

/// Storage key for the play-history list
pub const HISTORY_KEY: &str = "playback.history";

/// The serialized subset of session state written for cross-session resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Id of the item that was current, if any
    pub last_item_id: Option<String>,

    /// Elapsed position within that item, in seconds
    pub position_secs: f64,

    /// Stored volume in `[0, 1]`
    pub volume: f32,

    /// Active repeat policy
    pub repeat: RepeatPolicy,
}

/// Serializes session state to the injected durable store.
pub struct PersistenceBridge {
    store: Box<dyn KeyValueStore>,
}

impl PersistenceBridge {
    /// Create a bridge over `store`
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write the last-session snapshot
    pub fn save_snapshot(&mut self, snapshot: &Snapshot) {
        match serde_json::to_string(snapshot) {
            Ok(json) => self.store.set(SNAPSHOT_KEY, &json),
            Err(err) => warn!("failed to serialize playback snapshot: {err}"),
        }
    }

    /// Read the last-session snapshot, if one is stored and intact
    pub fn load_snapshot(&self) -> Option<Snapshot> {
        let raw = self.store.get(SNAPSHOT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!("discarding corrupt playback snapshot: {err}");
                None
            }
        }
    }

    /// Write the play-history list, most recent first
    pub fn save_history(&mut self, entries: &[PlayableItem]) {
        match serde_json::to_string(entries) {
            Ok(json) => self.store.set(HISTORY_KEY, &json),
            Err(err) => warn!("failed to serialize play history: {err}"),
        }
    }

    /// Read the persisted play-history list; empty when missing or corrupt
    pub fn load_history(&self) -> Vec<PlayableItem> {
        let Some(raw) = self.store.get(HISTORY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("discarding corrupt play history: {err}");
                Vec::new()
            }
        }
    }

    /// Remove the persisted play history entirely
    pub fn clear_history(&mut self) {
        self.store.remove(HISTORY_KEY);
    }
}
