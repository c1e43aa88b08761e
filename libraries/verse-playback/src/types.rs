//! Core types for the playback session

use serde::{Deserialize, Serialize};

/// Playback session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Fresh or disposed session, nothing loaded yet
    Idle,

    /// A resource has been acquired and has not signalled ready
    Loading,

    /// Resource acquired and unpaused
    Playing,

    /// Paused mid-track
    Paused,

    /// Explicitly stopped, or halted by a load/playback fault
    Stopped,
}

/// Rule governing index advancement on track end or skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatPolicy {
    /// Advance by one, wrapping at the end of the queue
    Sequence,

    /// Loop the whole queue; same wrap-around advance as `Sequence`
    LoopAll,

    /// Stay on the current track
    RepeatOne,

    /// Jump to a uniformly random index (may repeat the current one)
    Shuffle,
}

/// Configuration for a playback session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum history size (default: 50)
    pub history_size: usize,

    /// Initial volume in `[0, 1]` (default: 0.7)
    pub volume: f32,

    /// Initial repeat policy (default: `Sequence`)
    pub repeat: RepeatPolicy,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 0.7,
            repeat: RepeatPolicy::Sequence,
        }
    }
}
