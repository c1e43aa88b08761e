//! Session events
//!
//! Event-based communication for host/UI synchronization. The session
//! appends to an internal queue; hosts drain it with
//! [`crate::PlaybackSession::take_events`] after each command, signal, or
//! tick.

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Playback status changed
    StatusChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A different track became current
    TrackChanged {
        /// Id of the new current track
        track_id: String,
        /// Id of the previous track, if any
        previous_track_id: Option<String>,
    },

    /// Elapsed position moved (sampling tick or seek)
    PositionChanged {
        /// New position in seconds
        position_secs: f64,
    },

    /// The active lyric line changed
    LyricLineChanged {
        /// Index into the installed lyric lines; `None` before the first
        /// line or when no lyrics are installed
        line: Option<usize>,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// Stored volume in `[0, 1]`
        volume: f32,
        /// Whether output is muted
        muted: bool,
    },

    /// The resource reported a load or playback fault
    PlaybackFailed {
        /// Backend-supplied failure message
        message: String,
    },
}
