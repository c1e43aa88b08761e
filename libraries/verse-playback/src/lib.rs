//! Verse Playback
//!
//! Platform-agnostic playback management for the Verse music player.
//!
//! This crate provides:
//! - The [`PlaybackSession`] state machine (load/play/pause/seek/volume)
//! - Queue management with four repeat policies (Sequence, LoopAll,
//!   RepeatOne, Shuffle)
//! - Bounded, deduplicated play history
//! - Cross-session persistence of position, volume, policy, and history
//! - Time-synchronized lyric highlighting driven by position ticks
//!
//! # Architecture
//!
//! The crate is completely platform-agnostic: the audio primitive, the
//! catalog, and durable storage are injected as traits. The host drives
//! the session: commands from the UI, [`ResourceSignal`]s forwarded from
//! the acquired resource, and a periodic [`PlaybackSession::tick`] while
//! audio plays. It drains [`SessionEvent`]s to update its views.
//!
//! # Example
//!
//! ```rust
//! use verse_core::{Catalog, MemoryStore, PlayableItem};
//! use verse_playback::{
//!     AudioBackend, AudioResource, PlaybackConfig, PlaybackSession, PlaybackStatus,
//!     ResourceSignal,
//! };
//!
//! struct SilentResource;
//!
//! impl AudioResource for SilentResource {
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _position_secs: f64) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn position(&self) -> f64 {
//!         0.0
//!     }
//!     fn release(&mut self) {}
//! }
//!
//! struct SilentBackend;
//!
//! impl AudioBackend for SilentBackend {
//!     fn acquire(&mut self, _locator: &str) -> Box<dyn AudioResource> {
//!         Box::new(SilentResource)
//!     }
//! }
//!
//! struct NoopCatalog;
//!
//! impl Catalog for NoopCatalog {
//!     fn increment_play_count(&self, _track_id: &str) -> verse_core::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn resolve_lyrics(&self, _item: &PlayableItem) -> verse_core::Result<Option<String>> {
//!         Ok(None)
//!     }
//! }
//!
//! let mut session = PlaybackSession::new(
//!     PlaybackConfig::default(),
//!     Box::new(SilentBackend),
//!     Box::new(NoopCatalog),
//!     Box::new(MemoryStore::new()),
//! );
//!
//! let track = PlayableItem::new("t1", "Song", "Artist", 180.0, "/audio/t1.mp3");
//! session.set_queue(vec![track], 0);
//! session.play();
//! assert_eq!(session.status(), PlaybackStatus::Loading);
//!
//! // The host forwards the resource's signals:
//! session.handle_signal(ResourceSignal::Ready);
//! assert_eq!(session.status(), PlaybackStatus::Playing);
//! assert_eq!(session.history().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod history;
pub mod persist;
pub mod queue;
pub mod resource;
pub mod session;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::SessionEvent;
pub use history::History;
pub use persist::{PersistenceBridge, Snapshot, HISTORY_KEY, SNAPSHOT_KEY};
pub use queue::Queue;
pub use resource::{AudioBackend, AudioResource, ResourceSignal};
pub use session::PlaybackSession;
pub use types::{PlaybackConfig, PlaybackStatus, RepeatPolicy};
