//! Verse Core
//!
//! Shared domain types, capability traits, and error handling for the
//! Verse playback engine.
//!
//! The engine never talks to a database, the network, or browser storage
//! directly. Collaborators are injected through the traits defined here:
//! - [`Catalog`]: the track catalog (play-count notifications, lyric
//!   resolution)
//! - [`KeyValueStore`]: durable string storage for cross-session state
//!
//! # Example
//!
//! ```rust
//! use verse_core::{MemoryStore, KeyValueStore, PlayableItem};
//!
//! let item = PlayableItem::new("track-1", "My Song", "Some Artist", 182.0, "/audio/1.mp3");
//! assert_eq!(item.id, "track-1");
//!
//! let mut store = MemoryStore::new();
//! store.set("playback.snapshot", "{}");
//! assert_eq!(store.get("playback.snapshot").as_deref(), Some("{}"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod time;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result};
pub use time::format_time;
pub use traits::{Catalog, KeyValueStore, MemoryStore};
pub use types::{LyricsRef, PlayableItem};
