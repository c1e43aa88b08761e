//! Core domain types for the playback engine

use serde::{Deserialize, Serialize};

/// One playable track as supplied by the catalog.
///
/// The engine treats items as immutable: it references them by `id` in the
/// queue and history but never mutates them. `duration_secs` is the nominal
/// catalog length, independent of whatever the decoded audio turns out to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableItem {
    /// Stable identifier from the catalog
    pub id: String,

    /// Track title
    pub title: String,

    /// Primary artist
    pub artist: String,

    /// Album name (optional)
    pub album: Option<String>,

    /// Nominal track length in seconds
    pub duration_secs: f64,

    /// Locator for the audio bytes (URL or opaque reference)
    pub audio_url: String,

    /// Locator for the cover image (optional)
    pub cover_url: Option<String>,

    /// Timed-text lyric source (optional)
    pub lyrics: Option<LyricsRef>,

    /// Play counter as last reported by the catalog (optional)
    pub play_count: Option<u64>,
}

impl PlayableItem {
    /// Create an item with the required fields; optional fields start empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: f64,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration_secs,
            audio_url: audio_url.into(),
            cover_url: None,
            lyrics: None,
            play_count: None,
        }
    }
}

/// Where the timed-text lyrics for an item come from.
///
/// A `Locator` is resolved to raw timed-text through the catalog; an
/// `Inline` payload is already the timed-text itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LyricsRef {
    /// Reference to be resolved by the catalog (URL or opaque key)
    Locator(String),

    /// Raw timed-text carried inline with the item
    Inline(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_empty_optionals() {
        let item = PlayableItem::new("t1", "Title", "Artist", 180.0, "/audio/t1.mp3");
        assert_eq!(item.id, "t1");
        assert_eq!(item.duration_secs, 180.0);
        assert!(item.album.is_none());
        assert!(item.lyrics.is_none());
        assert!(item.play_count.is_none());
    }

    #[test]
    fn item_round_trips_through_json() {
        let mut item = PlayableItem::new("t1", "Title", "Artist", 180.0, "/audio/t1.mp3");
        item.lyrics = Some(LyricsRef::Inline("[00:00.00]hello".to_string()));

        let json = serde_json::to_string(&item).unwrap();
        let back: PlayableItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
