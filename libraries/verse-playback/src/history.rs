//! Bounded play history
//!
//! Most-recent-first record of played items, deduplicated by id: replaying
//! a track moves it to the front instead of duplicating it.

use verse_core::PlayableItem;

/// Play history with bounded size.
#[derive(Debug, Clone)]
pub struct History {
    /// Entries, most recent first
    entries: Vec<PlayableItem>,

    /// Maximum number of entries kept
    capacity: usize,
}

impl History {
    /// Create an empty history keeping at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a play of `item`.
    ///
    /// Any existing entry with the same id is removed before the item is
    /// prepended; the list is then truncated to capacity, dropping the
    /// oldest entries.
    pub fn record(&mut self, item: &PlayableItem) {
        self.entries.retain(|e| e.id != item.id);
        self.entries.insert(0, item.clone());
        self.entries.truncate(self.capacity);
    }

    /// All entries, most recent first
    pub fn list(&self) -> &[PlayableItem] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the entries wholesale (rehydration from storage).
    ///
    /// Keeps the most-recent-first order of the input and enforces the
    /// capacity bound.
    pub(crate) fn set_entries(&mut self, entries: Vec<PlayableItem>) {
        self.entries = entries;
        self.entries.truncate(self.capacity);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> PlayableItem {
        PlayableItem::new(id, format!("Track {id}"), "Artist", 180.0, format!("/audio/{id}.mp3"))
    }

    #[test]
    fn records_most_recent_first() {
        let mut history = History::new(10);
        history.record(&item("1"));
        history.record(&item("2"));
        history.record(&item("3"));

        let ids: Vec<&str> = history.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "1"]);
    }

    #[test]
    fn replay_moves_entry_to_front_without_duplicating() {
        let mut history = History::new(10);
        history.record(&item("1"));
        history.record(&item("2"));
        history.record(&item("1"));

        assert_eq!(history.len(), 2);
        let ids: Vec<&str> = history.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn capacity_drops_the_oldest() {
        let mut history = History::new(50);
        for i in 0..51 {
            history.record(&item(&i.to_string()));
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.list()[0].id, "50");
        // "0" was the oldest and is gone
        assert!(history.list().iter().all(|e| e.id != "0"));
        assert_eq!(history.list()[49].id, "1");
    }

    #[test]
    fn clear_forgets_everything() {
        let mut history = History::new(10);
        history.record(&item("1"));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn rehydration_respects_capacity() {
        let mut history = History::new(2);
        history.set_entries(vec![item("a"), item("b"), item("c")]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.list()[0].id, "a");
    }
}
