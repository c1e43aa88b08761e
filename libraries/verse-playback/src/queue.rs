//! Playback queue and repeat-policy index transitions

use crate::error::{PlaybackError, Result};
use crate::types::RepeatPolicy;
use rand::Rng;
use verse_core::PlayableItem;

/// Ordered list of playable items plus the current index.
///
/// Invariant: `current` is `None` exactly when `items` is empty; otherwise
/// it stays within bounds. Duplicates are allowed; identity is by `id`,
/// position by index.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: Vec<PlayableItem>,
    current: Option<usize>,
}

impl Queue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale.
    ///
    /// An out-of-range `start_index` clamps to `0`; an empty `items` list
    /// leaves the queue with no current index.
    pub fn set_items(&mut self, items: Vec<PlayableItem>, start_index: usize) {
        self.current = if items.is_empty() {
            None
        } else if start_index < items.len() {
            Some(start_index)
        } else {
            Some(0)
        };
        self.items = items;
    }

    /// All items in queue order
    pub fn items(&self) -> &[PlayableItem] {
        &self.items
    }

    /// Number of items in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current index, if an item is selected
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The currently selected item
    pub fn current_item(&self) -> Option<&PlayableItem> {
        self.current.and_then(|i| self.items.get(i))
    }

    /// Select the item at `index`
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        if index < self.items.len() {
            self.current = Some(index);
            Ok(())
        } else {
            Err(PlaybackError::IndexOutOfBounds(index))
        }
    }

    /// Move to the next index under `policy`, returning the new index.
    ///
    /// `Sequence` and `LoopAll` share the wrap-around rule: the end of the
    /// queue restarts at `0` rather than stopping. `RepeatOne` keeps the
    /// index; `Shuffle` picks uniformly and may repeat the current index.
    /// No-op returning `None` on an empty queue.
    pub fn advance(&mut self, policy: RepeatPolicy) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let current = self.current?;

        let next = match policy {
            RepeatPolicy::Sequence | RepeatPolicy::LoopAll => (current + 1) % len,
            RepeatPolicy::RepeatOne => current,
            RepeatPolicy::Shuffle => rand::thread_rng().gen_range(0..len),
        };
        self.current = Some(next);
        self.current
    }

    /// Move to the previous index under `policy`, returning the new index.
    ///
    /// Mirrors [`Queue::advance`]: wrap to the last index from `0` for
    /// `Sequence`/`LoopAll`, fixed index for `RepeatOne`, independently
    /// random for `Shuffle`.
    pub fn retreat(&mut self, policy: RepeatPolicy) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let current = self.current?;

        let previous = match policy {
            RepeatPolicy::Sequence | RepeatPolicy::LoopAll => (current + len - 1) % len,
            RepeatPolicy::RepeatOne => current,
            RepeatPolicy::Shuffle => rand::thread_rng().gen_range(0..len),
        };
        self.current = Some(previous);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> PlayableItem {
        PlayableItem::new(id, format!("Track {id}"), "Artist", 180.0, format!("/audio/{id}.mp3"))
    }

    fn three_items() -> Vec<PlayableItem> {
        vec![item("1"), item("2"), item("3")]
    }

    #[test]
    fn empty_queue_has_no_current() {
        let mut queue = Queue::new();
        queue.set_items(Vec::new(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), None);
        assert!(queue.current_item().is_none());
    }

    #[test]
    fn out_of_range_start_clamps_to_zero() {
        let mut queue = Queue::new();
        queue.set_items(three_items(), 7);
        assert_eq!(queue.current_index(), Some(0));

        queue.set_items(three_items(), 2);
        assert_eq!(queue.current_index(), Some(2));
    }

    #[test]
    fn sequence_wraps_both_directions() {
        let mut queue = Queue::new();
        queue.set_items(three_items(), 2);
        assert_eq!(queue.advance(RepeatPolicy::Sequence), Some(0));

        queue.set_items(three_items(), 0);
        assert_eq!(queue.retreat(RepeatPolicy::Sequence), Some(2));
    }

    #[test]
    fn loop_all_matches_sequence_transitions() {
        let mut queue = Queue::new();
        queue.set_items(three_items(), 2);
        assert_eq!(queue.advance(RepeatPolicy::LoopAll), Some(0));
        assert_eq!(queue.advance(RepeatPolicy::LoopAll), Some(1));
        assert_eq!(queue.retreat(RepeatPolicy::LoopAll), Some(0));
        assert_eq!(queue.retreat(RepeatPolicy::LoopAll), Some(2));
    }

    #[test]
    fn repeat_one_never_moves() {
        let mut queue = Queue::new();
        queue.set_items(three_items(), 1);
        assert_eq!(queue.advance(RepeatPolicy::RepeatOne), Some(1));
        assert_eq!(queue.retreat(RepeatPolicy::RepeatOne), Some(1));
        assert_eq!(queue.current_index(), Some(1));
    }

    #[test]
    fn shuffle_stays_in_range() {
        let mut queue = Queue::new();
        queue.set_items(three_items(), 0);
        for _ in 0..100 {
            let index = queue.advance(RepeatPolicy::Shuffle).unwrap();
            assert!(index < 3);
            let index = queue.retreat(RepeatPolicy::Shuffle).unwrap();
            assert!(index < 3);
        }
    }

    #[test]
    fn transitions_on_empty_queue_are_no_ops() {
        let mut queue = Queue::new();
        assert_eq!(queue.advance(RepeatPolicy::Sequence), None);
        assert_eq!(queue.retreat(RepeatPolicy::Shuffle), None);
    }

    #[test]
    fn set_current_bounds_checked() {
        let mut queue = Queue::new();
        queue.set_items(three_items(), 0);
        assert!(queue.set_current(2).is_ok());
        assert_eq!(queue.current_item().unwrap().id, "3");
        assert!(matches!(
            queue.set_current(3),
            Err(PlaybackError::IndexOutOfBounds(3))
        ));
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut queue = Queue::new();
        queue.set_items(vec![item("1"), item("1"), item("2")], 1);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.advance(RepeatPolicy::Sequence), Some(2));
    }
}
