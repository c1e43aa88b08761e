//! Playback session - core orchestration
//!
//! Owns the single acquired audio resource and coordinates queue, history,
//! volume, lyric synchronization, and persistence. All mutation happens in
//! reaction to discrete events: host commands, forwarded resource signals,
//! and the periodic position tick. Nothing here blocks the caller; loading
//! completes through a later [`ResourceSignal::Ready`], so `Loading` is a
//! normal immediate state after any load call.

use crate::error::{PlaybackError, Result};
use crate::events::SessionEvent;
use crate::history::History;
use crate::persist::{PersistenceBridge, Snapshot};
use crate::queue::Queue;
use crate::resource::{AudioBackend, AudioResource, ResourceSignal};
use crate::types::{PlaybackConfig, PlaybackStatus, RepeatPolicy};
use tracing::{debug, error, warn};
use verse_core::{Catalog, KeyValueStore, LyricsRef, PlayableItem};
use verse_lyrics::{active_line, parse_lrc, LyricLine};

/// The playback session state machine.
///
/// Constructed once by the hosting application and driven entirely by it:
/// commands come from the UI, [`ResourceSignal`]s are forwarded from the
/// acquired resource, and [`PlaybackSession::tick`] is called on a fixed
/// short interval (tens of milliseconds) while audio plays. Ticks taken
/// outside `Playing` are ignored, so a host interval that outlives a pause
/// cannot write stale positions.
///
/// The host must only forward signals from the most recently acquired
/// resource; signals arriving while no resource is held are dropped, which
/// also covers late callbacks from a resource that was replaced.
pub struct PlaybackSession {
    // State
    status: PlaybackStatus,
    position_secs: f64,
    volume: f32,
    muted: bool,
    repeat: RepeatPolicy,

    // Queue, history, persistence
    queue: Queue,
    history: History,
    bridge: PersistenceBridge,

    // Injected collaborators
    backend: Box<dyn AudioBackend>,
    catalog: Box<dyn Catalog>,

    // The one live audio resource
    resource: Option<Box<dyn AudioResource>>,
    current: Option<PlayableItem>,

    // Lyric synchronization
    lyrics: Vec<LyricLine>,
    active_lyric: Option<usize>,

    // Event queue for host/UI synchronization
    pending_events: Vec<SessionEvent>,

    disposed: bool,
}

impl PlaybackSession {
    /// Create a session with injected collaborators.
    ///
    /// The persisted play history is rehydrated immediately; the
    /// last-session snapshot is only applied by [`PlaybackSession::restore`]
    /// because reattaching it needs the item set.
    pub fn new(
        config: PlaybackConfig,
        backend: Box<dyn AudioBackend>,
        catalog: Box<dyn Catalog>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let bridge = PersistenceBridge::new(store);
        let mut history = History::new(config.history_size);
        history.set_entries(bridge.load_history());

        Self {
            status: PlaybackStatus::Idle,
            position_secs: 0.0,
            volume: config.volume.clamp(0.0, 1.0),
            muted: false,
            repeat: config.repeat,
            queue: Queue::new(),
            history,
            bridge,
            backend,
            catalog,
            resource: None,
            current: None,
            lyrics: Vec::new(),
            active_lyric: None,
            pending_events: Vec::new(),
            disposed: false,
        }
    }

    // ===== Queue =====

    /// Replace the queue wholesale without starting playback.
    ///
    /// An out-of-range `start_index` clamps to `0`; an empty list empties
    /// the queue.
    pub fn set_queue(&mut self, items: Vec<PlayableItem>, start_index: usize) {
        self.queue.set_items(items, start_index);
    }

    /// Seed the queue and reapply the last-session snapshot.
    ///
    /// Volume and repeat policy always apply. The snapshot's item and
    /// position reattach only when the item id is present in `items`;
    /// otherwise position resets to `0`. The session stays `Idle` either
    /// way; playback resumes on an explicit [`PlaybackSession::play`].
    pub fn restore(&mut self, items: Vec<PlayableItem>) {
        self.queue.set_items(items, 0);

        let Some(snapshot) = self.bridge.load_snapshot() else {
            return;
        };

        self.volume = snapshot.volume.clamp(0.0, 1.0);
        self.repeat = snapshot.repeat;
        self.position_secs = 0.0;

        if let Some(id) = snapshot.last_item_id {
            if let Some(index) = self.queue.items().iter().position(|i| i.id == id) {
                self.queue.set_current(index).ok();
                self.current = self.queue.current_item().cloned();
                self.position_secs = snapshot.position_secs.max(0.0);
            }
        }
    }

    /// Jump to the queue item at `index` and load it
    pub fn play_item_at(&mut self, index: usize) -> Result<()> {
        self.queue.set_current(index)?;
        let item = self
            .queue
            .current_item()
            .cloned()
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        self.load_and_play(item);
        Ok(())
    }

    /// Skip to the next index under the active repeat policy and load it
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        if self.queue.advance(self.repeat).is_none() {
            return Err(PlaybackError::QueueEmpty);
        }
        let item = self
            .queue
            .current_item()
            .cloned()
            .ok_or(PlaybackError::QueueEmpty)?;
        self.load_and_play(item);
        Ok(())
    }

    /// Skip to the previous index under the active repeat policy and load it
    pub fn previous(&mut self) -> Result<()> {
        if self.queue.retreat(self.repeat).is_none() {
            return Err(PlaybackError::QueueEmpty);
        }
        let item = self
            .queue
            .current_item()
            .cloned()
            .ok_or(PlaybackError::QueueEmpty)?;
        self.load_and_play(item);
        Ok(())
    }

    // ===== Playback control =====

    /// Release any held resource and acquire one for `item`.
    ///
    /// The prior resource is fully released before the new acquisition
    /// begins, so at most one resource is live at any time and a load
    /// issued mid-load implicitly cancels the previous one.
    pub fn load_and_play(&mut self, item: PlayableItem) {
        if let Some(mut old) = self.resource.take() {
            old.release();
        }

        let previous_id = self.current.as_ref().map(|i| i.id.clone());
        self.position_secs = 0.0;
        self.set_lyrics(None);
        self.disposed = false;

        self.set_status(PlaybackStatus::Loading);
        self.pending_events.push(SessionEvent::TrackChanged {
            track_id: item.id.clone(),
            previous_track_id: previous_id,
        });

        let mut resource = self.backend.acquire(&item.audio_url);
        resource.set_volume(self.effective_volume());
        resource.play();
        self.resource = Some(resource);
        self.current = Some(item);
    }

    /// Start or resume playback.
    ///
    /// With no resource held, loads the current queue item (no-op on an
    /// empty queue); when paused, resumes the held resource.
    pub fn play(&mut self) {
        if self.resource.is_none() {
            if let Some(item) = self.queue.current_item().cloned() {
                self.load_and_play(item);
            } else {
                debug!("play requested with an empty queue");
            }
            return;
        }

        if self.status == PlaybackStatus::Paused {
            if let Some(resource) = self.resource.as_mut() {
                resource.play();
            }
            self.set_status(PlaybackStatus::Playing);
        }
    }

    /// Pause playback; no-op unless currently playing
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Playing {
            if let Some(resource) = self.resource.as_mut() {
                resource.pause();
            }
            self.set_status(PlaybackStatus::Paused);
        }
    }

    /// Pause when playing, otherwise play
    pub fn toggle_play_pause(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stop playback and release the held resource
    pub fn stop(&mut self) {
        if let Some(mut resource) = self.resource.take() {
            resource.release();
        }
        self.set_status(PlaybackStatus::Stopped);
    }

    /// Relocate within the current track.
    ///
    /// The reported position updates to `target_secs` immediately without
    /// waiting for the resource to confirm, favoring responsiveness over fidelity;
    /// the next tick resynchronizes.
    pub fn seek(&mut self, target_secs: f64) -> Result<()> {
        let Some(resource) = self.resource.as_mut() else {
            return Err(PlaybackError::NoTrackLoaded);
        };

        let target = if target_secs.is_finite() {
            target_secs.max(0.0)
        } else {
            0.0
        };
        resource.seek(target);
        self.position_secs = target;
        self.pending_events.push(SessionEvent::PositionChanged {
            position_secs: target,
        });
        self.refresh_lyric_cursor();
        Ok(())
    }

    // ===== Volume =====

    /// Set the stored volume, clamped to `[0, 1]`.
    ///
    /// Applied to the resource immediately unless muted; the stored value
    /// survives mute so unmuting restores it.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if !self.muted {
            if let Some(resource) = self.resource.as_mut() {
                resource.set_volume(self.volume);
            }
        }
        self.pending_events.push(SessionEvent::VolumeChanged {
            volume: self.volume,
            muted: self.muted,
        });
    }

    /// Flip mute and reapply the effective volume
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        let effective = self.effective_volume();
        if let Some(resource) = self.resource.as_mut() {
            resource.set_volume(effective);
        }
        self.pending_events.push(SessionEvent::VolumeChanged {
            volume: self.volume,
            muted: self.muted,
        });
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    // ===== Resource signals =====

    /// React to a signal forwarded from the acquired resource.
    ///
    /// Signals arriving while no resource is held are dropped.
    pub fn handle_signal(&mut self, signal: ResourceSignal) {
        if self.resource.is_none() {
            debug!(?signal, "ignoring resource signal: no resource held");
            return;
        }

        match signal {
            ResourceSignal::Ready => self.on_ready(),
            ResourceSignal::Playing => self.set_status(PlaybackStatus::Playing),
            ResourceSignal::Paused => self.set_status(PlaybackStatus::Paused),
            ResourceSignal::Ended => self.on_ended(),
            ResourceSignal::LoadError(message) | ResourceSignal::PlayError(message) => {
                self.on_failure(message);
            }
        }
    }

    /// Ready signal: enter `Playing`, notify the catalog, record history,
    /// and install lyrics for the new track.
    fn on_ready(&mut self) {
        if self.status != PlaybackStatus::Loading {
            return;
        }
        self.set_status(PlaybackStatus::Playing);

        let Some(item) = self.current.clone() else {
            return;
        };

        // Fire-and-forget: a failed increment never interrupts playback
        if let Err(err) = self.catalog.increment_play_count(&item.id) {
            warn!(track_id = %item.id, "play count increment failed: {err}");
        }

        self.history.record(&item);
        self.bridge.save_history(self.history.list());

        match &item.lyrics {
            None => {}
            Some(LyricsRef::Inline(source)) => {
                let source = source.clone();
                self.set_lyrics(Some(&source));
            }
            Some(LyricsRef::Locator(_)) => match self.catalog.resolve_lyrics(&item) {
                Ok(Some(source)) => self.set_lyrics(Some(&source)),
                Ok(None) => {}
                Err(err) => {
                    warn!(track_id = %item.id, "lyric resolution failed: {err}");
                }
            },
        }
    }

    /// Ended signal: advance under the active policy, or stop when the
    /// queue has nothing to offer.
    fn on_ended(&mut self) {
        if self.queue.advance(self.repeat).is_some() {
            if let Some(next) = self.queue.current_item().cloned() {
                self.load_and_play(next);
                return;
            }
        }

        if let Some(mut resource) = self.resource.take() {
            resource.release();
        }
        self.set_status(PlaybackStatus::Stopped);
    }

    /// Load or playback fault: stop without auto-advancing, so a broken
    /// track cannot cascade into a next-track loop.
    fn on_failure(&mut self, message: String) {
        error!("playback fault: {message}");
        if let Some(mut resource) = self.resource.take() {
            resource.release();
        }
        self.set_status(PlaybackStatus::Stopped);
        self.pending_events
            .push(SessionEvent::PlaybackFailed { message });
    }

    // ===== Position sampling & lyrics =====

    /// Sample the resource position; called by the host on a fixed short
    /// interval. Ignored outside `Playing`.
    pub fn tick(&mut self) {
        if self.status != PlaybackStatus::Playing {
            return;
        }
        let Some(resource) = self.resource.as_ref() else {
            return;
        };

        self.position_secs = resource.position();
        self.pending_events.push(SessionEvent::PositionChanged {
            position_secs: self.position_secs,
        });
        self.refresh_lyric_cursor();
    }

    /// Install a timed-text payload for the current track.
    ///
    /// `None` clears the installed lyrics. The active line is recomputed at
    /// the current position.
    pub fn set_lyrics(&mut self, source: Option<&str>) {
        self.lyrics = source.map(parse_lrc).unwrap_or_default();
        self.refresh_lyric_cursor_forced();
    }

    fn refresh_lyric_cursor(&mut self) {
        let active = active_line(&self.lyrics, self.position_secs);
        if active != self.active_lyric {
            self.active_lyric = active;
            self.pending_events
                .push(SessionEvent::LyricLineChanged { line: active });
        }
    }

    fn refresh_lyric_cursor_forced(&mut self) {
        let previous = self.active_lyric.take();
        self.active_lyric = active_line(&self.lyrics, self.position_secs);
        if self.active_lyric != previous {
            self.pending_events.push(SessionEvent::LyricLineChanged {
                line: self.active_lyric,
            });
        }
    }

    // ===== Persistence & teardown =====

    /// Write the current snapshot to durable storage (best-effort)
    pub fn persist_now(&mut self) {
        let snapshot = Snapshot {
            last_item_id: self.current.as_ref().map(|i| i.id.clone()),
            position_secs: self.position_secs,
            volume: self.volume,
            repeat: self.repeat,
        };
        self.bridge.save_snapshot(&snapshot);
    }

    /// Tear the session down: snapshot state, release the resource, and
    /// reset to `Idle`. Safe to call multiple times; only the first call
    /// after activity writes the snapshot.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.persist_now();
            self.disposed = true;
        }

        if let Some(mut resource) = self.resource.take() {
            resource.release();
        }
        self.current = None;
        self.position_secs = 0.0;
        self.lyrics.clear();
        self.active_lyric = None;
        self.set_status(PlaybackStatus::Idle);
    }

    // ===== History =====

    /// Play history, most recent first
    pub fn history(&self) -> &[PlayableItem] {
        self.history.list()
    }

    /// Forget the play history, including the persisted record
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.bridge.clear_history();
    }

    // ===== Observers =====

    /// Current playback status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Elapsed position within the current track, in seconds
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Stored volume in `[0, 1]` (unaffected by mute)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether output is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Active repeat policy
    pub fn repeat(&self) -> RepeatPolicy {
        self.repeat
    }

    /// Change the repeat policy
    pub fn set_repeat(&mut self, policy: RepeatPolicy) {
        self.repeat = policy;
    }

    /// The currently loaded track, if any
    pub fn current_item(&self) -> Option<&PlayableItem> {
        self.current.as_ref()
    }

    /// Current queue index
    pub fn current_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    /// Queue contents in order
    pub fn queue_items(&self) -> &[PlayableItem] {
        self.queue.items()
    }

    /// Number of items in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Installed lyric lines, sorted by time
    pub fn lyrics(&self) -> &[LyricLine] {
        &self.lyrics
    }

    /// Index of the active lyric line, if one applies
    pub fn active_lyric(&self) -> Option<usize> {
        self.active_lyric
    }

    /// Drain the pending session events
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.status != status {
            debug!(?status, "playback status changed");
            self.status = status;
            self.pending_events
                .push(SessionEvent::StatusChanged { status });
        }
    }
}
