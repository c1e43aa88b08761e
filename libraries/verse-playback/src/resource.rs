//! Opaque audio resource traits
//!
//! Abstracts the platform audio primitive (an HTML5/Howler-style handle on
//! the web, or any other backend) so the session logic runs against fakes
//! in tests.

use serde::{Deserialize, Serialize};

/// Factory for acquired audio resources.
///
/// `acquire` must return promptly with an unready handle; readiness and
/// failure arrive later as [`ResourceSignal`]s.
pub trait AudioBackend: Send {
    /// Begin loading the audio at `locator` and return the live handle
    fn acquire(&mut self, locator: &str) -> Box<dyn AudioResource>;
}

/// The live handle to platform audio playback.
///
/// Exclusively owned by the session; no other component may touch it. All
/// methods are commands; outcomes are reported back through
/// [`ResourceSignal`]s forwarded by the host.
pub trait AudioResource: Send {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Relocate to `position_secs` from the start of the track
    fn seek(&mut self, position_secs: f64);

    /// Set the output volume in `[0, 1]`
    fn set_volume(&mut self, volume: f32);

    /// Current playback position in seconds
    fn position(&self) -> f64;

    /// Release the underlying platform resource.
    ///
    /// Called exactly once, before the handle is dropped. After release the
    /// resource must stop emitting signals.
    fn release(&mut self);
}

/// Signals emitted by an acquired resource and forwarded by the host into
/// [`crate::PlaybackSession::handle_signal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResourceSignal {
    /// The resource finished loading and can produce audio
    Ready,

    /// Playback started or resumed
    Playing,

    /// Playback paused
    Paused,

    /// The track played to its end
    Ended,

    /// The resource could not be acquired or decoded
    LoadError(String),

    /// The resource faulted mid-play
    PlayError(String),
}
