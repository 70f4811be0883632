//! Commands and shared state of the audio engine.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::library::AudioRef;
use crate::playback::RepeatMode;

#[derive(Debug)]
pub enum AudioCmd {
    /// Append an item to the end of the queue.
    AddItem(AudioRef),
    /// Load the first queued item, paused.
    Prepare,
    /// Play now, or as soon as an item is loaded.
    Play,
    Pause,
    /// Seek inside the current item.
    SeekTo(Duration),
    /// Jump to another item, starting `offset` into it.
    SeekToTrack { index: usize, offset: Duration },
    Previous,
    Next,
    SetRepeat(RepeatMode),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Playback state published by the audio thread.
#[derive(Debug, Clone, Default)]
pub struct PlaybackInfo {
    /// Queue index of the loaded item.
    pub index: Option<usize>,
    pub playing: bool,
    /// When the current run of playback started; `None` while paused.
    pub started_at: Option<Instant>,
    /// Position reached before `started_at`.
    pub accumulated: Duration,
    /// Length of the loaded item, if known.
    pub duration: Option<Duration>,
}

impl PlaybackInfo {
    pub fn position(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |st| now.saturating_duration_since(st))
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
