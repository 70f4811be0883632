//! Playback synchronization core.
//!
//! The player is an external collaborator behind the [`Player`] trait. State
//! code never calls it directly: it returns [`PlayerCmd`] values which the
//! runtime hands to [`execute`] once per event, keeping the mirror, binder and
//! transport logic pure.

mod binder;
mod mirror;
pub mod transport;

pub use binder::{CarouselBinder, IndexChange, Reconcile};
pub use mirror::{PlaybackMirror, PlaybackSnapshot};

use crate::library::AudioRef;

/// What happens when the current item ends or the user skips past an end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Stop after the last item; no wrap on skip.
    #[default]
    Off,
    /// Wrap around the queue.
    All,
    /// Replay the current item when it ends.
    One,
}

impl RepeatMode {
    /// `Off -> All -> One -> Off`.
    pub fn next(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RepeatMode::Off => "repeat off",
            RepeatMode::All => "repeat all",
            RepeatMode::One => "repeat one",
        }
    }
}

/// Observable player state, read once per event-loop tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PlayerStatus {
    pub is_playing: bool,
    pub position_ms: u64,
    /// Duration of the current item; `<= 0` while unknown.
    pub duration_ms: i64,
    /// `None` until the queue has been prepared.
    pub current_index: Option<usize>,
}

/// A queue-based media player.
pub trait Player {
    fn add_item(&mut self, item: &AudioRef);
    fn prepare(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
    fn seek_to_absolute(&mut self, position_ms: u64);
    fn seek_to_track(&mut self, index: usize, offset_ms: u64);
    fn seek_to_previous(&mut self);
    fn seek_to_next(&mut self);
    fn set_repeat_mode(&mut self, mode: RepeatMode);
    fn status(&self) -> PlayerStatus;
}

/// A single fire-and-forget call on a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCmd {
    AddItem(AudioRef),
    Prepare,
    Play,
    Pause,
    SeekToAbsolute(u64),
    SeekToTrack { index: usize, offset_ms: u64 },
    SeekToPrevious,
    SeekToNext,
    SetRepeatMode(RepeatMode),
}

impl PlayerCmd {
    pub fn apply<P: Player + ?Sized>(self, player: &mut P) {
        match self {
            PlayerCmd::AddItem(item) => player.add_item(&item),
            PlayerCmd::Prepare => player.prepare(),
            PlayerCmd::Play => player.play(),
            PlayerCmd::Pause => player.pause(),
            PlayerCmd::SeekToAbsolute(ms) => player.seek_to_absolute(ms),
            PlayerCmd::SeekToTrack { index, offset_ms } => player.seek_to_track(index, offset_ms),
            PlayerCmd::SeekToPrevious => player.seek_to_previous(),
            PlayerCmd::SeekToNext => player.seek_to_next(),
            PlayerCmd::SetRepeatMode(mode) => player.set_repeat_mode(mode),
        }
    }
}

/// Apply `cmds` in order.
pub fn execute<P: Player + ?Sized>(player: &mut P, cmds: Vec<PlayerCmd>) {
    for cmd in cmds {
        log::debug!("player <- {cmd:?}");
        cmd.apply(player);
    }
}

#[cfg(test)]
pub(crate) mod fake;
