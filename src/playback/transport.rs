//! Transport gestures mapped to player commands.
//!
//! Every function emits exactly one command and never touches the player.

use super::{PlaybackSnapshot, PlayerCmd, RepeatMode};

pub fn previous() -> PlayerCmd {
    PlayerCmd::SeekToPrevious
}

pub fn next() -> PlayerCmd {
    PlayerCmd::SeekToNext
}

pub fn toggle_play_pause(snapshot: &PlaybackSnapshot) -> PlayerCmd {
    if snapshot.is_playing {
        PlayerCmd::Pause
    } else {
        PlayerCmd::Play
    }
}

/// Absolute seek to `fraction` of the track. Out-of-range or NaN fractions are
/// clamped into `[0, 1]`.
pub fn seek_to_fraction(fraction: f32, duration_ms: u64) -> PlayerCmd {
    let f = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let target = (f64::from(f) * duration_ms as f64).round() as u64;
    PlayerCmd::SeekToAbsolute(target.min(duration_ms))
}

/// Relative seek by `delta_secs`, kept inside the known duration.
pub fn scrub_by(snapshot: &PlaybackSnapshot, delta_secs: i64) -> PlayerCmd {
    let delta_ms = delta_secs.saturating_mul(1000);
    let mut target = snapshot.position_ms.saturating_add_signed(delta_ms);
    if snapshot.duration_ms > 0 {
        target = target.min(snapshot.duration_ms);
    }
    PlayerCmd::SeekToAbsolute(target)
}

/// Advance the repeat mode and emit the matching command.
pub fn cycle_repeat(current: RepeatMode) -> (RepeatMode, PlayerCmd) {
    let mode = current.next();
    (mode, PlayerCmd::SetRepeatMode(mode))
}
