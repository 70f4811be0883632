use super::PlayerStatus;

/// The latest observed playback state, as rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PlaybackSnapshot {
    pub is_playing: bool,
    pub position_ms: u64,
    /// Last known positive duration; 0 until one has been reported.
    pub duration_ms: u64,
    pub current_index: usize,
}

impl PlaybackSnapshot {
    /// Filled share of the scrub bar, in `[0, 1]`.
    ///
    /// Only non-zero while playing: a paused track shows an empty bar.
    pub fn scrub_fraction(&self) -> f32 {
        if !self.is_playing || self.duration_ms == 0 {
            return 0.0;
        }
        let f = self.position_ms as f32 / self.duration_ms as f32;
        if f.is_finite() { f.clamp(0.0, 1.0) } else { 0.0 }
    }
}

/// Republishes the player's signals as a [`PlaybackSnapshot`].
///
/// Each signal is tracked on its own; `observe` feeds all four from one poll.
#[derive(Debug, Default)]
pub struct PlaybackMirror {
    snapshot: PlaybackSnapshot,
}

impl PlaybackMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &PlaybackSnapshot {
        &self.snapshot
    }

    pub fn on_playing_changed(&mut self, is_playing: bool) -> bool {
        replace(&mut self.snapshot.is_playing, is_playing)
    }

    pub fn on_position_changed(&mut self, position_ms: u64) -> bool {
        replace(&mut self.snapshot.position_ms, position_ms)
    }

    /// Non-positive durations mean "unknown" and keep the last known value.
    pub fn on_duration_changed(&mut self, duration_ms: i64) -> bool {
        match u64::try_from(duration_ms) {
            Ok(d) if d > 0 => replace(&mut self.snapshot.duration_ms, d),
            _ => false,
        }
    }

    pub fn on_index_changed(&mut self, index: usize) -> bool {
        replace(&mut self.snapshot.current_index, index)
    }

    /// Feed one polled status. Returns `true` if any field changed.
    pub fn observe(&mut self, status: &PlayerStatus) -> bool {
        let mut changed = self.on_playing_changed(status.is_playing);
        changed |= self.on_position_changed(status.position_ms);
        changed |= self.on_duration_changed(status.duration_ms);
        if let Some(index) = status.current_index {
            changed |= self.on_index_changed(index);
        }
        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
