//! Queue navigation rules.
//!
//! The audio thread owns a flat queue of items. These helpers decide which
//! queue index comes next for a skip or a natural end, per repeat mode.

use crate::playback::RepeatMode;

/// Manual skip forward. Wraps only in `RepeatMode::All`.
pub(crate) fn next_index(current: usize, len: usize, repeat: RepeatMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if current + 1 < len {
        Some(current + 1)
    } else if repeat == RepeatMode::All {
        Some(0)
    } else {
        None
    }
}

/// Manual skip back. Wraps only in `RepeatMode::All`.
pub(crate) fn previous_index(current: usize, len: usize, repeat: RepeatMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if current > 0 {
        Some(current.min(len) - 1)
    } else if repeat == RepeatMode::All {
        Some(len - 1)
    } else {
        None
    }
}

/// The item to load when `current` plays to its end. `None` means playback ends.
pub(crate) fn index_after_end(current: usize, len: usize, repeat: RepeatMode) -> Option<usize> {
    match repeat {
        RepeatMode::One if current < len => Some(current),
        _ => next_index(current, len, repeat),
    }
}
