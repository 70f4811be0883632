use crate::library::AudioRef;

use super::{Player, PlayerCmd, PlayerStatus, RepeatMode};

/// Records every call and reports a status the test controls.
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub calls: Vec<PlayerCmd>,
    pub status: PlayerStatus,
}

impl FakePlayer {
    pub fn take_calls(&mut self) -> Vec<PlayerCmd> {
        std::mem::take(&mut self.calls)
    }
}

impl Player for FakePlayer {
    fn add_item(&mut self, item: &AudioRef) {
        self.calls.push(PlayerCmd::AddItem(item.clone()));
    }

    fn prepare(&mut self) {
        self.calls.push(PlayerCmd::Prepare);
    }

    fn play(&mut self) {
        self.calls.push(PlayerCmd::Play);
    }

    fn pause(&mut self) {
        self.calls.push(PlayerCmd::Pause);
    }

    fn seek_to_absolute(&mut self, position_ms: u64) {
        self.calls.push(PlayerCmd::SeekToAbsolute(position_ms));
    }

    fn seek_to_track(&mut self, index: usize, offset_ms: u64) {
        self.calls.push(PlayerCmd::SeekToTrack { index, offset_ms });
    }

    fn seek_to_previous(&mut self) {
        self.calls.push(PlayerCmd::SeekToPrevious);
    }

    fn seek_to_next(&mut self) {
        self.calls.push(PlayerCmd::SeekToNext);
    }

    fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.calls.push(PlayerCmd::SetRepeatMode(mode));
    }

    fn status(&self) -> PlayerStatus {
        self.status
    }
}
