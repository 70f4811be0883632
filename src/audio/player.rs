use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};

use crate::library::AudioRef;
use crate::playback::{Player, PlayerStatus, RepeatMode};

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Handle to the audio thread. Commands are fire-and-forget; state is read
/// back from the shared [`PlaybackInfo`].
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    join: Option<JoinHandle<()>>,
}

impl AudioPlayer {
    /// Start the audio thread and wait until it has opened the output device.
    pub fn new() -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);
        let playback: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let join = spawn_audio_thread(rx, playback.clone(), ready_tx);
        ready_rx
            .recv()
            .context("audio thread exited during startup")?
            .map_err(|e| anyhow!("no audio output device: {e}"))?;

        Ok(Self {
            tx,
            playback,
            join: Some(join),
        })
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            log::warn!("audio thread is gone, dropped {:?}", e.0);
        }
    }

    /// Fade out, stop the audio thread and wait for it.
    pub fn shutdown(&mut self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl Player for AudioPlayer {
    fn add_item(&mut self, item: &AudioRef) {
        self.send(AudioCmd::AddItem(item.clone()));
    }

    fn prepare(&mut self) {
        self.send(AudioCmd::Prepare);
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn seek_to_absolute(&mut self, position_ms: u64) {
        self.send(AudioCmd::SeekTo(Duration::from_millis(position_ms)));
    }

    fn seek_to_track(&mut self, index: usize, offset_ms: u64) {
        self.send(AudioCmd::SeekToTrack {
            index,
            offset: Duration::from_millis(offset_ms),
        });
    }

    fn seek_to_previous(&mut self) {
        self.send(AudioCmd::Previous);
    }

    fn seek_to_next(&mut self) {
        self.send(AudioCmd::Next);
    }

    fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.send(AudioCmd::SetRepeat(mode));
    }

    fn status(&self) -> PlayerStatus {
        let info = match self.playback.lock() {
            Ok(info) => info.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        let position = info.position(Instant::now());
        PlayerStatus {
            is_playing: info.playing,
            position_ms: position.as_millis() as u64,
            duration_ms: info.duration.map_or(0, |d| d.as_millis() as i64),
            current_index: info.index,
        }
    }
}
