use std::sync::mpsc::{Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::library::AudioRef;
use crate::playback::RepeatMode;

use super::queue::{index_after_end, next_index, previous_index};
use super::sink::create_sink_at;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// How often the thread wakes up without commands to check for track ends.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback: PlaybackHandle,
    ready: SyncSender<Result<(), String>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => {
                let _ = ready.send(Ok(()));
                s
            }
            Err(e) => {
                let _ = ready.send(Err(e.to_string()));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut engine = Engine::new(stream, playback);
        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    engine.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => engine.handle(cmd),
                Err(RecvTimeoutError::Timeout) => engine.check_ended(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        log::debug!("audio thread exiting");
    })
}

/// The queue player owned by the audio thread.
struct Engine {
    stream: OutputStream,
    items: Vec<AudioRef>,
    prepared: bool,
    index: Option<usize>,
    sink: Option<Sink>,
    play_when_ready: bool,
    repeat: RepeatMode,
    playback: PlaybackHandle,
}

impl Engine {
    fn new(stream: OutputStream, playback: PlaybackHandle) -> Self {
        Self {
            stream,
            items: Vec::new(),
            prepared: false,
            index: None,
            sink: None,
            play_when_ready: false,
            repeat: RepeatMode::default(),
            playback,
        }
    }

    fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::AddItem(item) => self.items.push(item),
            AudioCmd::Prepare => self.prepare(),
            AudioCmd::Play => self.play(),
            AudioCmd::Pause => self.pause(),
            AudioCmd::SeekTo(offset) => {
                if let Some(i) = self.index {
                    self.load(i, offset);
                }
            }
            AudioCmd::SeekToTrack { index, offset } => {
                if index < self.items.len() {
                    self.load(index, offset);
                } else {
                    log::warn!("seek to missing item {index}");
                }
            }
            AudioCmd::Previous => self.previous(),
            AudioCmd::Next => {
                let next = self
                    .index
                    .and_then(|i| next_index(i, self.items.len(), self.repeat));
                if let Some(next) = next {
                    self.load(next, Duration::ZERO);
                }
            }
            AudioCmd::SetRepeat(mode) => {
                log::debug!("repeat mode {mode:?}");
                self.repeat = mode;
            }
            // Handled by the thread loop.
            AudioCmd::Quit { .. } => {}
        }
    }

    fn prepare(&mut self) {
        if self.prepared {
            return;
        }
        self.prepared = true;
        if self.index.is_none() && !self.items.is_empty() {
            self.load(0, Duration::ZERO);
        }
    }

    fn play(&mut self) {
        self.play_when_ready = true;
        let Some(sink) = self.sink.as_ref() else {
            // Nothing loaded (yet); playback starts on the next successful load.
            return;
        };
        sink.play();
        self.update(|info| {
            if info.started_at.is_none() {
                info.started_at = Some(Instant::now());
            }
            info.playing = true;
        });
    }

    fn pause(&mut self) {
        self.play_when_ready = false;
        if let Some(sink) = self.sink.as_ref() {
            sink.pause();
        }
        self.update(|info| {
            let now = Instant::now();
            info.accumulated = info.position(now);
            info.started_at = None;
            info.playing = false;
        });
    }

    fn previous(&mut self) {
        let previous = self
            .index
            .and_then(|i| previous_index(i, self.items.len(), self.repeat));
        if let Some(previous) = previous {
            self.load(previous, Duration::ZERO);
        }
    }

    /// Replace the sink with item `i` starting at `offset`.
    fn load(&mut self, i: usize, offset: Duration) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        let Some(item) = self.items.get(i) else {
            return;
        };

        match create_sink_at(&self.stream, item, offset) {
            Ok((sink, duration)) => {
                let playing = self.play_when_ready;
                if playing {
                    sink.play();
                }
                self.sink = Some(sink);
                self.index = Some(i);
                log::debug!("loaded item {i} at {offset:?}, playing: {playing}");
                self.update(|info| {
                    *info = PlaybackInfo {
                        index: Some(i),
                        playing,
                        started_at: playing.then(Instant::now),
                        accumulated: offset,
                        duration,
                    };
                });
            }
            Err(e) => {
                log::warn!("cannot play item {i}: {e:#}");
                self.index = Some(i);
                self.play_when_ready = false;
                self.update(|info| {
                    *info = PlaybackInfo {
                        index: Some(i),
                        duration: item.duration,
                        ..PlaybackInfo::default()
                    };
                });
            }
        }
    }

    /// Advance past an item that played to its end.
    fn check_ended(&mut self) {
        if !self.play_when_ready {
            return;
        }
        let (Some(sink), Some(i)) = (self.sink.as_ref(), self.index) else {
            return;
        };
        if !sink.empty() {
            return;
        }

        match index_after_end(i, self.items.len(), self.repeat) {
            Some(next) => {
                log::debug!("item {i} ended, advancing to {next}");
                self.load(next, Duration::ZERO);
            }
            None => {
                log::info!("end of queue");
                // Park on the start of the last item.
                self.play_when_ready = false;
                self.load(i, Duration::ZERO);
            }
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(ref s) = self.sink {
            // Fade out gently before stopping.
            if self.play_when_ready {
                fade_out_sink(s, fade_out_ms);
            }
            s.stop();
        }
        // Update shared state so the UI doesn't keep showing Playing.
        self.update(|info| info.playing = false);
    }

    fn update(&self, f: impl FnOnce(&mut PlaybackInfo)) {
        match self.playback.lock() {
            Ok(mut info) => f(&mut info),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    sink.set_volume(1.0);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(1.0 - t);
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
