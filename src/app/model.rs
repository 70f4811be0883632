//! Application model types: `App` and `Action`.
//!
//! `App` is the store the screen renders from. Its methods never talk to the
//! player; they return the [`PlayerCmd`]s the runtime must execute.

use std::time::{Duration, Instant};

use crate::ambient::{AmbientColors, AmbientCycler};
use crate::carousel::{Pager, ScrollOrigin};
use crate::library::{Catalog, Track};
use crate::playback::{
    CarouselBinder, IndexChange, PlaybackMirror, PlaybackSnapshot, PlayerCmd, PlayerStatus,
    Reconcile, RepeatMode, transport,
};

/// A user intent, already decoded from keys or mouse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    TogglePlayPause,
    Previous,
    Next,
    /// Move the carousel by this many pages.
    Swipe(i32),
    /// Bring a specific cover to the center.
    ShowPage(usize),
    /// Seek to a fraction of the current track.
    SeekToFraction(f32),
    /// Seek relative to the current position, in seconds.
    ScrubBy(i64),
    CycleRepeat,
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub pager: Pager,
    pub ambient: AmbientCycler,
    pub repeat: RepeatMode,
    pub scrub_seconds: u64,
    pub show_help: bool,
    mirror: PlaybackMirror,
    binder: CarouselBinder,
}

impl App {
    pub fn new(catalog: Catalog, ambient: AmbientCycler, carousel_animation: Duration) -> Self {
        let pager = Pager::new(catalog.len(), carousel_animation);
        Self {
            catalog,
            pager,
            ambient,
            repeat: RepeatMode::default(),
            scrub_seconds: 5,
            show_help: true,
            mirror: PlaybackMirror::new(),
            binder: CarouselBinder::new(),
        }
    }

    pub fn snapshot(&self) -> &PlaybackSnapshot {
        self.mirror.snapshot()
    }

    /// The track the screen treats as current.
    pub fn current_index(&self) -> usize {
        self.binder.current_index()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.catalog.get(self.current_index())
    }

    pub fn colors(&self, now: Instant) -> AmbientColors {
        self.ambient.colors(now)
    }

    /// One-time queue setup. Later calls return nothing.
    pub fn start(&mut self) -> Vec<PlayerCmd> {
        if self.binder.is_loaded() {
            return Vec::new();
        }
        let mut cmds = self.binder.load(&self.catalog);
        cmds.push(PlayerCmd::SetRepeatMode(self.repeat));
        cmds
    }

    /// Feed a polled player status. Returns `true` if the snapshot changed.
    pub fn observe(&mut self, status: &PlayerStatus, now: Instant) -> bool {
        let changed = self.mirror.observe(status);
        let Some(index) = status.current_index else {
            return changed;
        };
        if let Reconcile::ScrollPager(page) = self.binder.reconcile(IndexChange::PlayerAdvance(index)) {
            log::debug!("player moved to {index}, following");
            self.pager.animate_to_page(page, now);
        }
        changed
    }

    /// Advance timers: the ambient palette and the carousel animation.
    pub fn tick(&mut self, now: Instant) -> Vec<PlayerCmd> {
        if self.ambient.tick(now) {
            log::trace!("ambient palette {}", self.ambient.palette_index());
        }

        let mut cmds = Vec::new();
        if let Some((page, origin)) = self.pager.tick(now) {
            log::debug!("carousel settled on {page} ({origin:?})");
            if origin == ScrollOrigin::User {
                cmds.extend(self.binder.reconcile(IndexChange::UserSwipe(page)).command());
                if let Some(pending) = self.binder.pending_seek() {
                    log::debug!("waiting for player to reach {pending}");
                }
            }
        }
        cmds
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) -> Vec<PlayerCmd> {
        let snapshot = *self.mirror.snapshot();
        match action {
            Action::TogglePlayPause => vec![transport::toggle_play_pause(&snapshot)],
            Action::Previous => vec![transport::previous()],
            Action::Next => vec![transport::next()],
            Action::Swipe(delta) => {
                self.pager.swipe(delta, now);
                Vec::new()
            }
            Action::ShowPage(page) => {
                self.pager.show_page(page, now);
                Vec::new()
            }
            Action::SeekToFraction(f) => {
                vec![transport::seek_to_fraction(f, snapshot.duration_ms)]
            }
            Action::ScrubBy(secs) => vec![transport::scrub_by(&snapshot, secs)],
            Action::CycleRepeat => {
                let (mode, cmd) = transport::cycle_repeat(self.repeat);
                self.repeat = mode;
                vec![cmd]
            }
        }
    }
}
