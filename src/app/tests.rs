use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::*;
use crate::ambient::{AmbientCycler, Palette};
use crate::library::{AudioRef, Catalog, CoverRef, Track};
use crate::playback::fake::FakePlayer;
use crate::playback::{self, PlayerCmd, PlayerStatus, RepeatMode};

const MS: Duration = Duration::from_millis(1);

fn t(title: &str) -> Track {
    Track {
        title: title.into(),
        artist: None,
        album: None,
        display: title.into(),
        audio: AudioRef {
            path: PathBuf::from(format!("{title}.mp3")),
            duration: None,
        },
        cover: CoverRef::None,
    }
}

fn app(n: usize, now: Instant) -> App {
    let catalog = Catalog::new((0..n).map(|i| t(&format!("song{i}"))).collect());
    let ambient = AmbientCycler::new(
        Palette::default(),
        Duration::from_millis(2100),
        Duration::from_millis(2000),
        now,
    );
    App::new(catalog, ambient, Duration::from_millis(300))
}

fn at(index: usize) -> PlayerStatus {
    PlayerStatus {
        is_playing: true,
        position_ms: 0,
        duration_ms: 60_000,
        current_index: Some(index),
    }
}

fn seeks(cmds: &[PlayerCmd]) -> usize {
    cmds.iter()
        .filter(|c| matches!(c, PlayerCmd::SeekToTrack { .. }))
        .count()
}

#[test]
fn start_loads_queue_once() {
    let t0 = Instant::now();
    let mut app = app(3, t0);
    app.repeat = RepeatMode::All;

    let mut player = FakePlayer::default();
    playback::execute(&mut player, app.start());
    let calls = player.take_calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(calls[0], PlayerCmd::AddItem(_)));
    assert_eq!(calls[3], PlayerCmd::Prepare);
    assert_eq!(calls[4], PlayerCmd::SetRepeatMode(RepeatMode::All));

    assert!(app.start().is_empty());
}

#[test]
fn user_swipe_issues_one_seek_and_no_bounce() {
    let t0 = Instant::now();
    let mut app = app(4, t0);
    app.observe(&at(0), t0);

    assert!(app.dispatch(Action::ShowPage(2), t0).is_empty());
    assert!(app.tick(t0 + 100 * MS).is_empty());

    // The player has not caught up yet.
    app.observe(&at(0), t0 + 150 * MS);
    assert_eq!(app.pager.target_page(), 2);

    let cmds = app.tick(t0 + 300 * MS);
    assert_eq!(
        cmds,
        vec![PlayerCmd::SeekToTrack {
            index: 2,
            offset_ms: 0
        }]
    );
    assert_eq!(app.current_index(), 2);

    // Stale report from before the seek landed.
    app.observe(&at(0), t0 + 310 * MS);
    assert!(!app.pager.is_animating());
    assert_eq!(app.current_index(), 2);

    app.observe(&at(2), t0 + 320 * MS);
    assert!(!app.pager.is_animating());
    assert_eq!(app.pager.target_page(), 2);
    assert_eq!(seeks(&app.tick(t0 + 1000 * MS)), 0);
}

#[test]
fn skip_during_pending_seek_is_followed() {
    let t0 = Instant::now();
    let mut app = app(5, t0);
    app.observe(&at(0), t0);

    app.dispatch(Action::ShowPage(2), t0);
    assert_eq!(seeks(&app.tick(t0 + 300 * MS)), 1);
    assert_eq!(app.dispatch(Action::Next, t0 + 310 * MS), vec![PlayerCmd::SeekToNext]);

    // Both commands landed between two polls.
    app.observe(&at(3), t0 + 340 * MS);
    assert_eq!(app.current_index(), 3);
    assert_eq!(app.pager.target_page(), 3);
    assert!(app.tick(t0 + 700 * MS).is_empty());

    // Natural advance keeps being followed.
    app.observe(&at(4), t0 + 800 * MS);
    assert_eq!(app.current_index(), 4);
    assert_eq!(app.pager.target_page(), 4);
    assert!(app.tick(t0 + 1200 * MS).is_empty());
    assert_eq!(app.pager.current_page(t0 + 1200 * MS), 4);
    assert_eq!(app.current_track().map(|t| t.title.as_str()), Some("song4"));
}

#[test]
fn player_advance_scrolls_carousel_without_seeking() {
    let t0 = Instant::now();
    let mut app = app(3, t0);
    app.observe(&at(0), t0);
    assert!(!app.pager.is_animating());

    app.observe(&at(1), t0 + 10 * MS);
    assert!(app.pager.is_animating());
    assert_eq!(app.pager.target_page(), 1);
    assert_eq!(app.current_index(), 1);

    // Settling a programmatic scroll is not a swipe.
    assert!(app.tick(t0 + 400 * MS).is_empty());
    assert_eq!(app.pager.current_page(t0 + 400 * MS), 1);

    app.observe(&at(1), t0 + 500 * MS);
    assert!(!app.pager.is_animating());
}

#[test]
fn swipe_to_settled_page_does_nothing() {
    let t0 = Instant::now();
    let mut app = app(3, t0);
    app.observe(&at(0), t0);
    app.dispatch(Action::Swipe(-1), t0);
    assert!(app.tick(t0 + 400 * MS).is_empty());
}

#[test]
fn swipe_there_and_back_cancels_out() {
    let t0 = Instant::now();
    let mut app = app(3, t0);
    app.observe(&at(0), t0);
    app.dispatch(Action::Swipe(1), t0);
    app.dispatch(Action::Swipe(-1), t0 + 50 * MS);
    assert!(app.tick(t0 + 400 * MS).is_empty());
    assert_eq!(app.current_index(), 0);
}

#[test]
fn transport_actions_read_mirrored_state() {
    let t0 = Instant::now();
    let mut app = app(2, t0);

    assert_eq!(app.dispatch(Action::TogglePlayPause, t0), vec![PlayerCmd::Play]);

    app.observe(
        &PlayerStatus {
            is_playing: true,
            position_ms: 10_000,
            duration_ms: 80_000,
            current_index: Some(0),
        },
        t0,
    );
    assert_eq!(app.dispatch(Action::TogglePlayPause, t0), vec![PlayerCmd::Pause]);
    assert_eq!(
        app.dispatch(Action::SeekToFraction(0.25), t0),
        vec![PlayerCmd::SeekToAbsolute(20_000)]
    );
    assert_eq!(
        app.dispatch(Action::ScrubBy(-5), t0),
        vec![PlayerCmd::SeekToAbsolute(5_000)]
    );
    assert_eq!(app.dispatch(Action::Next, t0), vec![PlayerCmd::SeekToNext]);
    assert_eq!(app.dispatch(Action::Previous, t0), vec![PlayerCmd::SeekToPrevious]);
}

#[test]
fn cycle_repeat_updates_mode() {
    let t0 = Instant::now();
    let mut app = app(1, t0);
    assert_eq!(
        app.dispatch(Action::CycleRepeat, t0),
        vec![PlayerCmd::SetRepeatMode(RepeatMode::All)]
    );
    assert_eq!(app.repeat, RepeatMode::All);
}

#[test]
fn tick_drives_ambient_cycle() {
    let t0 = Instant::now();
    let mut app = app(1, t0);
    for step in 1..=9u32 {
        app.tick(t0 + step * Duration::from_millis(2100));
    }
    assert_eq!(app.ambient.palette_index(), 0);
}

#[test]
fn empty_catalog_is_harmless() {
    let t0 = Instant::now();
    let mut app = app(0, t0);
    assert_eq!(app.start(), vec![PlayerCmd::Prepare, PlayerCmd::SetRepeatMode(RepeatMode::Off)]);
    assert!(app.current_track().is_none());
    assert!(app.dispatch(Action::Swipe(1), t0).is_empty());
    assert!(app.tick(t0 + 400 * MS).is_empty());
}
