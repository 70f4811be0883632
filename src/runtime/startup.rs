use std::time::{Duration, Instant};

use crate::ambient::{AmbientCycler, Palette};
use crate::app::App;
use crate::config;
use crate::library::Catalog;
use crate::playback::RepeatMode;

pub fn repeat_mode(setting: config::RepeatModeSetting) -> RepeatMode {
    match setting {
        config::RepeatModeSetting::Off => RepeatMode::Off,
        config::RepeatModeSetting::All => RepeatMode::All,
        config::RepeatModeSetting::One => RepeatMode::One,
    }
}

/// The configured palette, or the built-in one.
pub fn palette(settings: &config::Settings) -> Palette {
    match settings.palettes() {
        Ok(Some((light, dark))) => Palette::new(light, dark).unwrap_or_default(),
        Ok(None) => Palette::default(),
        Err(msg) => {
            log::warn!("ignoring ambient palette: {msg}");
            Palette::default()
        }
    }
}

/// Build the app store with playback and UI defaults applied.
pub fn build_app(catalog: Catalog, settings: &config::Settings, now: Instant) -> App {
    let ambient = AmbientCycler::new(
        palette(settings),
        Duration::from_millis(settings.ambient.period_ms),
        Duration::from_millis(settings.ambient.fade_ms),
        now,
    );
    let mut app = App::new(
        catalog,
        ambient,
        Duration::from_millis(settings.ui.carousel_animation_ms),
    );
    app.repeat = repeat_mode(settings.playback.repeat);
    app.scrub_seconds = settings.controls.scrub_seconds;
    app.show_help = settings.ui.show_help;
    app
}
