use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::ambient::Rgb;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_reel_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("REEL_CONFIG_PATH", "/tmp/reel-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/reel-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("reel")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("reel")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_repeat_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r##"
[playback]
repeat = "repeat-one"

[audio]
quit_fade_out_ms = 123

[controls]
scrub_seconds = 9

[ui]
tick_ms = 20
carousel_animation_ms = 150
show_help = false

[ambient]
period_ms = 1000
fade_ms = 900
light = ["#FFFFFF", "#000000"]
dark = ["#101010", "#202020"]

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
display_fields = ["filename"]
display_separator = "::"

[[library.tracks]]
title = "Retrichor"
audio = "music1.mp3"
cover = "cover1.png"

[[library.tracks]]
title = "Love Story"
audio = "music2.mp3"
"##,
    )
    .unwrap();

    let _g1 = EnvGuard::set("REEL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("REEL__AUDIO__QUIT_FADE_OUT_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.repeat, RepeatModeSetting::One);
    assert_eq!(s.audio.quit_fade_out_ms, 123);
    assert_eq!(s.controls.scrub_seconds, 9);
    assert_eq!(s.ui.tick_ms, 20);
    assert_eq!(s.ui.carousel_animation_ms, 150);
    assert!(!s.ui.show_help);
    assert_eq!(s.ambient.period_ms, 1000);
    assert_eq!(s.ambient.fade_ms, 900);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.display_separator, "::");
    assert!(matches!(s.library.display_fields[0], TrackDisplayField::Filename));
    assert_eq!(s.library.tracks.len(), 2);
    assert_eq!(s.library.tracks[0].title, "Retrichor");
    assert_eq!(
        s.library.tracks[0].cover.as_deref(),
        Some(std::path::Path::new("cover1.png"))
    );
    assert!(s.library.tracks[1].cover.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
quit_fade_out_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("REEL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("REEL__AUDIO__QUIT_FADE_OUT_MS", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.quit_fade_out_ms, 0);
}

#[test]
fn defaults_match_reference_timings() {
    let s = Settings::default();
    assert_eq!(s.ambient.period_ms, 2100);
    assert_eq!(s.ambient.fade_ms, 2000);
    assert_eq!(s.ui.carousel_animation_ms, 300);
    assert_eq!(s.playback.repeat, RepeatModeSetting::Off);
    assert!(s.logging.file.is_none());
    assert!(s.validate().is_ok());
    assert_eq!(s.palettes(), Ok(None));
}

#[test]
fn partial_toml_keeps_defaults_for_missing_sections() {
    let s: Settings = toml::from_str(
        r#"
[controls]
scrub_seconds = 30
"#,
    )
    .unwrap();
    assert_eq!(s.controls.scrub_seconds, 30);
    assert_eq!(s.ui.tick_ms, 33);
    assert_eq!(s.library.extensions.len(), 4);
}

#[test]
fn validate_rejects_zero_tick_and_period() {
    let mut s = Settings::default();
    s.ui.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ambient.period_ms = 0;
    assert!(s.validate().is_err());
}

#[test]
fn validate_rejects_mismatched_or_bad_palettes() {
    let mut s = Settings::default();
    s.ambient.light = vec!["#FFFFFF".into()];
    assert!(s.validate().is_err());

    s.ambient.dark = vec!["not-a-color".into()];
    let err = s.validate().unwrap_err();
    assert!(err.contains("ambient.dark"));

    s.ambient.dark = vec!["#414141".into()];
    assert_eq!(
        s.palettes(),
        Ok(Some((
            vec![Rgb::new(0xFF, 0xFF, 0xFF)],
            vec![Rgb::new(0x41, 0x41, 0x41)]
        )))
    );
}

#[test]
fn repeat_setting_accepts_aliases() {
    #[derive(serde::Deserialize)]
    struct Wrap {
        repeat: RepeatModeSetting,
    }
    let w: Wrap = toml::from_str(r#"repeat = "repeat_all""#).unwrap();
    assert_eq!(w.repeat, RepeatModeSetting::All);
    let w: Wrap = toml::from_str(r#"repeat = "none""#).unwrap();
    assert_eq!(w.repeat, RepeatModeSetting::Off);
}
