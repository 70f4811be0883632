use std::{env, path::PathBuf};

use crate::ambient::Rgb;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `REEL__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("REEL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.tick_ms == 0 {
            return Err("ui.tick_ms must be >= 1".to_string());
        }
        if self.ambient.period_ms == 0 {
            return Err("ambient.period_ms must be >= 1".to_string());
        }
        self.palettes().map(|_| ())
    }

    /// Parse the configured ambient palettes.
    ///
    /// Returns `None` when neither palette is configured (use the built-in ones).
    pub fn palettes(&self) -> Result<Option<(Vec<Rgb>, Vec<Rgb>)>, String> {
        let light = &self.ambient.light;
        let dark = &self.ambient.dark;
        if light.is_empty() && dark.is_empty() {
            return Ok(None);
        }
        if light.len() != dark.len() {
            return Err(format!(
                "ambient.light has {} colors but ambient.dark has {}",
                light.len(),
                dark.len()
            ));
        }
        let parse = |key: &str, list: &[String]| -> Result<Vec<Rgb>, String> {
            list.iter()
                .map(|s| Rgb::from_hex(s).ok_or_else(|| format!("{key}: invalid color {s:?}")))
                .collect()
        };
        Ok(Some((parse("ambient.light", light)?, parse("ambient.dark", dark)?)))
    }
}

/// Resolve the config path from `REEL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("REEL_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/reel/config.toml`
/// or `~/.config/reel/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("reel").join("config.toml"))
}
