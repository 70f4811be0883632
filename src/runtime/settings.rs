use crate::config;

/// Load and validate settings. The terminal is still ours to print to, so
/// problems go to stderr and the defaults are used instead.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("reel: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("reel: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
