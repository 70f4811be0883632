use std::env;
use std::fs::OpenOptions;

use env_logger::{Builder, Target};

use crate::config::LoggingSettings;

/// Filter directives to use: `RUST_LOG` when set, else the configured level.
fn filter_spec(configured: &str, from_env: Option<String>) -> String {
    from_env
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

/// Send log records to the configured file. The terminal belongs to the UI,
/// so without a file nothing is logged.
pub fn init(settings: &LoggingSettings) {
    let Some(path) = settings.file.as_ref() else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("reel: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let filters = filter_spec(&settings.level, env::var("RUST_LOG").ok());
    let mut builder = Builder::new();
    builder
        .parse_filters(&filters)
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)));
    if let Err(e) = builder.try_init() {
        eprintln!("reel: logger already initialized: {e}");
    }
}
