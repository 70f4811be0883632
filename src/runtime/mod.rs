use std::env;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::AudioPlayer;
use crate::library::Catalog;

mod event_loop;
mod input;
mod logging;
mod settings;
mod startup;

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

pub fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);
    log::info!("reel {} starting", env!("CARGO_PKG_VERSION"));

    let dir = match env::args_os().nth(1) {
        Some(d) => PathBuf::from(d),
        None => env::current_dir().context("cannot read the current directory")?,
    };

    let catalog = Catalog::load(&dir, &settings.library);
    if catalog.is_empty() {
        log::warn!("no playable files in {}", dir.display());
    } else {
        log::info!("{} tracks in {}", catalog.len(), dir.display());
    }

    let mut player = AudioPlayer::new()?;
    let mut app = startup::build_app(catalog, &settings, Instant::now());

    enable_raw_mode()?;
    let run_result: anyhow::Result<()> = (|| {
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut player, &mut state)
    })();

    let restored = restore_terminal();
    player.shutdown(Duration::from_millis(settings.audio.quit_fade_out_ms));

    run_result?;
    restored.context("failed to restore the terminal")
}
