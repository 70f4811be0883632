use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::playback::{self, Player};
use crate::ui::{self, ScreenLayout};

use super::input::{self, Input, MouseState};

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Geometry of the last drawn frame, for mouse hit-testing.
    pub layout: ScreenLayout,
    pub mouse: MouseState,
}

/// Main terminal event loop: polls the player, advances timers, draws, and
/// turns input into player commands. Returns `Ok(())` when quit is requested.
pub fn run<P: Player>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut P,
    state: &mut EventLoopState,
) -> anyhow::Result<()> {
    let tick = Duration::from_millis(settings.ui.tick_ms.max(1));

    playback::execute(player, app.start());

    loop {
        let now = Instant::now();
        app.observe(&player.status(), now);
        let cmds = app.tick(now);
        playback::execute(player, cmds);

        terminal.draw(|f| {
            state.layout = ui::draw(f, app, now);
        })?;

        // Wake early for a palette step.
        let wait = tick.min(app.ambient.next_step_at().saturating_duration_since(now));
        if !event::poll(wait)? {
            continue;
        }

        let now = Instant::now();
        let action = match event::read()? {
            Event::Key(key) => match input::key_input(key, app.scrub_seconds) {
                Some(Input::Quit) => {
                    log::info!("quit requested");
                    return Ok(());
                }
                Some(Input::Action(action)) => Some(action),
                None => None,
            },
            Event::Mouse(mouse) => state.mouse.handle(mouse, &state.layout, app, now),
            _ => None,
        };

        if let Some(action) = action {
            log::debug!("action {action:?}");
            let cmds = app.dispatch(action, now);
            playback::execute(player, cmds);
        }
    }
}
