//! Terminal input decoded into app actions.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{Action, App};
use crate::ui::{self, ScreenLayout};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Input {
    Action(Action),
    Quit,
}

pub fn key_input(key: KeyEvent, scrub_seconds: u64) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let scrub = i64::try_from(scrub_seconds).unwrap_or(i64::MAX);
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Some(Input::Quit),
        KeyCode::Char('q') | KeyCode::Esc => return Some(Input::Quit),
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::TogglePlayPause,
        KeyCode::Char('h') => Action::Previous,
        KeyCode::Char('l') => Action::Next,
        KeyCode::Left => Action::Swipe(-1),
        KeyCode::Right => Action::Swipe(1),
        KeyCode::Char('H') => Action::ScrubBy(-scrub),
        KeyCode::Char('L') => Action::ScrubBy(scrub),
        KeyCode::Char('r') => Action::CycleRepeat,
        _ => return None,
    };
    Some(Input::Action(action))
}

/// Mouse gestures. Tracks an in-progress drag on the scrub bar.
#[derive(Debug, Default)]
pub struct MouseState {
    /// Column of the last drag position while the button is held on the bar.
    dragging_bar: Option<u16>,
}

impl MouseState {
    pub fn handle(
        &mut self,
        mouse: MouseEvent,
        layout: &ScreenLayout,
        app: &App,
        now: Instant,
    ) -> Option<Action> {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if ui::point_in_rect(x, y, layout.bar) {
                    self.dragging_bar = Some(x);
                    return Some(Action::SeekToFraction(ui::fraction_at(x, layout.bar)));
                }
                if ui::point_in_rect(x, y, layout.previous) {
                    return Some(Action::Previous);
                }
                if ui::point_in_rect(x, y, layout.play) {
                    return Some(Action::TogglePlayPause);
                }
                if ui::point_in_rect(x, y, layout.next) {
                    return Some(Action::Next);
                }
                let position = app.pager.position(now);
                let page = ui::page_at(layout.carousel, position, app.pager.page_count(), x, y)?;
                (page != app.pager.target_page()).then_some(Action::ShowPage(page))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(col) = self.dragging_bar.as_mut() {
                    *col = x;
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Seek once more where the drag ended.
                let col = self.dragging_bar.take()?;
                Some(Action::SeekToFraction(ui::fraction_at(col, layout.bar)))
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight
                if ui::point_in_rect(x, y, layout.carousel) =>
            {
                Some(Action::Swipe(1))
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft
                if ui::point_in_rect(x, y, layout.carousel) =>
            {
                Some(Action::Swipe(-1))
            }
            _ => None,
        }
    }
}
