//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. The
//! whole screen sits on a diagonal gradient between the two animated ambient
//! colors; text uses the animated readable color on top of it.

mod format;
mod layout;

pub use format::format_mmss;
pub use layout::{ScreenLayout, fraction_at, page_at, point_in_rect};

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Instant;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ambient::Rgb;
use crate::app::App;
use crate::carousel::{cover_alpha, cover_scale};
use crate::library::{CoverRef, Track};

use layout::{Disc, cover_disc, visible_pages};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next song");
    map.insert("←/→", "browse covers");
    // H/L and r are filled dynamically.
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds and repeat mode.
fn controls_text(app: &App) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["space/p", "h/l", "←/→", "H/L", "r", "q"];
    order
        .iter()
        .filter_map(|k| match *k {
            "H/L" => Some(format!("[H/L] scrub -/+{}s", app.scrub_seconds)),
            "r" => Some(format!("[r] {}", app.repeat.label())),
            _ => CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}")),
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Artist and album of `track`, when tagged.
fn subtitle_text(track: &Track) -> String {
    [track.artist.as_deref(), track.album.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Diagonal two-color gradient filling the area, top-left to bottom-right.
struct Gradient {
    from: Rgb,
    to: Rgb,
}

impl Widget for Gradient {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = f32::from(area.width.max(1) - 1) + f32::from(area.height.max(1) - 1);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let along = f32::from(x - area.x) + f32::from(y - area.y);
                let t = if span > 0.0 { along / span } else { 0.0 };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(self.from.lerp(self.to, t).into());
                }
            }
        }
    }
}

/// A round cover: a white ring around a dark face, faded toward `backdrop`
/// by `alpha`, with a short label in the middle.
struct Cover<'a> {
    disc: Disc,
    alpha: f32,
    backdrop: Rgb,
    label: &'a str,
    clip: Rect,
}

impl Widget for Cover<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let bounds = self.disc.bounds(self.clip);
        let ring_width = (1.0 / self.disc.ry.max(1.0)).clamp(0.1, 0.5);
        let ring = self.backdrop.lerp(Rgb::WHITE, self.alpha);
        let face = self.backdrop.lerp(Rgb::DARK_GRAY, self.alpha);

        for y in bounds.top()..bounds.bottom() {
            for x in bounds.left()..bounds.right() {
                let d = self.disc.distance(x, y);
                if d > 1.0 {
                    continue;
                }
                let color = if d > 1.0 - ring_width { ring } else { face };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(color.into());
                }
            }
        }

        let row = self.disc.cy.floor() as u16;
        let room = (self.disc.rx * 2.0 * 0.6) as usize;
        if room == 0 || row < bounds.top() || row >= bounds.bottom() {
            return;
        }
        let label: String = self.label.chars().take(room).collect();
        let len = label.chars().count() as f32;
        let mut x = (self.disc.cx - len / 2.0).round().max(0.0) as u16;
        let fg = face.lerp(Rgb::WHITE, self.alpha);
        for ch in label.chars() {
            if x >= bounds.left() && x < bounds.right() && self.disc.contains(x, row) {
                if let Some(cell) = buf.cell_mut((x, row)) {
                    cell.set_char(ch);
                    cell.set_fg(fg.into());
                }
            }
            x = x.saturating_add(1);
        }
    }
}

fn cover_label(track: &Track) -> &str {
    match track.cover {
        CoverRef::None => "♪",
        CoverRef::File(_) | CoverRef::Embedded => track.title.as_str(),
    }
}

fn render_carousel(frame: &mut Frame, app: &App, area: Rect, backdrop: Rgb, now: Instant) {
    let position = app.pager.position(now);
    let pages = visible_pages(area, position, app.catalog.len());

    // Far covers first so the centered one ends up on top.
    let mut order: Vec<usize> = pages.collect();
    order.sort_by(|a, b| {
        let da = (*a as f32 - position).abs();
        let db = (*b as f32 - position).abs();
        db.total_cmp(&da)
    });

    for page in order {
        let Some(track) = app.catalog.get(page) else {
            continue;
        };
        let offset = app.pager.page_offset(page, now);
        let delta = page as f32 - position;
        let cover = Cover {
            disc: cover_disc(area, delta, cover_scale(offset)),
            alpha: cover_alpha(offset),
            backdrop,
            label: cover_label(track),
            clip: area,
        };
        frame.render_widget(cover, area);
    }
}

/// Scrub bar: a white track filled with dark gray up to `fraction`.
fn render_bar(frame: &mut Frame, area: Rect, fraction: f32) {
    let buf = frame.buffer_mut();
    let filled = (fraction.clamp(0.0, 1.0) * f32::from(area.width)).round() as u16;
    for x in area.left()..area.right() {
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            let color = if x - area.x < filled {
                Rgb::DARK_GRAY
            } else {
                Rgb::WHITE
            };
            cell.set_symbol(" ");
            cell.set_bg(color.into());
        }
    }
}

fn render_button(frame: &mut Frame, area: Rect, icon: &str) {
    let style = Style::default()
        .bg(Rgb::WHITE.into())
        .fg(Rgb::DARK_GRAY.into())
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::default(); usize::from(area.height / 2)];
    lines.push(Line::from(icon));
    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(button, area);
}

/// Render the entire UI into `frame` and return where things were drawn.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) -> ScreenLayout {
    let area = frame.area();
    let layout = ScreenLayout::new(area, app.show_help);
    let colors = app.colors(now);
    let text: Color = colors.text.into();

    frame.render_widget(
        Gradient {
            from: colors.foreground,
            to: colors.background,
        },
        area,
    );

    let (title, subtitle) = match app.current_track() {
        Some(track) => (track.title.clone(), subtitle_text(track)),
        None => ("no tracks".to_string(), String::new()),
    };
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(text).add_modifier(Modifier::BOLD)),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(subtitle)
            .alignment(Alignment::Center)
            .style(Style::default().fg(text)),
        layout.subtitle,
    );

    // Covers fade toward the middle of the gradient.
    let backdrop = colors.foreground.lerp(colors.background, 0.5);
    render_carousel(frame, app, layout.carousel, backdrop, now);

    let snapshot = app.snapshot();
    frame.render_widget(
        Paragraph::new(format_mmss(snapshot.duration_ms))
            .alignment(Alignment::Center)
            .style(Style::default().fg(text)),
        layout.total,
    );
    render_bar(frame, layout.bar, snapshot.scrub_fraction());
    frame.render_widget(
        Paragraph::new(format_mmss(snapshot.position_ms))
            .alignment(Alignment::Center)
            .style(Style::default().fg(text)),
        layout.elapsed,
    );

    render_button(frame, layout.previous, "⏮");
    render_button(
        frame,
        layout.play,
        if snapshot.is_playing { "⏸" } else { "▶" },
    );
    render_button(frame, layout.next, "⏭");

    if app.show_help {
        frame.render_widget(
            Paragraph::new(controls_text(app))
                .alignment(Alignment::Center)
                .style(Style::default().fg(text))
                .wrap(Wrap { trim: true }),
            layout.help,
        );
    }

    layout
}
