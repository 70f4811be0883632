//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Flex, Layout, Margin, Rect};

const TIME_WIDTH: u16 = 7;
const BUTTON_WIDTH: u16 = 9;
const BUTTON_HEIGHT: u16 = 3;
const HELP_HEIGHT: u16 = 2;
/// Empty columns between neighbouring covers at full scale.
const COVER_GAP: f32 = 2.0;

/// Where everything sits for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub subtitle: Rect,
    pub carousel: Rect,
    pub total: Rect,
    pub bar: Rect,
    pub elapsed: Rect,
    pub previous: Rect,
    pub play: Rect,
    pub next: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, show_help: bool) -> Self {
        let [_, title, subtitle, _, carousel, _, time, _, buttons, _, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(if show_help { HELP_HEIGHT } else { 0 }),
        ])
        .areas(area);

        let [total, bar, elapsed] = Layout::horizontal([
            Constraint::Length(TIME_WIDTH),
            Constraint::Min(1),
            Constraint::Length(TIME_WIDTH),
        ])
        .areas(time.inner(Margin::new(2, 0)));
        let bar = bar.inner(Margin::new(1, 0));

        let [previous, play, next] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 3])
            .flex(Flex::SpaceAround)
            .areas(buttons.inner(Margin::new(4, 0)));

        Self {
            title,
            subtitle,
            carousel,
            total,
            bar,
            elapsed,
            previous,
            play,
            next,
            help,
        }
    }
}

pub fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Horizontal fraction of `bar` under `column`: 0 at the first cell, 1 at the
/// last.
pub fn fraction_at(column: u16, bar: Rect) -> f32 {
    if bar.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(bar.x).min(bar.width - 1);
    f32::from(offset) / f32::from(bar.width - 1)
}

/// An axis-aligned ellipse in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
}

impl Disc {
    /// Normalized distance of the center of cell `(x, y)` from the disc
    /// center; `<= 1` is inside.
    pub fn distance(&self, x: u16, y: u16) -> f32 {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return f32::INFINITY;
        }
        let nx = (f32::from(x) + 0.5 - self.cx) / self.rx;
        let ny = (f32::from(y) + 0.5 - self.cy) / self.ry;
        (nx * nx + ny * ny).sqrt()
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.distance(x, y) <= 1.0
    }

    /// Cells the disc may touch, clipped to `clip`.
    pub fn bounds(&self, clip: Rect) -> Rect {
        let left = (self.cx - self.rx).floor().max(0.0) as u16;
        let top = (self.cy - self.ry).floor().max(0.0) as u16;
        let right = (self.cx + self.rx).ceil().max(0.0) as u16;
        let bottom = (self.cy + self.ry).ceil().max(0.0) as u16;
        Rect::new(
            left,
            top,
            right.saturating_sub(left),
            bottom.saturating_sub(top),
        )
        .intersection(clip)
    }
}

/// Full-scale cover size in cells. Cells are about twice as tall as wide.
fn cover_size(carousel: Rect) -> (f32, f32) {
    let height = f32::from(carousel.height);
    let width = (height * 2.0).min(f32::from(carousel.width));
    (width, height)
}

/// The disc of a cover `delta` pages right of the visible position, scaled.
pub fn cover_disc(carousel: Rect, delta: f32, scale: f32) -> Disc {
    let (width, height) = cover_size(carousel);
    let spacing = width + COVER_GAP;
    Disc {
        cx: f32::from(carousel.x) + f32::from(carousel.width) / 2.0 + delta * spacing,
        cy: f32::from(carousel.y) + f32::from(carousel.height) / 2.0,
        rx: width * scale / 2.0,
        ry: height * scale / 2.0,
    }
}

/// Pages close enough to `position` to show up in `carousel`.
pub fn visible_pages(carousel: Rect, position: f32, page_count: usize) -> std::ops::Range<usize> {
    if page_count == 0 {
        return 0..0;
    }
    let (width, _) = cover_size(carousel);
    let spacing = (width + COVER_GAP).max(1.0);
    let reach = (f32::from(carousel.width) / 2.0 / spacing).ceil() + 1.0;
    let first = (position - reach).floor().max(0.0) as usize;
    let last = ((position + reach).ceil().max(0.0) as usize).min(page_count - 1);
    first..last + 1
}

/// The page whose cover is under `(x, y)`, if any.
pub fn page_at(
    carousel: Rect,
    position: f32,
    page_count: usize,
    x: u16,
    y: u16,
) -> Option<usize> {
    if !point_in_rect(x, y, carousel) {
        return None;
    }
    visible_pages(carousel, position, page_count).find(|&page| {
        let delta = page as f32 - position;
        let scale = crate::carousel::cover_scale(delta.abs());
        cover_disc(carousel, delta, scale).contains(x, y)
    })
}
