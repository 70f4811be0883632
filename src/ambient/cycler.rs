use std::time::{Duration, Instant};

use crate::anim::{FAST_OUT_SLOW_IN, Tween};

use super::color::{Palette, Rgb};

/// A color that eases toward its latest target.
///
/// Retargeting mid-fade starts from the currently displayed color, so the
/// output never jumps.
#[derive(Debug, Copy, Clone)]
struct ColorAnimation {
    from: Rgb,
    to: Rgb,
    tween: Option<Tween>,
}

impl ColorAnimation {
    fn settled(color: Rgb) -> Self {
        Self {
            from: color,
            to: color,
            tween: None,
        }
    }

    fn value(&self, now: Instant) -> Rgb {
        match self.tween {
            Some(t) => self.from.lerp(self.to, t.value(now)),
            None => self.to,
        }
    }

    fn animate_to(&mut self, target: Rgb, now: Instant, duration: Duration) {
        if target == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.tween = Some(Tween::new(now, duration, FAST_OUT_SLOW_IN));
    }
}

/// Animated colors for one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AmbientColors {
    /// Start of the background gradient.
    pub foreground: Rgb,
    /// End of the background gradient.
    pub background: Rgb,
    /// Readable text color over `foreground`.
    pub text: Rgb,
}

/// Dark gray over light foregrounds, white otherwise.
pub fn text_color_for(foreground: Rgb) -> Rgb {
    if foreground.luminance() > 0.5 {
        Rgb::DARK_GRAY
    } else {
        Rgb::WHITE
    }
}

/// Steps through the palette on a fixed period and cross-fades the output
/// colors after every step.
///
/// The timer re-arms from the instant it fired. A tick that arrives several
/// periods late advances a single step.
pub struct AmbientCycler {
    palette: Palette,
    index: usize,
    period: Duration,
    fade: Duration,
    next_step_at: Instant,
    foreground: ColorAnimation,
    background: ColorAnimation,
    text: ColorAnimation,
}

impl AmbientCycler {
    pub fn new(palette: Palette, period: Duration, fade: Duration, now: Instant) -> Self {
        let first = palette.pair(0);
        Self {
            palette,
            index: 0,
            period,
            fade,
            next_step_at: now + period,
            foreground: ColorAnimation::settled(first.foreground),
            background: ColorAnimation::settled(first.background),
            text: ColorAnimation::settled(text_color_for(first.foreground)),
        }
    }

    pub fn palette_index(&self) -> usize {
        self.index
    }

    /// When the next palette step is due.
    pub fn next_step_at(&self) -> Instant {
        self.next_step_at
    }

    /// Advance the timer. Returns `true` when the palette index moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let stepped = now >= self.next_step_at;
        if stepped {
            self.index = (self.index + 1) % self.palette.len();
            self.next_step_at = now + self.period;

            let pair = self.palette.pair(self.index);
            self.foreground.animate_to(pair.foreground, now, self.fade);
            self.background.animate_to(pair.background, now, self.fade);
        }

        let text_target = text_color_for(self.foreground.value(now));
        self.text.animate_to(text_target, now, self.fade);

        stepped
    }

    pub fn colors(&self, now: Instant) -> AmbientColors {
        AmbientColors {
            foreground: self.foreground.value(now),
            background: self.background.value(now),
            text: self.text.value(now),
        }
    }
}
