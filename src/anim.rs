//! Time-based animation helpers shared by the ambient colors and the carousel.
//!
//! Animations are driven by explicit `Instant`s passed in by the caller, so
//! the event loop decides when time advances and tests can replay exact
//! timelines.

use std::time::{Duration, Instant};

/// A cubic bezier easing curve anchored at (0, 0) and (1, 1).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Material "standard" curve: quick start, long gentle landing.
pub const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Map a linear time fraction in `[0, 1]` onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        // x(t) is monotonic for control points inside the unit square.
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        for _ in 0..32 {
            let mid = (lo + hi) / 2.0;
            if bezier(self.x1, self.x2, mid) < fraction {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(self.y1, self.y2, (lo + hi) / 2.0)
    }
}

fn bezier(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// A single run of an eased animation from `start` lasting `duration`.
#[derive(Debug, Copy, Clone)]
pub struct Tween {
    start: Instant,
    duration: Duration,
    easing: CubicBezier,
}

impl Tween {
    pub fn new(start: Instant, duration: Duration, easing: CubicBezier) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]`.
    pub fn value(&self, now: Instant) -> f32 {
        self.easing.transform(self.fraction(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Linear interpolation between `start` and `stop`.
pub fn lerp(start: f32, stop: f32, amount: f32) -> f32 {
    start + (stop - start) * amount
}
