//! Paged cover carousel model.
//!
//! The pager owns a fractional scroll position. Every move is an eased
//! animation tagged with who started it, and settling reports that origin so
//! programmatic scrolls can't be mistaken for user swipes.

use std::time::{Duration, Instant};

use crate::anim::{self, FAST_OUT_SLOW_IN, Tween};

/// Who started a pager movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollOrigin {
    /// A swipe, click or scroll gesture.
    User,
    /// Code reflecting a change made elsewhere.
    Program,
}

#[derive(Debug, Copy, Clone)]
struct PageAnimation {
    from: f32,
    to: usize,
    tween: Tween,
    origin: ScrollOrigin,
}

#[derive(Debug)]
pub struct Pager {
    page_count: usize,
    settled: usize,
    duration: Duration,
    animation: Option<PageAnimation>,
}

impl Pager {
    pub fn new(page_count: usize, duration: Duration) -> Self {
        Self {
            page_count,
            settled: 0,
            duration,
            animation: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.page_count.saturating_sub(1))
    }

    /// Fractional scroll position; `2.5` is halfway between pages 2 and 3.
    pub fn position(&self, now: Instant) -> f32 {
        match self.animation {
            Some(a) => anim::lerp(a.from, a.to as f32, a.tween.value(now)),
            None => self.settled as f32,
        }
    }

    /// The page closest to the current position.
    pub fn current_page(&self, now: Instant) -> usize {
        self.clamp_page(self.position(now).round().max(0.0) as usize)
    }

    /// Signed distance of the position from [`Self::current_page`], in
    /// `[-0.5, 0.5]`.
    pub fn current_page_offset_fraction(&self, now: Instant) -> f32 {
        self.position(now) - self.current_page(now) as f32
    }

    /// Where the pager is heading, or where it rests.
    pub fn target_page(&self) -> usize {
        self.animation.map_or(self.settled, |a| a.to)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Distance of `page` from the visible position, always `>= 0`.
    pub fn page_offset(&self, page: usize, now: Instant) -> f32 {
        let current = self.current_page(now) as f32;
        (current - page as f32 + self.current_page_offset_fraction(now)).abs()
    }

    /// Move by `delta` pages from the current target.
    pub fn swipe(&mut self, delta: i32, now: Instant) {
        let target = (self.target_page() as i64 + i64::from(delta)).max(0) as usize;
        self.start(target, ScrollOrigin::User, now);
    }

    /// Jump to `page` on behalf of the user.
    pub fn show_page(&mut self, page: usize, now: Instant) {
        self.start(page, ScrollOrigin::User, now);
    }

    /// Scroll to `page` without it counting as a user gesture.
    ///
    /// Ignored while a user movement is still running: that gesture settles
    /// later and wins.
    pub fn animate_to_page(&mut self, page: usize, now: Instant) {
        if matches!(self.animation, Some(a) if a.origin == ScrollOrigin::User) {
            log::debug!("pager busy with a swipe, not following to {page}");
            return;
        }
        self.start(page, ScrollOrigin::Program, now);
    }

    fn start(&mut self, page: usize, origin: ScrollOrigin, now: Instant) {
        let page = self.clamp_page(page);
        let from = self.position(now);
        if self.animation.is_none() && page == self.settled {
            return;
        }
        self.animation = Some(PageAnimation {
            from,
            to: page,
            tween: Tween::new(now, self.duration, FAST_OUT_SLOW_IN),
            origin,
        });
    }

    /// Finish a completed animation. Returns the page it settled on and who
    /// started it.
    pub fn tick(&mut self, now: Instant) -> Option<(usize, ScrollOrigin)> {
        let a = self.animation?;
        if !a.tween.is_finished(now) {
            return None;
        }
        self.animation = None;
        self.settled = a.to;
        Some((a.to, a.origin))
    }
}

/// Scale of a cover `offset` pages away from the visible position.
pub fn cover_scale(offset: f32) -> f32 {
    anim::lerp(0.5, 1.0, 1.0 - offset.clamp(0.0, 0.5))
}

/// Opacity of a cover `offset` pages away from the visible position.
pub fn cover_alpha(offset: f32) -> f32 {
    anim::lerp(0.4, 1.0, 1.0 - offset.clamp(0.0, 0.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn pager(count: usize) -> (Pager, Instant) {
        (Pager::new(count, Duration::from_millis(300)), Instant::now())
    }

    #[test]
    fn swipe_animates_then_settles_with_user_origin() {
        let (mut p, t0) = pager(5);
        p.swipe(1, t0);
        assert_eq!(p.target_page(), 1);
        assert_eq!(p.current_page(t0), 0);

        let mid = p.position(t0 + 150 * MS);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(p.tick(t0 + 150 * MS), None);

        assert_eq!(p.tick(t0 + 300 * MS), Some((1, ScrollOrigin::User)));
        assert_eq!(p.current_page(t0 + 300 * MS), 1);
        assert_eq!(p.current_page_offset_fraction(t0 + 300 * MS), 0.0);
        assert!(!p.is_animating());
        assert_eq!(p.tick(t0 + 400 * MS), None);
    }

    #[test]
    fn programmatic_scroll_settles_with_program_origin() {
        let (mut p, t0) = pager(5);
        p.animate_to_page(3, t0);
        assert_eq!(p.tick(t0 + 300 * MS), Some((3, ScrollOrigin::Program)));
    }

    #[test]
    fn pages_are_clamped() {
        let (mut p, t0) = pager(3);
        p.swipe(-1, t0);
        assert!(!p.is_animating());

        p.show_page(10, t0);
        assert_eq!(p.target_page(), 2);

        let (mut empty, t0) = pager(0);
        empty.swipe(1, t0);
        assert_eq!(empty.target_page(), 0);
        assert_eq!(empty.current_page(t0), 0);
    }

    #[test]
    fn repeated_swipes_accumulate_from_target() {
        let (mut p, t0) = pager(5);
        p.swipe(1, t0);
        p.swipe(1, t0 + 100 * MS);
        assert_eq!(p.target_page(), 2);

        // Retargeting keeps the visible position continuous.
        let before = p.position(t0 + 100 * MS);
        assert!(before > 0.0);
        assert!(p.tick(t0 + 300 * MS).is_none());
        assert_eq!(p.tick(t0 + 400 * MS), Some((2, ScrollOrigin::User)));
    }

    #[test]
    fn program_scroll_does_not_interrupt_user_swipe() {
        let (mut p, t0) = pager(5);
        p.swipe(1, t0);
        p.animate_to_page(4, t0 + 10 * MS);
        assert_eq!(p.target_page(), 1);
        assert_eq!(p.tick(t0 + 300 * MS), Some((1, ScrollOrigin::User)));
    }

    #[test]
    fn user_swipe_overrides_program_scroll() {
        let (mut p, t0) = pager(5);
        p.animate_to_page(4, t0);
        p.show_page(1, t0 + 10 * MS);
        assert_eq!(p.tick(t0 + 310 * MS), Some((1, ScrollOrigin::User)));
    }

    #[test]
    fn offset_fraction_is_signed_around_current_page() {
        let (mut p, t0) = pager(3);
        p.show_page(1, t0);
        let t = t0 + 100 * MS;
        let pos = p.position(t);
        let frac = p.current_page_offset_fraction(t);
        assert!((-0.5..=0.5).contains(&frac));
        assert!((p.current_page(t) as f32 + frac - pos).abs() < 1e-6);

        for page in 0..3 {
            let expected = (page as f32 - pos).abs();
            assert!((p.page_offset(page, t) - expected).abs() < 1e-6);
        }
        assert_eq!(p.page_offset(1, t0 + 300 * MS), 0.0);
    }

    #[test]
    fn cover_transform_curves() {
        assert_eq!(cover_scale(0.0), 1.0);
        assert_eq!(cover_scale(0.5), 0.75);
        assert_eq!(cover_scale(3.0), 0.75);
        assert_eq!(cover_alpha(0.0), 1.0);
        assert!((cover_alpha(0.1) - 0.94).abs() < 1e-6);
        assert!((cover_alpha(2.0) - 0.94).abs() < 1e-6);
    }
}
