//! Scroll-linked drift for the slide body.
//!
//! Wheel events only accumulate a scroll position and mark the state dirty;
//! the offset is recomputed at most once per loop pass in `apply`. This
//! mirrors coalescing scroll work into animation frames: a burst of wheel
//! events costs one recomputation, not one per event.

use crate::constants::MAX_SCROLL_STEPS;

#[derive(Debug)]
pub struct ParallaxState {
    factor: f32,
    scroll: i32,
    dirty: bool,
    offset_rows: i32,
}

impl ParallaxState {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            scroll: 0,
            dirty: false,
            offset_rows: 0,
        }
    }

    /// Accumulates a wheel step. Cheap; never recomputes the offset.
    pub fn scrolled(&mut self, delta: i32) {
        self.scroll = (self.scroll + delta).clamp(0, MAX_SCROLL_STEPS);
        self.dirty = true;
    }

    /// Recomputes the row offset from the accumulated scroll position.
    /// Returns true when the visible offset actually changed.
    pub fn apply(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        let new_offset = (self.scroll as f32 * self.factor).round() as i32;
        if new_offset != self.offset_rows {
            self.offset_rows = new_offset;
            true
        } else {
            false
        }
    }

    pub fn offset_rows(&self) -> i32 {
        self.offset_rows
    }

    pub fn scroll_position(&self) -> i32 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_of_events_single_recompute() {
        let mut parallax = ParallaxState::new(0.18);
        for _ in 0..10 {
            parallax.scrolled(1);
        }
        assert!(parallax.apply());
        assert_eq!(parallax.offset_rows(), 2); // round(10 * 0.18)
        // Nothing pending afterwards.
        assert!(!parallax.apply());
    }

    #[test]
    fn test_small_scroll_changes_nothing_visible() {
        let mut parallax = ParallaxState::new(0.18);
        parallax.scrolled(1);
        // round(0.18) == 0: dirty, but the visible offset is unchanged.
        assert!(!parallax.apply());
        assert_eq!(parallax.offset_rows(), 0);
    }

    #[test]
    fn test_scroll_clamped_at_top() {
        let mut parallax = ParallaxState::new(0.18);
        parallax.scrolled(-5);
        assert_eq!(parallax.scroll_position(), 0);
        assert!(!parallax.apply());
        assert_eq!(parallax.offset_rows(), 0);
    }

    #[test]
    fn test_scroll_back_up_restores_offset() {
        let mut parallax = ParallaxState::new(0.5);
        parallax.scrolled(6);
        assert!(parallax.apply());
        assert_eq!(parallax.offset_rows(), 3);

        parallax.scrolled(-6);
        assert!(parallax.apply());
        assert_eq!(parallax.offset_rows(), 0);
    }
}
