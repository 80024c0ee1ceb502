//! The slideshow state machine.
//!
//! `Slideshow` owns the current slide index, the autoplay timer and the
//! visual flags of every panel and indicator. All mutation goes through its
//! operations; the interactive loop and the input handlers never touch the
//! index directly. Every operation guards the empty deck, so a show built
//! over zero slides is completely inert: nothing renders, no timer is ever
//! armed, and navigation is a no-op rather than an error.

use std::time::{Duration, Instant};

use super::autoplay::AutoplayTimer;
use super::indicators::{Indicator, build_indicators};

/// Visual state of one slide panel. The flags mirror what the renderer
/// shows: the active panel is drawn, hidden panels are skipped and reported
/// as hidden to assistive output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidePanel {
    ordinal: usize,
    active: bool,
    hidden: bool,
}

impl SlidePanel {
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[derive(Debug)]
pub struct Slideshow {
    panels: Vec<SlidePanel>,
    indicators: Vec<Indicator>,
    current_index: usize,
    autoplay: AutoplayTimer,
    pointer_inside: bool,
}

impl Slideshow {
    /// Builds the show over a fixed number of slides and runs the
    /// initialization sequence: indicators are built in slide order, the
    /// first slide becomes active and autoplay starts. With zero slides
    /// both steps are skipped and no timer is ever created.
    pub fn new(slide_count: usize, auto_interval: Duration, now: Instant) -> Self {
        let panels = (0..slide_count)
            .map(|ordinal| SlidePanel {
                ordinal,
                active: false,
                hidden: true,
            })
            .collect();

        let mut show = Self {
            panels,
            indicators: build_indicators(slide_count),
            current_index: 0,
            autoplay: AutoplayTimer::new(auto_interval),
            pointer_inside: false,
        };

        if show.slide_count() > 0 {
            show.go_to(0);
            show.start_auto(now);
        }

        show
    }

    pub fn slide_count(&self) -> usize {
        self.panels.len()
    }

    /// The index of the active slide, or `None` for an empty show.
    pub fn current_index(&self) -> Option<usize> {
        (!self.panels.is_empty()).then_some(self.current_index)
    }

    pub fn panels(&self) -> &[SlidePanel] {
        &self.panels
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Jumps to slide `i`, wrapping with true modulo so any integer is a
    /// valid target: `go_to(-1)` selects the last slide. Out-of-range input
    /// is policy, not an error. No-op on an empty show.
    pub fn go_to(&mut self, i: isize) {
        let count = self.panels.len() as isize;
        if count == 0 {
            return;
        }
        self.current_index = i.rem_euclid(count) as usize;
        self.render();
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_index as isize - 1);
    }

    /// Synchronizes the panel and indicator flags with the current index:
    /// exactly one of each is active, everything else is hidden. Idempotent.
    pub fn render(&mut self) {
        for panel in &mut self.panels {
            let active = panel.ordinal == self.current_index;
            panel.active = active;
            panel.hidden = !active;
        }
        for indicator in &mut self.indicators {
            let active = indicator.ordinal() == self.current_index;
            indicator.set_active(active);
        }
    }

    /// (Re)arms the autoplay timer, replacing any previous schedule.
    /// No-op on an empty show so a timer never exists for it.
    pub fn start_auto(&mut self, now: Instant) {
        if self.panels.is_empty() {
            return;
        }
        self.autoplay.start(now);
    }

    /// Cancels autoplay. Safe to call when nothing is scheduled.
    pub fn stop_auto(&mut self) {
        self.autoplay.stop();
    }

    /// True while an autoplay tick is scheduled. This is read from the
    /// timer itself, not tracked separately, so it cannot drift from the
    /// hover state that drives it.
    pub fn timer_active(&self) -> bool {
        self.autoplay.is_active()
    }

    pub fn auto_interval(&self) -> Duration {
        self.autoplay.interval()
    }

    /// Advances the show if the autoplay deadline has passed. Returns true
    /// when a slide change happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.autoplay.poll(now) {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Pointer entered the slide surface: hold the show still.
    pub fn pointer_entered(&mut self) {
        self.pointer_inside = true;
        self.stop_auto();
    }

    /// Pointer left the slide surface: resume autoplay.
    pub fn pointer_left(&mut self, now: Instant) {
        self.pointer_inside = false;
        self.start_auto(now);
    }
}
