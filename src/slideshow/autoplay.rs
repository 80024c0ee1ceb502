//! Autoplay timer for the slideshow.
//!
//! The timer is modeled as a single optional deadline rather than a spawned
//! task: the interactive loop polls it once per pass, which keeps every
//! advancement on the same thread as the input handlers. Arming the timer
//! always replaces the previous deadline, so repeated starts can never stack
//! up into multiple advancements per interval.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct AutoplayTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Arms (or re-arms) the timer. Any previously scheduled tick is
    /// cancelled first.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancels the scheduled tick. Safe to call when none is scheduled.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Whether a tick is currently scheduled.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires at most once per call: returns true when the deadline has
    /// passed and re-arms for the next interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
