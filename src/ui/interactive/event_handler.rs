//! Event handling coordination for the interactive UI
//!
//! This module provides unified event handling for the interactive UI,
//! coordinating between the different event types (keyboard, mouse,
//! resize) and managing their interaction with the state manager.

use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

use super::input_handler::{KeyEventParams, handle_key_event};
use super::pointer::handle_mouse_event;
use super::state_manager::InteractiveState;
use crate::constants::polling;
use crate::error::AppError;

/// Result of processing an event
#[derive(Debug, PartialEq)]
pub enum EventResult {
    /// Continue processing events
    Continue,
    /// Exit the application
    Exit,
    /// Event was handled, continue processing
    Handled,
}

/// Configuration for event handler
#[derive(Debug, Clone)]
pub struct EventHandlerConfig {
    /// Whether debug mode is enabled (affects terminal handling)
    pub debug_mode: bool,
    /// Custom poll interval override (None for adaptive)
    pub poll_interval_override: Option<Duration>,
    /// Whether to enable resize event debouncing
    pub resize_debouncing: bool,
}

impl Default for EventHandlerConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            poll_interval_override: None,
            resize_debouncing: true,
        }
    }
}

/// Picks the event poll interval from how recently the user did anything:
/// snappy while they are interacting, relaxed once the show is just
/// playing itself.
pub(super) fn calculate_poll_interval(time_since_activity: Duration) -> Duration {
    if time_since_activity < Duration::from_secs(polling::SEMI_ACTIVE_THRESHOLD_SECONDS) {
        Duration::from_millis(polling::ACTIVE_MS)
    } else if time_since_activity < Duration::from_secs(polling::IDLE_THRESHOLD_SECONDS) {
        Duration::from_millis(polling::SEMI_ACTIVE_MS)
    } else {
        Duration::from_millis(polling::IDLE_MS)
    }
}

/// Main event handler for interactive UI
pub struct EventHandler {
    config: EventHandlerConfig,
}

impl EventHandler {
    /// Create a new event handler with default configuration
    pub fn new() -> Self {
        Self {
            config: EventHandlerConfig::default(),
        }
    }

    /// Create a new event handler with custom configuration
    pub fn with_config(config: EventHandlerConfig) -> Self {
        Self { config }
    }

    /// Create event handler for debug mode
    pub fn for_debug() -> Self {
        Self::with_config(EventHandlerConfig {
            debug_mode: true,
            ..Default::default()
        })
    }

    /// Create event handler with custom poll interval
    pub fn with_poll_interval(interval: Duration) -> Self {
        Self::with_config(EventHandlerConfig {
            poll_interval_override: Some(interval),
            ..Default::default()
        })
    }

    /// Process events for one iteration of the main loop
    ///
    /// This method handles:
    /// - Event polling with adaptive intervals
    /// - Keyboard event coordination
    /// - Mouse events (hover, wheel, clicks)
    /// - Resize event handling with debouncing
    /// - Activity tracking in the state manager
    ///
    /// Returns EventResult indicating what action should be taken.
    pub async fn process_events(
        &self,
        state: &mut InteractiveState,
    ) -> Result<EventResult, AppError> {
        let poll_interval = self
            .config
            .poll_interval_override
            .unwrap_or_else(|| calculate_poll_interval(state.time_since_activity()));

        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key_event) => {
                    state.update_activity();
                    let should_exit = handle_key_event(KeyEventParams {
                        key_event: &key_event,
                        state,
                        now: Instant::now(),
                    });
                    if should_exit {
                        Ok(EventResult::Exit)
                    } else {
                        Ok(EventResult::Handled)
                    }
                }
                Event::Mouse(mouse_event) => {
                    state.update_activity();
                    handle_mouse_event(state, &mouse_event, Instant::now());
                    Ok(EventResult::Handled)
                }
                Event::Resize(width, height) => {
                    self.handle_resize_event(state, width, height);
                    Ok(EventResult::Handled)
                }
                _ => Ok(EventResult::Continue),
            }
        } else {
            Ok(EventResult::Continue)
        }
    }

    /// Handle resize events with optional debouncing
    fn handle_resize_event(&self, state: &mut InteractiveState, width: u16, height: u16) {
        tracing::debug!("Resize event received: {width}x{height}");

        if self.config.resize_debouncing {
            if state.timers.resize_allowed() {
                state.handle_resize(width, height);
                state.timers.update_resize();
            } else {
                tracing::debug!("Resize event ignored due to debouncing");
            }
        } else {
            state.handle_resize(width, height);
            state.timers.update_resize();
        }
    }

    /// Get the current event handler configuration
    pub fn config(&self) -> &EventHandlerConfig {
        &self.config
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
