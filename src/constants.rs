//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default autoplay interval in milliseconds (time a slide stays on screen
/// before the show advances on its own)
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5000;

/// Smallest autoplay interval accepted from config or CLI, in milliseconds
pub const MIN_AUTO_ADVANCE_MS: u64 = 250;

/// Vertical drift applied to slide body text per scroll step.
/// The body moves by `scroll * PARALLAX_FACTOR` rows, rounded.
pub const PARALLAX_FACTOR: f32 = 0.18;

/// Upper bound for the accumulated scroll position, in scroll steps
pub const MAX_SCROLL_STEPS: i32 = 200;

/// UI polling intervals in milliseconds
pub mod polling {
    /// Polling interval for active use (< 5 seconds idle)
    pub const ACTIVE_MS: u64 = 50;

    /// Polling interval for semi-active use (5-30 seconds idle)
    pub const SEMI_ACTIVE_MS: u64 = 200;

    /// Polling interval for idle use (> 30 seconds idle)
    pub const IDLE_MS: u64 = 500;

    /// Threshold for considering user as idle (seconds)
    pub const IDLE_THRESHOLD_SECONDS: u64 = 30;

    /// Threshold for considering user as semi-active (seconds)
    pub const SEMI_ACTIVE_THRESHOLD_SECONDS: u64 = 5;
}

/// Debounce windows for user input, in milliseconds
pub mod debounce {
    /// Minimum interval between manual slide changes
    pub const SLIDE_CHANGE_MS: u64 = 200;

    /// Minimum interval between theme toggles
    pub const THEME_TOGGLE_MS: u64 = 250;

    /// Minimum interval between processed resize events
    pub const RESIZE_MS: u64 = 500;
}

/// UI layout constants
pub mod ui {
    /// Rows reserved at the top of the screen (header band + subheader)
    pub const HEADER_ROWS: u16 = 2;

    /// Rows reserved at the bottom of the screen (dot row + footer)
    pub const FOOTER_ROWS: u16 = 2;

    /// Horizontal margin for slide body text
    pub const CONTENT_MARGIN: u16 = 4;

    /// Width of the prev/next click zones at the screen edges
    pub const NAV_ZONE_WIDTH: u16 = 3;

    /// Horizontal spacing between indicator dots
    pub const DOT_SPACING: u16 = 2;

    /// Width of the slide-list menu panel
    pub const MENU_WIDTH: u16 = 26;

    /// Smallest terminal size the interactive UI will draw into;
    /// anything smaller renders nothing rather than corrupting the screen
    pub const MIN_WIDTH: u16 = 20;
    pub const MIN_HEIGHT: u16 = 8;

    /// Fixed frame size used by `--once` output
    pub const PLAIN_WIDTH: u16 = 80;
}

/// Teletext page number shown in the header band
pub const PAGE_NUMBER: u16 = 100;
