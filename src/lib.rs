//! Teletext-Style Slide Deck Presenter Library
//!
//! This library provides the pieces of the teledeck terminal presenter:
//! a slideshow state machine with autoplay and dot indicators, deck
//! loading, theming and the interactive terminal session built on top.
//!
//! # Examples
//!
//! ```rust
//! use teledeck::deck::Deck;
//! use teledeck::slideshow::Slideshow;
//! use std::time::{Duration, Instant};
//!
//! let deck = Deck::builtin();
//! let mut show = Slideshow::new(deck.slide_count(), Duration::from_secs(5), Instant::now());
//!
//! show.next();
//! assert_eq!(show.current_index(), Some(1));
//!
//! // Wraps with true modulo: any integer is a valid target.
//! show.go_to(-1);
//! assert_eq!(show.current_index(), Some(deck.slide_count() - 1));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod logging;
pub mod slideshow;
pub mod theme;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use deck::{Deck, Slide};
pub use error::AppError;
pub use slideshow::{Indicator, SlidePanel, Slideshow};
pub use theme::Theme;
pub use ui::run_interactive_ui;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
