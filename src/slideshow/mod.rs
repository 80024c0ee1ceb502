//! Slideshow core: index state machine, autoplay timer and dot indicators.

pub mod autoplay;
pub mod indicators;
pub mod state;

pub use autoplay::AutoplayTimer;
pub use indicators::Indicator;
pub use state::{SlidePanel, Slideshow};
