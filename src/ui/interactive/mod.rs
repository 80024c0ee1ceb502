//! Interactive session: event loop, input dispatch and session state.

pub mod core;
pub mod event_handler;
mod input_handler;
mod pointer;
pub mod state_manager;

pub use core::run_interactive_ui;
pub use event_handler::{EventHandler, EventHandlerConfig, EventResult};
pub use state_manager::{InteractiveState, TimerState, UIState};
