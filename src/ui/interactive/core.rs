//! Interactive UI module for the teledeck application
//!
//! This module contains the main interactive loop: it polls the autoplay
//! timer, coalesces scroll work, persists theme changes and renders the
//! frame when something marked it dirty. All user input is delegated to
//! the event handler.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use super::event_handler::{EventHandler, EventResult};
use super::state_manager::InteractiveState;
use crate::config::Config;
use crate::deck::Deck;
use crate::error::AppError;
use crate::ui::page::SlidePage;

/// Breather between loop passes when no event arrived.
const LOOP_SLEEP: Duration = Duration::from_millis(10);

/// Setup terminal for interactive mode
fn setup_terminal(debug_mode: bool) -> Result<Stdout, AppError> {
    let mut stdout = stdout();

    if !debug_mode {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }

    Ok(stdout)
}

/// Cleanup terminal after interactive mode
fn cleanup_terminal(debug_mode: bool, mut stdout: Stdout) -> Result<(), AppError> {
    if !debug_mode {
        execute!(
            stdout,
            DisableMouseCapture,
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;
        disable_raw_mode()?;
    }
    Ok(())
}

/// Persists a pending theme change. Failures are logged and forgotten;
/// the show must not stop because the config directory is read-only.
async fn persist_theme(state: &mut InteractiveState) {
    match state.config.save().await {
        Ok(()) => tracing::debug!("Persisted theme {}", state.theme),
        Err(e) => tracing::warn!("Failed to persist theme: {e}"),
    }
    state.theme_dirty = false;
}

/// Runs the interactive UI until the user quits.
pub async fn run_interactive_ui(
    deck: Deck,
    config: Config,
    debug_mode: bool,
) -> Result<(), AppError> {
    let mut stdout = setup_terminal(debug_mode)?;

    let size = crossterm::terminal::size().unwrap_or((80, 24));
    let mut state = InteractiveState::new(deck, config, size, Instant::now());

    let event_handler = if debug_mode {
        EventHandler::for_debug()
    } else {
        EventHandler::new()
    };

    tracing::info!(
        "Interactive session started: {} slides, autoplay {:?}",
        state.show.slide_count(),
        state.show.auto_interval()
    );

    loop {
        let now = Instant::now();

        // Autoplay: at most one advancement per pass.
        if state.show.tick(now) {
            tracing::debug!("Autoplay advanced to {:?}", state.show.current_index());
            state.request_render();
        }

        // Coalesced scroll work: a burst of wheel events becomes one
        // recomputation here.
        if state.parallax.apply() {
            state.request_render();
        }

        if state.theme_dirty {
            persist_theme(&mut state).await;
        }

        // Batched rendering: only draw when something changed, and only
        // when the terminal is big enough to have a layout.
        if state.needs_render() {
            if let Some(layout) = state.layout {
                let page = SlidePage::new(
                    &state.deck,
                    &state.show,
                    &state.menu,
                    &state.modal,
                    state.theme,
                    state.parallax.offset_rows(),
                    layout,
                    state.focus,
                );
                page.render_buffered(&mut stdout)?;
            }
            state.clear_render_flag();
        }

        match event_handler.process_events(&mut state).await? {
            EventResult::Exit => {
                tracing::info!("Exit requested through event handler");
                break;
            }
            EventResult::Handled | EventResult::Continue => {}
        }

        tokio::time::sleep(LOOP_SLEEP).await;
    }

    // A toggle in the final pass still gets persisted.
    if state.theme_dirty {
        persist_theme(&mut state).await;
    }

    cleanup_terminal(debug_mode, stdout)?;
    Ok(())
}
