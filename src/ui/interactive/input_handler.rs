//! Keyboard input handling for the interactive UI.
//!
//! This module handles:
//! - Quit, theme toggle and overlay toggles
//! - Arrow-key slide navigation with debouncing
//! - Digit-key jumps straight to a slide
//! - Focus movement, including the help dialog's focus trap

use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use super::state_manager::InteractiveState;

/// Parameters for keyboard event handling
pub(super) struct KeyEventParams<'a> {
    pub key_event: &'a KeyEvent,
    pub state: &'a mut InteractiveState,
    pub now: Instant,
}

/// Handle a keyboard event. Returns true when the application should exit.
pub(super) fn handle_key_event(params: KeyEventParams<'_>) -> bool {
    let KeyEventParams {
        key_event,
        state,
        now,
    } = params;

    tracing::debug!(
        "Key event: {:?}, modifiers: {:?}",
        key_event.code,
        key_event.modifiers
    );

    match key_event.code {
        KeyCode::Char('q') => {
            tracing::info!("Quit requested");
            return true;
        }
        KeyCode::Esc => {
            if state.modal.is_open() {
                state.close_modal();
            } else if state.menu.is_open() {
                state.menu.close();
                state.request_render();
            }
        }
        KeyCode::Tab => {
            if state.modal.is_open() {
                state.modal.focus_next();
            } else {
                state.focus = state.focus.next();
            }
            state.request_render();
        }
        KeyCode::BackTab => {
            if state.modal.is_open() {
                state.modal.focus_prev();
            } else {
                state.focus = state.focus.prev();
            }
            state.request_render();
        }
        KeyCode::Enter => {
            if let Some(control) = state.modal.focused() {
                state.activate_modal_control(control);
            } else {
                activate_focused(state);
            }
        }
        // Arrow keys act on the show no matter what overlay is open; the
        // guard for an empty deck lives inside the slideshow itself.
        KeyCode::Left => {
            if state.timers.slide_change_allowed(now) {
                state.show.prev();
                state.timers.update_slide_change(now);
                state.request_render();
            }
        }
        KeyCode::Right => {
            if state.timers.slide_change_allowed(now) {
                state.show.next();
                state.timers.update_slide_change(now);
                state.request_render();
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let target = c as isize - '1' as isize;
            if (target as usize) < state.show.slide_count() {
                state.show.go_to(target);
                state.request_render();
            }
        }
        KeyCode::Char('t') => {
            if state.timers.theme_toggle_allowed(now) {
                state.toggle_theme();
                state.timers.update_theme_toggle(now);
            }
        }
        KeyCode::Char('m') => {
            state.menu.toggle();
            state.request_render();
        }
        KeyCode::Char('h') => {
            state.open_modal();
        }
        _ => {}
    }

    false
}

/// Enter on a header button behaves like clicking it.
fn activate_focused(state: &mut InteractiveState) {
    use crate::ui::modal::FocusTarget;

    match state.focus {
        FocusTarget::Hero => {}
        FocusTarget::HelpButton => state.open_modal(),
        FocusTarget::MenuButton => {
            state.menu.toggle();
            state.request_render();
        }
    }
}
