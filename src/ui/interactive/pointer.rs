//! Mouse handling: hover-driven autoplay pause, wheel-driven parallax and
//! click hit-testing against the current layout.
//!
//! The outside-click rule for the menu is applied in exactly one place
//! here; there is deliberately no second handler that could close (or
//! re-close) the menu for the same click.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

use super::state_manager::InteractiveState;
use crate::ui::layout::PageLayout;
use crate::ui::modal::FocusTarget;

/// Handle a mouse event. With no layout (terminal too small) every event
/// is ignored.
pub(super) fn handle_mouse_event(state: &mut InteractiveState, event: &MouseEvent, now: Instant) {
    let Some(layout) = state.layout else {
        return;
    };

    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            update_hover(state, event.column, event.row, now);
        }
        MouseEventKind::ScrollDown => {
            if state.show.slide_count() > 0 {
                state.parallax.scrolled(1);
            }
        }
        MouseEventKind::ScrollUp => {
            if state.show.slide_count() > 0 {
                state.parallax.scrolled(-1);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(state, layout, event.column, event.row);
        }
        _ => {}
    }
}

/// Tracks pointer transitions across the hero boundary. Entering pauses
/// autoplay, leaving resumes it; positions inside produce no repeat calls.
fn update_hover(state: &mut InteractiveState, col: u16, row: u16, now: Instant) {
    let Some(layout) = state.layout else {
        return;
    };
    let inside = layout.hero.contains(col, row);
    if inside && !state.show.pointer_inside() {
        tracing::debug!("Pointer entered the slide surface, pausing autoplay");
        state.show.pointer_entered();
    } else if !inside && state.show.pointer_inside() {
        tracing::debug!("Pointer left the slide surface, resuming autoplay");
        state.show.pointer_left(now);
    }
}

fn handle_click(state: &mut InteractiveState, layout: PageLayout, col: u16, row: u16) {
    // The open dialog captures every click: either a control or the
    // overlay, which closes it.
    if state.modal.is_open() {
        let labels = state.modal.control_labels();
        if layout.modal_box().contains(col, row) {
            if let Some(i) = layout.modal_control_at(&labels, col, row) {
                state.modal.set_focus(i);
                if let Some(control) = state.modal.focused() {
                    state.activate_modal_control(control);
                }
            }
        } else {
            state.close_modal();
        }
        state.request_render();
        return;
    }

    // The toggle button itself never counts as an outside click.
    if layout.menu_button.contains(col, row) {
        state.menu.toggle();
        state.focus = FocusTarget::MenuButton;
        state.request_render();
        return;
    }

    if layout.help_button.contains(col, row) {
        state.focus = FocusTarget::HelpButton;
        state.open_modal();
        return;
    }

    if state.menu.is_open() {
        let panel = layout.menu_panel(state.menu.len());
        if panel.contains(col, row) {
            if let Some(entry) = layout.menu_entry_at(state.menu.len(), col, row) {
                state.show.go_to(entry as isize);
                state.menu.close();
            }
            state.request_render();
            return;
        }
        // The single outside-click rule: any other click closes the menu
        // and then lands on whatever is underneath.
        state.menu.close();
        state.request_render();
    }

    if let Some(indicator) = layout.indicator_at(state.show.slide_count(), col, row) {
        state.show.go_to(indicator as isize);
        state.request_render();
    } else if layout.prev_zone.contains(col, row) {
        state.show.prev();
        state.request_render();
    } else if layout.next_zone.contains(col, row) {
        state.show.next();
        state.request_render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::deck::Deck;
    use crossterm::event::KeyModifiers;

    fn state() -> InteractiveState {
        InteractiveState::new(Deck::builtin(), Config::default(), (80, 24), Instant::now())
    }

    fn mouse(kind: MouseEventKind, col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(state: &mut InteractiveState, col: u16, row: u16) {
        handle_mouse_event(
            state,
            &mouse(MouseEventKind::Down(MouseButton::Left), col, row),
            Instant::now(),
        );
    }

    fn move_to(state: &mut InteractiveState, col: u16, row: u16, now: Instant) {
        handle_mouse_event(state, &mouse(MouseEventKind::Moved, col, row), now);
    }

    #[test]
    fn test_hover_enter_leave_drives_autoplay() {
        let mut state = state();
        let now = Instant::now();
        let layout = state.layout.unwrap();

        assert!(state.show.timer_active());
        move_to(&mut state, 40, layout.hero.y + 2, now);
        assert!(!state.show.timer_active());

        // Moving around inside does not retrigger anything.
        move_to(&mut state, 41, layout.hero.y + 3, now);
        assert!(!state.show.timer_active());

        move_to(&mut state, 40, 0, now);
        assert!(state.show.timer_active());
    }

    #[test]
    fn test_dot_click_jumps() {
        let mut state = state();
        let layout = state.layout.unwrap();
        let dots = layout.dot_positions(state.show.slide_count());
        let (col, row) = dots[2];
        click(&mut state, col, row);
        assert_eq!(state.show.current_index(), Some(2));
    }

    #[test]
    fn test_edge_zones_navigate() {
        let mut state = state();
        let layout = state.layout.unwrap();
        let row = layout.hero.y + 3;

        click(&mut state, layout.width - 1, row);
        assert_eq!(state.show.current_index(), Some(1));
        click(&mut state, 0, row);
        assert_eq!(state.show.current_index(), Some(0));
        click(&mut state, 1, row);
        assert_eq!(
            state.show.current_index(),
            Some(state.show.slide_count() - 1)
        );
    }

    #[test]
    fn test_menu_entry_click_jumps_and_closes() {
        let mut state = state();
        let layout = state.layout.unwrap();

        click(&mut state, layout.menu_button.x, 0);
        assert!(state.menu.is_open());

        let panel = layout.menu_panel(state.menu.len());
        click(&mut state, panel.x + 3, panel.y + 1 + 2);
        assert!(!state.menu.is_open());
        assert_eq!(state.show.current_index(), Some(2));
    }

    #[test]
    fn test_outside_click_closes_menu_once_and_falls_through() {
        let mut state = state();
        let layout = state.layout.unwrap();

        click(&mut state, layout.menu_button.x, 0);
        assert!(state.menu.is_open());

        // Clicking a dot outside the panel closes the menu AND navigates.
        let (col, row) = layout.dot_positions(state.show.slide_count())[1];
        click(&mut state, col, row);
        assert!(!state.menu.is_open());
        assert_eq!(state.show.current_index(), Some(1));
    }

    #[test]
    fn test_menu_button_click_does_not_self_close() {
        let mut state = state();
        let layout = state.layout.unwrap();

        click(&mut state, layout.menu_button.x + 1, 0);
        assert!(state.menu.is_open(), "toggle must not count as outside click");
        click(&mut state, layout.menu_button.x + 1, 0);
        assert!(!state.menu.is_open());
    }

    #[test]
    fn test_modal_overlay_click_closes() {
        let mut state = state();
        state.open_modal();

        // A click outside the dialog box closes it without navigating.
        let y = state.layout.unwrap().hero.y + 1;
        click(&mut state, 0, y);
        assert!(!state.modal.is_open());
        assert_eq!(state.show.current_index(), Some(0));
    }

    #[test]
    fn test_modal_control_click_activates() {
        let mut state = state();
        state.open_modal();
        let layout = state.layout.unwrap();
        let labels = state.modal.control_labels();
        let close_rect = layout.modal_control_rects(&labels)[0];

        click(&mut state, close_rect.x + 1, close_rect.y);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_wheel_accumulates_parallax() {
        let mut state = state();
        for _ in 0..10 {
            handle_mouse_event(
                &mut state,
                &mouse(MouseEventKind::ScrollDown, 40, 10),
                Instant::now(),
            );
        }
        assert!(state.parallax.apply());
        assert!(state.parallax.offset_rows() > 0);
    }

    #[test]
    fn test_empty_deck_ignores_scroll_and_clicks() {
        let deck: Deck = toml::from_str("title = \"EMPTY\"").unwrap();
        let mut state =
            InteractiveState::new(deck, Config::default(), (80, 24), Instant::now());
        let layout = state.layout.unwrap();

        handle_mouse_event(
            &mut state,
            &mouse(MouseEventKind::ScrollDown, 40, 10),
            Instant::now(),
        );
        assert!(!state.parallax.apply());

        click(&mut state, 0, layout.hero.y + 1);
        assert_eq!(state.show.current_index(), None);
        assert!(!state.show.timer_active());
    }

    #[test]
    fn test_tiny_terminal_ignores_everything() {
        let mut state = state();
        state.handle_resize(4, 3);
        click(&mut state, 1, 1);
        handle_mouse_event(
            &mut state,
            &mouse(MouseEventKind::Moved, 1, 1),
            Instant::now(),
        );
        assert_eq!(state.show.current_index(), Some(0));
    }
}
