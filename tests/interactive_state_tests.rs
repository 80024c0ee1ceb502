//! Session-level behavior: theme, overlays, layout and rendering glue.

use std::time::{Duration, Instant};
use teledeck::config::Config;
use teledeck::deck::Deck;
use teledeck::theme::Theme;
use teledeck::ui::interactive::InteractiveState;
use teledeck::ui::layout::PageLayout;
use teledeck::ui::modal::{FocusTarget, ModalControl};
use teledeck::ui::page::SlidePage;

fn session() -> InteractiveState {
    InteractiveState::new(Deck::builtin(), Config::default(), (80, 24), Instant::now())
}

#[test]
fn test_session_boots_with_first_slide_and_autoplay() {
    let state = session();
    assert_eq!(state.show.current_index(), Some(0));
    assert!(state.show.timer_active());
    assert!(state.needs_render());
    assert_eq!(state.menu.len(), state.deck.slide_count());
}

#[test]
fn test_theme_toggle_round_trip_and_dirty_flag() {
    let mut state = session();
    let original = state.theme;

    state.toggle_theme();
    assert!(state.theme_dirty);
    assert_eq!(state.config.theme, Some(original.toggled()));

    state.toggle_theme();
    assert_eq!(state.theme, original);
}

#[test]
fn test_explicit_config_theme_wins_over_detection() {
    let config = Config {
        theme: Some(Theme::Light),
        ..Config::default()
    };
    let state = InteractiveState::new(Deck::builtin(), config, (80, 24), Instant::now());
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_modal_trap_and_restore_through_session() {
    let mut state = session();
    state.focus = FocusTarget::HelpButton;
    state.open_modal();

    // The trap: cycling focus inside the dialog wraps.
    let controls = state.modal.controls().len();
    for _ in 0..controls {
        state.modal.focus_next();
    }
    assert_eq!(state.modal.focus_index(), 0);

    // Activating Theme flips the theme but keeps the dialog open.
    state.activate_modal_control(ModalControl::ToggleTheme);
    assert!(state.modal.is_open());

    state.activate_modal_control(ModalControl::Close);
    assert!(!state.modal.is_open());
    assert_eq!(state.focus, FocusTarget::HelpButton);
}

#[test]
fn test_autoplay_keeps_running_under_open_overlays() {
    let now = Instant::now();
    let config = Config {
        auto_advance_ms: 300,
        ..Config::default()
    };
    let mut state = InteractiveState::new(Deck::builtin(), config, (80, 24), now);

    state.menu.toggle();
    state.open_modal();
    assert!(state.show.tick(now + Duration::from_millis(300)));
    assert_eq!(state.show.current_index(), Some(1));
}

#[test]
fn test_resize_degenerate_then_recover() {
    let mut state = session();
    state.handle_resize(3, 2);
    assert!(state.layout.is_none());

    // Shrinking must not disturb the show itself.
    assert_eq!(state.show.current_index(), Some(0));

    state.handle_resize(120, 40);
    let layout = state.layout.expect("layout restored");
    assert_eq!(layout.width, 120);
    assert_eq!(layout.footer_row, 39);
}

#[test]
fn test_frame_renders_through_session_state() {
    let state = session();
    let layout = state.layout.unwrap();
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
    let mut out = Vec::new();
    page.render_buffered(&mut out).unwrap();
    let frame = String::from_utf8(out).unwrap();
    assert!(frame.contains("TELEDECK"));
    assert!(frame.contains(&state.deck.slides[0].title));
}

#[test]
fn test_layout_is_shared_between_render_and_hit_testing() {
    // The same PageLayout instance answers both "where is the dot drawn"
    // and "which dot was clicked"; they can never disagree.
    let layout = PageLayout::compute(100, 30).unwrap();
    let positions = layout.dot_positions(5);
    for (i, &(col, row)) in positions.iter().enumerate() {
        assert_eq!(layout.indicator_at(5, col, row), Some(i));
    }
}
