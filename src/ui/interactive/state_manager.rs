//! State management for the interactive UI
//!
//! This module groups the interactive session's state into logical pieces
//! (input debounce timers, render flags, the slideshow itself and its
//! overlay collaborators) and provides the operations the event handlers
//! drive. The slideshow state is owned here and only mutated through its
//! own operations; nothing reaches into its index directly.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{PARALLAX_FACTOR, debounce};
use crate::deck::Deck;
use crate::slideshow::Slideshow;
use crate::theme::Theme;
use crate::ui::layout::PageLayout;
use crate::ui::menu::NavMenu;
use crate::ui::modal::{FocusTarget, HelpModal, ModalControl};
use crate::ui::parallax::ParallaxState;

/// Timer state for input debouncing
#[derive(Debug)]
pub struct TimerState {
    pub last_slide_change: Instant,
    pub last_theme_toggle: Instant,
    pub last_resize: Instant,
    pub last_activity: Instant,
}

impl TimerState {
    /// Initialize all timers with appropriate default values
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_slide_change: now
                .checked_sub(Duration::from_millis(debounce::SLIDE_CHANGE_MS))
                .unwrap_or(now),
            last_theme_toggle: now
                .checked_sub(Duration::from_millis(debounce::THEME_TOGGLE_MS))
                .unwrap_or(now),
            last_resize: now
                .checked_sub(Duration::from_millis(debounce::RESIZE_MS))
                .unwrap_or(now),
            last_activity: now,
        }
    }

    pub fn update_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.last_activity.elapsed()
    }

    pub fn slide_change_allowed(&self, now: Instant) -> bool {
        now.duration_since(self.last_slide_change)
            >= Duration::from_millis(debounce::SLIDE_CHANGE_MS)
    }

    pub fn update_slide_change(&mut self, now: Instant) {
        self.last_slide_change = now;
    }

    pub fn theme_toggle_allowed(&self, now: Instant) -> bool {
        now.duration_since(self.last_theme_toggle)
            >= Duration::from_millis(debounce::THEME_TOGGLE_MS)
    }

    pub fn update_theme_toggle(&mut self, now: Instant) {
        self.last_theme_toggle = now;
    }

    pub fn resize_allowed(&self) -> bool {
        self.last_resize.elapsed() >= Duration::from_millis(debounce::RESIZE_MS)
    }

    pub fn update_resize(&mut self) {
        self.last_resize = Instant::now();
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI rendering flags
#[derive(Debug)]
pub struct UIState {
    pub needs_render: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self { needs_render: true }
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_render_flag(&mut self) {
        self.needs_render = false;
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main interactive state coordinator
#[derive(Debug)]
pub struct InteractiveState {
    pub timers: TimerState,
    pub ui: UIState,
    pub config: Config,
    pub deck: Deck,
    pub show: Slideshow,
    pub menu: NavMenu,
    pub modal: HelpModal,
    pub parallax: ParallaxState,
    pub theme: Theme,
    pub focus: FocusTarget,
    pub layout: Option<PageLayout>,
    /// Set when the theme changed and the config file has not been
    /// rewritten yet; the main loop persists and clears it.
    pub theme_dirty: bool,
}

impl InteractiveState {
    /// Builds the session state and runs the slideshow initialization
    /// sequence over the deck's slides.
    pub fn new(deck: Deck, config: Config, size: (u16, u16), now: Instant) -> Self {
        let theme = config.effective_theme();
        let show = Slideshow::new(
            deck.slide_count(),
            Duration::from_millis(config.auto_advance_ms),
            now,
        );
        let menu = NavMenu::new(deck.slides.iter().map(|s| s.title.clone()).collect());

        Self {
            timers: TimerState::new(),
            ui: UIState::new(),
            config,
            deck,
            show,
            menu,
            modal: HelpModal::new(),
            parallax: ParallaxState::new(PARALLAX_FACTOR),
            theme,
            focus: FocusTarget::Hero,
            layout: PageLayout::compute(size.0, size.1),
            theme_dirty: false,
        }
    }

    pub fn request_render(&mut self) {
        self.ui.request_render();
    }

    pub fn needs_render(&self) -> bool {
        self.ui.needs_render()
    }

    pub fn clear_render_flag(&mut self) {
        self.ui.clear_render_flag();
    }

    pub fn update_activity(&mut self) {
        self.timers.update_activity();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.timers.time_since_activity()
    }

    /// Recomputes the layout for a new terminal size. A degenerate size
    /// clears the layout, which silently disables rendering and
    /// hit-testing until the terminal grows again.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.layout = PageLayout::compute(width, height);
        self.request_render();
    }

    /// Flips the theme, remembers it in the config and marks it for
    /// persistence on the next loop pass.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = Some(self.theme);
        self.theme_dirty = true;
        self.request_render();
        tracing::info!("Theme toggled to {}", self.theme);
    }

    /// Opens the help dialog, remembering the current focus for restore.
    pub fn open_modal(&mut self) {
        self.modal.open(self.focus);
        self.request_render();
    }

    /// Closes the help dialog and restores focus to its opener.
    pub fn close_modal(&mut self) {
        if let Some(target) = self.modal.close() {
            self.focus = target;
        }
        self.request_render();
    }

    /// Runs a dialog control.
    pub fn activate_modal_control(&mut self, control: ModalControl) {
        match control {
            ModalControl::Close => self.close_modal(),
            ModalControl::ToggleTheme => self.toggle_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_slides(count: usize) -> InteractiveState {
        let mut deck = Deck::builtin();
        deck.slides.truncate(count);
        InteractiveState::new(deck, Config::default(), (80, 24), Instant::now())
    }

    #[test]
    fn test_new_state_wants_initial_render() {
        let state = state_with_slides(3);
        assert!(state.needs_render());
        assert_eq!(state.show.current_index(), Some(0));
        assert!(state.show.timer_active());
        assert_eq!(state.menu.len(), 3);
    }

    #[test]
    fn test_empty_deck_never_arms_timer() {
        let state = state_with_slides(0);
        assert_eq!(state.show.current_index(), None);
        assert!(!state.show.timer_active());
    }

    #[test]
    fn test_resize_to_tiny_disables_layout() {
        let mut state = state_with_slides(2);
        assert!(state.layout.is_some());
        state.handle_resize(5, 3);
        assert!(state.layout.is_none());
        state.handle_resize(100, 30);
        assert!(state.layout.is_some());
    }

    #[test]
    fn test_toggle_theme_marks_dirty() {
        let mut state = state_with_slides(1);
        let before = state.theme;
        state.toggle_theme();
        assert_eq!(state.theme, before.toggled());
        assert_eq!(state.config.theme, Some(state.theme));
        assert!(state.theme_dirty);
    }

    #[test]
    fn test_modal_open_close_restores_focus() {
        let mut state = state_with_slides(1);
        state.focus = FocusTarget::MenuButton;
        state.open_modal();
        assert!(state.modal.is_open());
        state.close_modal();
        assert!(!state.modal.is_open());
        assert_eq!(state.focus, FocusTarget::MenuButton);
    }

    #[test]
    fn test_activate_theme_control_toggles() {
        let mut state = state_with_slides(1);
        let before = state.theme;
        state.open_modal();
        state.activate_modal_control(ModalControl::ToggleTheme);
        assert_eq!(state.theme, before.toggled());
        // The dialog stays open for theme toggles.
        assert!(state.modal.is_open());
        state.activate_modal_control(ModalControl::Close);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_debounce_windows() {
        let mut timers = TimerState::new();
        let now = Instant::now();
        assert!(timers.slide_change_allowed(now));
        timers.update_slide_change(now);
        assert!(!timers.slide_change_allowed(now + Duration::from_millis(50)));
        assert!(timers.slide_change_allowed(now + Duration::from_millis(200)));
    }
}
