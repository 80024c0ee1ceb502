//! Help dialog with a keyboard focus trap.
//!
//! While the dialog is open, Tab and Shift+Tab cycle its controls and wrap
//! at both ends, so focus can never escape the dialog. Closing hands focus
//! back to whatever control opened it.

/// The control that holds keyboard focus outside the dialog. Remembered on
/// open so closing can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The slide surface itself; arrow keys act on the show.
    Hero,
    /// The `?` header button.
    HelpButton,
    /// The menu toggle header button.
    MenuButton,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            FocusTarget::Hero => FocusTarget::HelpButton,
            FocusTarget::HelpButton => FocusTarget::MenuButton,
            FocusTarget::MenuButton => FocusTarget::Hero,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusTarget::Hero => FocusTarget::MenuButton,
            FocusTarget::HelpButton => FocusTarget::Hero,
            FocusTarget::MenuButton => FocusTarget::HelpButton,
        }
    }
}

/// A focusable control inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalControl {
    Close,
    ToggleTheme,
}

impl ModalControl {
    pub fn label(self) -> &'static str {
        match self {
            ModalControl::Close => "Close",
            ModalControl::ToggleTheme => "Theme",
        }
    }
}

#[derive(Debug)]
pub struct HelpModal {
    controls: Vec<ModalControl>,
    open: bool,
    focus: usize,
    restore_focus: Option<FocusTarget>,
}

impl HelpModal {
    pub fn new() -> Self {
        Self {
            controls: vec![ModalControl::Close, ModalControl::ToggleTheme],
            open: false,
            focus: 0,
            restore_focus: None,
        }
    }

    /// A dialog with a custom control set; a dialog with no controls traps
    /// nothing. Used by tests.
    pub fn with_controls(controls: Vec<ModalControl>) -> Self {
        Self {
            controls,
            open: false,
            focus: 0,
            restore_focus: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn controls(&self) -> &[ModalControl] {
        &self.controls
    }

    pub fn control_labels(&self) -> Vec<&'static str> {
        self.controls.iter().map(|c| c.label()).collect()
    }

    /// Opens the dialog and focuses its first control, remembering where
    /// focus came from. Reopening while already open keeps the original
    /// return target.
    pub fn open(&mut self, from: FocusTarget) {
        if self.open {
            return;
        }
        self.open = true;
        self.focus = 0;
        self.restore_focus = Some(from);
    }

    /// Closes the dialog and yields the control focus should return to.
    /// Safe to call when already closed.
    pub fn close(&mut self) -> Option<FocusTarget> {
        self.open = false;
        self.restore_focus.take()
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> Option<ModalControl> {
        if !self.open {
            return None;
        }
        self.controls.get(self.focus).copied()
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.controls.len() {
            self.focus = index;
        }
    }

    /// Tab: forward through the controls, wrapping from last to first.
    pub fn focus_next(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.controls.len();
    }

    /// Shift+Tab: backward through the controls, wrapping from first to last.
    pub fn focus_prev(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.focus = if self.focus == 0 {
            self.controls.len() - 1
        } else {
            self.focus - 1
        };
    }
}

impl Default for HelpModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_focuses_first_control() {
        let mut modal = HelpModal::new();
        assert!(modal.focused().is_none());
        modal.open(FocusTarget::HelpButton);
        assert!(modal.is_open());
        assert_eq!(modal.focused(), Some(ModalControl::Close));
    }

    #[test]
    fn test_tab_wraps_both_ends() {
        let mut modal = HelpModal::new();
        modal.open(FocusTarget::Hero);

        modal.focus_next();
        assert_eq!(modal.focused(), Some(ModalControl::ToggleTheme));
        modal.focus_next();
        assert_eq!(modal.focused(), Some(ModalControl::Close), "wrap forward");

        modal.focus_prev();
        assert_eq!(modal.focused(), Some(ModalControl::ToggleTheme), "wrap backward");
    }

    #[test]
    fn test_close_restores_opener() {
        let mut modal = HelpModal::new();
        modal.open(FocusTarget::MenuButton);
        assert_eq!(modal.close(), Some(FocusTarget::MenuButton));
        // A second close has nothing left to restore.
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn test_reopen_keeps_original_return_target() {
        let mut modal = HelpModal::new();
        modal.open(FocusTarget::HelpButton);
        modal.open(FocusTarget::MenuButton);
        assert_eq!(modal.close(), Some(FocusTarget::HelpButton));
    }

    #[test]
    fn test_empty_dialog_traps_nothing() {
        let mut modal = HelpModal::with_controls(Vec::new());
        modal.open(FocusTarget::Hero);
        modal.focus_next();
        modal.focus_prev();
        assert!(modal.focused().is_none());
    }

    #[test]
    fn test_focus_target_cycle_closure() {
        let mut target = FocusTarget::Hero;
        for _ in 0..3 {
            target = target.next();
        }
        assert_eq!(target, FocusTarget::Hero);
        assert_eq!(FocusTarget::Hero.next().prev(), FocusTarget::Hero);
    }
}
