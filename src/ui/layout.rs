//! Screen geometry for the interactive UI.
//!
//! All rects are resolved once per resize from the terminal dimensions and
//! consumed both by the renderer and by mouse hit-testing, so clicks and
//! pixels can never disagree. A terminal below the minimum size yields no
//! layout at all; callers treat that as "nothing to draw, nothing to hit".

use crate::constants::ui::{
    CONTENT_MARGIN, DOT_SPACING, HEADER_ROWS, MENU_WIDTH, MIN_HEIGHT, MIN_WIDTH, NAV_ZONE_WIDTH,
};

/// Axis-aligned cell rectangle in 0-based terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    /// The slide surface: everything between the header rows and the footer
    /// row, including the indicator dots. Pointer hover against this rect
    /// drives autoplay pause/resume.
    pub hero: Rect,
    /// Text area of the active slide, inside the nav zones.
    pub body: Rect,
    /// Row the indicator dots are drawn on.
    pub dots_row: u16,
    /// Row the control footer is drawn on.
    pub footer_row: u16,
    /// Click zone for the previous-slide control (left edge).
    pub prev_zone: Rect,
    /// Click zone for the next-slide control (right edge).
    pub next_zone: Rect,
    /// Header button that toggles the slide-list menu.
    pub menu_button: Rect,
    /// Header button that opens the help dialog.
    pub help_button: Rect,
}

impl PageLayout {
    /// Computes the layout for a terminal of the given size, or `None` when
    /// the terminal is too small to draw into.
    pub fn compute(width: u16, height: u16) -> Option<Self> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return None;
        }

        let footer_row = height - 1;
        let dots_row = height - 2;
        let hero = Rect {
            x: 0,
            y: HEADER_ROWS,
            width,
            height: height - HEADER_ROWS - 1,
        };
        let body_x = NAV_ZONE_WIDTH + CONTENT_MARGIN;
        let body = Rect {
            x: body_x,
            y: HEADER_ROWS + 1,
            width: width.saturating_sub(2 * body_x),
            height: dots_row - HEADER_ROWS - 1,
        };

        Some(Self {
            width,
            height,
            hero,
            body,
            dots_row,
            footer_row,
            prev_zone: Rect {
                x: 0,
                y: HEADER_ROWS,
                width: NAV_ZONE_WIDTH,
                height: height - HEADER_ROWS - 1,
            },
            next_zone: Rect {
                x: width - NAV_ZONE_WIDTH,
                y: HEADER_ROWS,
                width: NAV_ZONE_WIDTH,
                height: height - HEADER_ROWS - 1,
            },
            menu_button: Rect {
                x: width - 3,
                y: 0,
                width: 3,
                height: 1,
            },
            help_button: Rect {
                x: width - 7,
                y: 0,
                width: 3,
                height: 1,
            },
        })
    }

    /// Column/row of each indicator dot, centered on the dots row.
    pub fn dot_positions(&self, count: usize) -> Vec<(u16, u16)> {
        if count == 0 {
            return Vec::new();
        }
        let span = (count as u16 - 1) * DOT_SPACING + 1;
        let start = self.width.saturating_sub(span) / 2;
        (0..count as u16)
            .map(|i| (start + i * DOT_SPACING, self.dots_row))
            .collect()
    }

    /// Which indicator a click lands on, if any.
    pub fn indicator_at(&self, count: usize, col: u16, row: u16) -> Option<usize> {
        if row != self.dots_row {
            return None;
        }
        self.dot_positions(count)
            .iter()
            .position(|&(dot_col, _)| dot_col == col)
    }

    /// The open menu panel, anchored to the right edge under the header.
    pub fn menu_panel(&self, entries: usize) -> Rect {
        let width = MENU_WIDTH.min(self.width);
        let height = (entries as u16 + 2).min(self.height.saturating_sub(2));
        Rect {
            x: self.width - width,
            y: 1,
            width,
            height,
        }
    }

    /// Which menu entry a click lands on, if any.
    pub fn menu_entry_at(&self, entries: usize, col: u16, row: u16) -> Option<usize> {
        let panel = self.menu_panel(entries);
        if !panel.contains(col, row) {
            return None;
        }
        let first_entry_row = panel.y + 1;
        if row < first_entry_row || row >= first_entry_row + entries as u16 {
            return None;
        }
        Some((row - first_entry_row) as usize)
    }

    /// The help dialog box, centered on the screen.
    pub fn modal_box(&self) -> Rect {
        let width = 46u16.min(self.width.saturating_sub(4));
        let height = 11u16.min(self.height.saturating_sub(2));
        Rect {
            x: (self.width - width) / 2,
            y: (self.height - height) / 2,
            width,
            height,
        }
    }

    /// Click rects for the dialog's controls, laid out left to right on the
    /// control row. `labels` come from the modal so rendering and
    /// hit-testing share one source of truth.
    pub fn modal_control_rects(&self, labels: &[&str]) -> Vec<Rect> {
        let modal = self.modal_box();
        let row = modal.y + modal.height - 2;
        let mut rects = Vec::with_capacity(labels.len());
        let mut x = modal.x + 2;
        for label in labels {
            // "[ label ]"
            let width = label.len() as u16 + 4;
            rects.push(Rect {
                x,
                y: row,
                width,
                height: 1,
            });
            x += width + 2;
        }
        rects
    }

    /// Which modal control a click lands on, if any.
    pub fn modal_control_at(&self, labels: &[&str], col: u16, row: u16) -> Option<usize> {
        self.modal_control_rects(labels)
            .iter()
            .position(|rect| rect.contains(col, row))
    }
}
