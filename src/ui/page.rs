//! Buffered teletext-style rendering of the slide surface.
//!
//! The whole frame is composed into a string buffer first and written in a
//! single operation, so a render pass can never show a half-drawn screen.

use std::io::Write;

use crossterm::style::Color;

use crate::constants::PAGE_NUMBER;
use crate::constants::ui::PLAIN_WIDTH;
use crate::deck::Deck;
use crate::error::AppError;
use crate::slideshow::Slideshow;
use crate::theme::Theme;
use crate::ui::layout::PageLayout;
use crate::ui::menu::NavMenu;
use crate::ui::modal::{FocusTarget, HelpModal};
use crate::ui::palette;

/// Width of the green title band at the left of the header row.
const TITLE_BAND_WIDTH: usize = 10;

/// Key help shown inside the help dialog.
const HELP_LINES: [&str; 6] = [
    "arrows / edge clicks  change slide",
    "1-9 / dots            jump to slide",
    "m                     slide menu",
    "t                     dark/light theme",
    "hover the slides      pause autoplay",
    "Esc / overlay click   close this dialog",
];

/// Helper function to extract ANSI color code from crossterm Color enum.
/// Provides a fallback value for non-ANSI colors.
fn ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

fn move_to(buffer: &mut String, col: u16, row: u16) {
    buffer.push_str(&format!("\x1b[{};{}H", row + 1, col + 1));
}

fn set_fg(buffer: &mut String, color: Color) {
    buffer.push_str(&format!("\x1b[38;5;{}m", ansi_code(color, 231)));
}

fn set_bg(buffer: &mut String, color: Color) {
    buffer.push_str(&format!("\x1b[48;5;{}m", ansi_code(color, 16)));
}

fn reset(buffer: &mut String) {
    buffer.push_str("\x1b[0m");
}

/// Truncates to at most `max` characters.
fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// One full frame of the interactive UI. Borrows everything it draws; the
/// page itself owns no state.
pub struct SlidePage<'a> {
    deck: &'a Deck,
    show: &'a Slideshow,
    menu: &'a NavMenu,
    modal: &'a HelpModal,
    theme: Theme,
    parallax_rows: i32,
    layout: PageLayout,
    focus: FocusTarget,
}

impl<'a> SlidePage<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        deck: &'a Deck,
        show: &'a Slideshow,
        menu: &'a NavMenu,
        modal: &'a HelpModal,
        theme: Theme,
        parallax_rows: i32,
        layout: PageLayout,
        focus: FocusTarget,
    ) -> Self {
        Self {
            deck,
            show,
            menu,
            modal,
            theme,
            parallax_rows,
            layout,
            focus,
        }
    }

    /// Renders the full frame into `out` in one write.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let mut buffer = String::with_capacity(4096);

        buffer.push_str("\x1b[?25l"); // Hide cursor
        buffer.push_str("\x1b[H\x1b[2J"); // Home and clear

        self.render_header(&mut buffer);
        self.render_subheader(&mut buffer);
        self.render_slide_body(&mut buffer);
        self.render_nav_zones(&mut buffer);
        self.render_dots(&mut buffer);
        self.render_footer(&mut buffer);

        if self.menu.is_open() {
            self.render_menu(&mut buffer);
        }
        if self.modal.is_open() {
            self.render_modal(&mut buffer);
        }

        reset(&mut buffer);
        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn render_header(&self, buffer: &mut String) {
        let width = self.layout.width as usize;

        move_to(buffer, 0, 0);
        set_bg(buffer, palette::title_bg(self.theme));
        set_fg(buffer, palette::title_fg(self.theme));
        buffer.push_str(&format!("{:<band$}", " TELEDECK", band = TITLE_BAND_WIDTH));

        set_bg(buffer, palette::header_bg(self.theme));
        set_fg(buffer, palette::header_fg(self.theme));
        let rest = width.saturating_sub(TITLE_BAND_WIDTH);
        let header_text = clip(
            &format!("P{} {} ", PAGE_NUMBER, clip(&self.deck.title, 40)),
            rest,
        );
        buffer.push_str(&format!("{header_text:>rest$}"));
        reset(buffer);

        // Header buttons; the focused one renders reversed.
        let help = self.layout.help_button;
        move_to(buffer, help.x, help.y);
        set_bg(buffer, palette::header_bg(self.theme));
        set_fg(buffer, palette::header_fg(self.theme));
        if self.focus == FocusTarget::HelpButton {
            buffer.push_str("\x1b[7m ? \x1b[27m");
        } else {
            buffer.push_str(" ? ");
        }
        let menu = self.layout.menu_button;
        move_to(buffer, menu.x, menu.y);
        if self.focus == FocusTarget::MenuButton {
            buffer.push_str("\x1b[7m = \x1b[27m");
        } else {
            buffer.push_str(" = ");
        }
        reset(buffer);
    }

    fn render_subheader(&self, buffer: &mut String) {
        move_to(buffer, 1, 1);
        set_fg(buffer, palette::subheader_fg(self.theme));
        buffer.push_str(&clip(&self.deck.subtitle, self.layout.width as usize - 10));

        if let Some(index) = self.show.current_index() {
            let position = format!("{}/{}", index + 1, self.show.slide_count());
            let col = self.layout.width.saturating_sub(position.len() as u16 + 1);
            move_to(buffer, col, 1);
            buffer.push_str(&position);
        }
        reset(buffer);
    }

    fn render_slide_body(&self, buffer: &mut String) {
        let Some(index) = self.show.current_index() else {
            return; // Empty deck: the surface simply stays blank.
        };
        let Some(slide) = self.deck.slides.get(index) else {
            return;
        };

        let body = self.layout.body;
        let offset = self
            .parallax_rows
            .clamp(0, body.height.saturating_sub(1) as i32) as u16;
        let top = body.y + offset;
        let bottom = body.y + body.height;
        let width = body.width as usize;

        let mut row = top;
        if row < bottom {
            let title = clip(&slide.title, width);
            let col = body.x + (body.width.saturating_sub(title.chars().count() as u16)) / 2;
            move_to(buffer, col, row);
            set_fg(buffer, palette::slide_title_fg(self.theme));
            buffer.push_str(&title);
        }
        row += 2;

        set_fg(buffer, palette::text_fg(self.theme));
        for line in &slide.lines {
            if row >= bottom {
                break;
            }
            move_to(buffer, body.x, row);
            buffer.push_str(&clip(line, width));
            row += 1;
        }

        if let Some(link) = &slide.link
            && row + 1 < bottom
        {
            move_to(buffer, body.x, row + 1);
            set_fg(buffer, palette::link_fg(self.theme));
            buffer.push_str(&clip(link, width));
        }
        reset(buffer);
    }

    fn render_nav_zones(&self, buffer: &mut String) {
        if self.show.slide_count() == 0 {
            return;
        }
        let hero = self.layout.hero;
        let mid = hero.y + hero.height / 2;
        set_fg(buffer, palette::nav_fg(self.theme));
        move_to(buffer, 1, mid);
        buffer.push('<');
        move_to(buffer, self.layout.width - 2, mid);
        buffer.push('>');
        reset(buffer);
    }

    fn render_dots(&self, buffer: &mut String) {
        let positions = self.layout.dot_positions(self.show.slide_count());
        for (indicator, (col, row)) in self.show.indicators().iter().zip(positions) {
            move_to(buffer, col, row);
            if indicator.is_active() {
                set_fg(buffer, palette::dot_active_fg(self.theme));
                buffer.push('●');
            } else {
                set_fg(buffer, palette::dot_inactive_fg(self.theme));
                buffer.push('○');
            }
        }
        reset(buffer);
    }

    fn render_footer(&self, buffer: &mut String) {
        let controls = if self.show.slide_count() > 1 {
            "q=Quit ←→=Slides m=Menu h=Help t=Theme"
        } else {
            "q=Quit m=Menu h=Help t=Theme"
        };
        move_to(buffer, 1, self.layout.footer_row);
        set_fg(buffer, palette::dim_fg(self.theme));
        buffer.push_str(&clip(controls, self.layout.width as usize - 2));
        reset(buffer);
    }

    fn render_menu(&self, buffer: &mut String) {
        let panel = self.layout.menu_panel(self.menu.len());
        let inner = panel.width.saturating_sub(2) as usize;
        let border = palette::border_fg(self.theme);

        move_to(buffer, panel.x, panel.y);
        set_fg(buffer, border);
        buffer.push_str(&format!("╔{:═<inner$}╗", "SLIDES"));

        let active = self.show.current_index();
        for (i, entry) in self.menu.entries().iter().enumerate() {
            let row = panel.y + 1 + i as u16;
            move_to(buffer, panel.x, row);
            set_fg(buffer, border);
            buffer.push('║');
            let marker = if active == Some(i) { '▸' } else { ' ' };
            let label = clip(entry, inner.saturating_sub(4));
            set_fg(
                buffer,
                if active == Some(i) {
                    palette::slide_title_fg(self.theme)
                } else {
                    palette::text_fg(self.theme)
                },
            );
            buffer.push_str(&format!("{marker}{} {label:<w$}", i + 1, w = inner.saturating_sub(3)));
            set_fg(buffer, border);
            move_to(buffer, panel.x + panel.width - 1, row);
            buffer.push('║');
        }

        move_to(buffer, panel.x, panel.y + panel.height - 1);
        set_fg(buffer, border);
        buffer.push_str(&format!("╚{:═<inner$}╝", ""));
        reset(buffer);
    }

    fn render_modal(&self, buffer: &mut String) {
        let modal = self.layout.modal_box();
        let inner = modal.width.saturating_sub(2) as usize;
        let border = palette::border_fg(self.theme);

        move_to(buffer, modal.x, modal.y);
        set_fg(buffer, border);
        buffer.push_str(&format!("╔{:═<inner$}╗", " HELP "));

        for i in 1..modal.height.saturating_sub(1) {
            move_to(buffer, modal.x, modal.y + i);
            set_fg(buffer, border);
            buffer.push_str(&format!("║{:inner$}║", ""));
        }

        set_fg(buffer, palette::text_fg(self.theme));
        for (i, line) in HELP_LINES.iter().enumerate() {
            let row = modal.y + 2 + i as u16;
            if row >= modal.y + modal.height.saturating_sub(2) {
                break;
            }
            move_to(buffer, modal.x + 2, row);
            buffer.push_str(&clip(line, inner.saturating_sub(2)));
        }

        // Control row; the focused control renders reversed.
        let labels = self.modal.control_labels();
        let rects = self.layout.modal_control_rects(&labels);
        for (i, (label, rect)) in labels.iter().zip(rects).enumerate() {
            move_to(buffer, rect.x, rect.y);
            set_fg(buffer, palette::text_fg(self.theme));
            if self.modal.focus_index() == i {
                buffer.push_str(&format!("\x1b[7m[ {label} ]\x1b[27m"));
            } else {
                buffer.push_str(&format!("[ {label} ]"));
            }
        }

        move_to(buffer, modal.x, modal.y + modal.height - 1);
        set_fg(buffer, border);
        buffer.push_str(&format!("╚{:═<inner$}╝", ""));
        reset(buffer);
    }
}

/// Renders one slide as plain scrollback output for `--once` mode. No
/// screen clearing, no cursor movement; the output stays in the terminal
/// history.
pub fn render_plain<W: Write>(
    deck: &Deck,
    slide_index: usize,
    theme: Theme,
    out: &mut W,
) -> Result<(), AppError> {
    let width = PLAIN_WIDTH as usize;
    let mut buffer = String::with_capacity(1024);

    set_bg(&mut buffer, palette::title_bg(theme));
    set_fg(&mut buffer, palette::title_fg(theme));
    buffer.push_str(&format!("{:<band$}", " TELEDECK", band = TITLE_BAND_WIDTH));
    set_bg(&mut buffer, palette::header_bg(theme));
    set_fg(&mut buffer, palette::header_fg(theme));
    let header_text = format!("P{} {} ", PAGE_NUMBER, clip(&deck.title, 40));
    buffer.push_str(&format!(
        "{header_text:>rest$}",
        rest = width - TITLE_BAND_WIDTH
    ));
    reset(&mut buffer);
    buffer.push('\n');

    set_fg(&mut buffer, palette::subheader_fg(theme));
    buffer.push_str(&format!(" {}", clip(&deck.subtitle, width - 1)));
    reset(&mut buffer);
    buffer.push_str("\n\n");

    if let Some(slide) = deck.slides.get(slide_index) {
        set_fg(&mut buffer, palette::slide_title_fg(theme));
        buffer.push_str(&format!("  {}\n\n", clip(&slide.title, width - 2)));
        set_fg(&mut buffer, palette::text_fg(theme));
        for line in &slide.lines {
            buffer.push_str(&format!("  {}\n", clip(line, width - 2)));
        }
        if let Some(link) = &slide.link {
            set_fg(&mut buffer, palette::link_fg(theme));
            buffer.push_str(&format!("\n  {}\n", clip(link, width - 2)));
        }
        reset(&mut buffer);

        buffer.push('\n');
        set_fg(&mut buffer, palette::dim_fg(theme));
        let dots: Vec<&str> = (0..deck.slide_count())
            .map(|i| if i == slide_index { "●" } else { "○" })
            .collect();
        buffer.push_str(&format!("  {}\n", dots.join(" ")));
    }

    reset(&mut buffer);
    out.write_all(buffer.as_bytes())?;
    out.flush()?;
    Ok(())
}
