use crossterm::style::Color;

use crate::theme::Theme;

// Teletext appearance, resolved per theme. The header band keeps its
// authentic blue in both themes; body colors flip for readability.

pub fn header_bg(_theme: Theme) -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg(_theme: Theme) -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn title_bg(_theme: Theme) -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn title_fg(_theme: Theme) -> Color {
    Color::AnsiValue(16)
} // Black on the green band

pub fn subheader_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::AnsiValue(46),  // Bright green
        Theme::Light => Color::AnsiValue(28), // Deep green
    }
}

pub fn slide_title_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::AnsiValue(226), // Bright yellow
        Theme::Light => Color::AnsiValue(130), // Ochre
    }
}

pub fn text_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::AnsiValue(231), // Pure white
        Theme::Light => Color::AnsiValue(16), // Black
    }
}

pub fn dim_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::AnsiValue(244),
        Theme::Light => Color::AnsiValue(102),
    }
}

pub fn link_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::AnsiValue(51), // Bright cyan
        Theme::Light => Color::AnsiValue(25), // Deep blue
    }
}

pub fn dot_active_fg(theme: Theme) -> Color {
    slide_title_fg(theme)
}

pub fn dot_inactive_fg(theme: Theme) -> Color {
    dim_fg(theme)
}

pub fn nav_fg(theme: Theme) -> Color {
    dim_fg(theme)
}

pub fn border_fg(theme: Theme) -> Color {
    text_fg(theme)
}
