use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints the teletext-style logo block.
pub fn print_logo() {
    let logo = r#"
 ▀█▀ ██▀ █   ██▀ █▀▄ ██▀ ▄▀▀ █▄▀
  █  █▄▄ █▄▄ █▄▄ █▄▀ █▄▄ ▀▄▄ █ █
"#;
    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(46)), // Bright green
        Print(logo),
        ResetColor
    )
    .ok();
}

/// Helper to print a dynamic-width version status box with optional color highlights
pub fn print_version_status_box(lines: Vec<(String, Option<Color>)>) {
    // Compute max content width
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let box_width = max_content_width + 4; // 2 for borders, 2 for padding
    let border = format!("╔{:═<width$}╗", "", width = box_width - 2);
    let sep = format!("╠{:═<width$}╣", "", width = box_width - 2);
    let bottom = format!("╚{:═<width$}╝", "", width = box_width - 2);

    execute!(
        stdout(),
        SetForegroundColor(Color::AnsiValue(231)), // Authentic teletext white
        Print(format!("{border}\n"))
    )
    .ok();
    for (i, (line, color)) in lines.iter().enumerate() {
        let padded = format!("║ {line:<max_content_width$} ║");
        match color {
            Some(c) => {
                execute!(
                    stdout(),
                    SetForegroundColor(*c),
                    Print(padded),
                    SetForegroundColor(Color::AnsiValue(231)),
                    Print("\n")
                )
                .ok();
            }
            None => {
                execute!(
                    stdout(),
                    SetForegroundColor(Color::AnsiValue(231)),
                    Print(padded),
                    Print("\n")
                )
                .ok();
            }
        }
        if i == 0 && lines.len() > 2 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }
    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}

/// Prints the version box shown by `-V`.
pub fn print_version_info() {
    println!();
    print_version_status_box(vec![
        ("Teledeck Status".to_string(), None),
        ("".to_string(), None),
        (
            format!("Version: {CURRENT_VERSION}"),
            Some(Color::AnsiValue(231)),
        ),
    ]);
}
