use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render one slide and exit)
/// - config operations are requested
/// - --version flag is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.set_theme.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
}

/// Teletext Slide Deck Presenter
///
/// A nostalgic teletext-style presenter for slide decks written as small
/// TOML files. Shows one slide at a time with dot indicators, automatic
/// advancement and a persistent dark/light theme.
///
/// In interactive mode (default):
/// - Use arrow keys (←/→) or click the screen edges to change slides
/// - Press 1-9 or click a dot to jump straight to a slide
/// - Hover the mouse over the slides to pause autoplay
/// - Press 'm' for the slide menu, 'h' for help, 't' to flip the theme
/// - Press 'q' to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Path to a deck file in TOML format. Without one, a built-in demo
    /// deck is shown.
    #[arg(value_name = "DECK")]
    pub deck: Option<String>,

    /// Render one slide to stdout and exit immediately. Useful for scripts
    /// or a quick look at a deck. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Which slide --once renders, 1-based.
    #[arg(
        long = "slide",
        short = 's',
        value_name = "N",
        default_value_t = 1,
        help_heading = "Display Options"
    )]
    pub slide: usize,

    /// Use this theme for the session without persisting it.
    #[arg(long = "theme", value_name = "THEME", help_heading = "Display Options")]
    pub theme: Option<String>,

    /// Override the autoplay interval in milliseconds for this session.
    #[arg(
        long = "auto-interval",
        value_name = "MS",
        help_heading = "Display Options"
    )]
    pub auto_interval_ms: Option<u64>,

    /// Persist a theme choice in the config file and exit.
    #[arg(long = "set-theme", value_name = "THEME", help_heading = "Configuration")]
    pub set_theme: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't switch to the alternate screen.
    /// Info logs are written to the log file instead of the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
