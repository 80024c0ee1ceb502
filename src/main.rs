// src/main.rs
use clap::Parser;
use crossterm::execute;
use std::io::stdout;

use teledeck::cli::Args;
use teledeck::config::Config;
use teledeck::deck::Deck;
use teledeck::error::AppError;
use teledeck::logging::setup_logging;
use teledeck::theme::Theme;
use teledeck::ui::{render_plain, run_interactive_ui};
use teledeck::version;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging to file (and stdout for non-interactive modes).
    // The guard must be kept alive for the duration of the program.
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle version flag first
    if args.version {
        execute!(stdout(), crossterm::terminal::SetTitle("TELEDECK 100"))?;
        version::print_logo();
        version::print_version_info();
        return Ok(());
    }

    // Handle configuration operations without touching the deck
    if args.list_config {
        execute!(stdout(), crossterm::terminal::SetTitle("TELEDECK 100"))?;
        version::print_logo();
        Config::display().await?;
        return Ok(());
    }

    if args.set_theme.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(theme) = &args.set_theme {
            config.theme = Some(theme.parse()?);
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;

    // Session-only overrides from the command line
    if let Some(interval) = args.auto_interval_ms {
        config.auto_advance_ms = interval;
        config.validate()?;
    }
    let session_theme = match &args.theme {
        Some(value) => Some(value.parse::<Theme>()?),
        None => None,
    };

    // Load the deck; with no path the built-in demo deck is shown
    let deck = match &args.deck {
        Some(path) => Deck::load(path).await?,
        None => Deck::builtin(),
    };
    tracing::info!("Loaded deck '{}' with {} slides", deck.title, deck.slide_count());

    if args.once {
        // Quick view mode - render one slide and exit
        if args.slide == 0 || (args.slide > deck.slide_count() && !deck.is_empty()) {
            return Err(AppError::config_error(format!(
                "--slide must be between 1 and {}",
                deck.slide_count()
            )));
        }

        execute!(stdout(), crossterm::terminal::SetTitle("TELEDECK 100"))?;
        let theme = session_theme.unwrap_or_else(|| config.effective_theme());
        render_plain(&deck, args.slide - 1, theme, &mut stdout())?;
        println!();
        return Ok(());
    }

    // Interactive mode
    if let Some(theme) = session_theme {
        config.theme = Some(theme);
    }
    execute!(stdout(), crossterm::terminal::SetTitle("TELEDECK 100"))?;

    run_interactive_ui(deck, config, args.debug).await
}
