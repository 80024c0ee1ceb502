//! Configuration persistence and deck loading.

use serial_test::serial;
use teledeck::config::Config;
use teledeck::deck::Deck;
use teledeck::error::AppError;
use teledeck::theme::Theme;

#[tokio::test]
async fn test_theme_persists_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let mut config = Config::load_from_path(path_str).await.unwrap();
    assert_eq!(config.theme, None);

    config.theme = Some(Theme::Dark);
    config.save_to_path(path_str).await.unwrap();

    let reloaded = Config::load_from_path(path_str).await.unwrap();
    assert_eq!(reloaded.theme, Some(Theme::Dark));

    // The file stores the documented string values.
    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(raw.contains("theme = \"dark\""));
}

#[tokio::test]
#[serial]
async fn test_env_overrides_beat_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    let config = Config {
        theme: Some(Theme::Dark),
        log_file_path: None,
        auto_advance_ms: 5000,
    };
    config.save_to_path(path_str).await.unwrap();

    unsafe {
        std::env::set_var("TELEDECK_THEME", "light");
        std::env::set_var("TELEDECK_AUTO_ADVANCE_MS", "1500");
    }
    let loaded = Config::load_from_path(path_str).await;
    unsafe {
        std::env::remove_var("TELEDECK_THEME");
        std::env::remove_var("TELEDECK_AUTO_ADVANCE_MS");
    }

    let loaded = loaded.unwrap();
    assert_eq!(loaded.theme, Some(Theme::Light));
    assert_eq!(loaded.auto_advance_ms, 1500);
}

#[tokio::test]
#[serial]
async fn test_invalid_env_theme_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    unsafe {
        std::env::set_var("TELEDECK_THEME", "sepia");
    }
    let result = Config::load_from_path(path.to_str().unwrap()).await;
    unsafe {
        std::env::remove_var("TELEDECK_THEME");
    }

    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_deck_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talk.toml");

    let deck = Deck::builtin();
    let serialized = toml::to_string(&deck).unwrap();
    tokio::fs::write(&path, serialized).await.unwrap();

    let loaded = Deck::load(path.to_str().unwrap()).await.unwrap();
    assert_eq!(loaded.title, deck.title);
    assert_eq!(loaded.slide_count(), deck.slide_count());
    assert_eq!(loaded.slides[2].link, deck.slides[2].link);
}

#[tokio::test]
async fn test_deck_error_taxonomy() {
    let missing = Deck::load("/nope/missing.toml").await;
    assert!(matches!(missing, Err(AppError::DeckNotFound { .. })));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    tokio::fs::write(&path, "slides = {{{").await.unwrap();
    let bad = Deck::load(path.to_str().unwrap()).await;
    match bad {
        Err(AppError::DeckParse { path: p, .. }) => {
            assert!(p.ends_with("bad.toml"));
        }
        other => panic!("expected DeckParse, got {other:?}"),
    }
}
