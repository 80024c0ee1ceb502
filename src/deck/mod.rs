//! Slide deck data model and loading.
//!
//! A deck is a TOML document with a title, an optional subtitle and a list of
//! slides. Decks are immutable once loaded; the show never adds or removes
//! slides at runtime.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One visual panel in the rotating display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Heading shown at the top of the slide body.
    pub title: String,
    /// Body text, one entry per line.
    #[serde(default)]
    pub lines: Vec<String>,
    /// Optional reference shown at the bottom of the slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// An ordered, fixed collection of slides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, rename = "slide")]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Loads a deck from a TOML file.
    ///
    /// # Returns
    /// * `Ok(Deck)` - Successfully parsed deck (possibly with zero slides)
    /// * `Err(AppError)` - File missing or unparseable
    pub async fn load(path: &str) -> Result<Self, AppError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::deck_not_found(path));
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| AppError::deck_parse(e.to_string(), path))
    }

    /// The deck shown when no deck file is given on the command line.
    pub fn builtin() -> Self {
        Deck {
            title: "TELEDECK".to_string(),
            subtitle: "Terminal slide presenter".to_string(),
            slides: vec![
                Slide {
                    title: "Welcome to teledeck".to_string(),
                    lines: vec![
                        "A teletext-style slide presenter for your terminal.".to_string(),
                        String::new(),
                        "Slides advance on their own every few seconds.".to_string(),
                        "Park the mouse over this area to pause the show.".to_string(),
                    ],
                    link: None,
                },
                Slide {
                    title: "Navigation".to_string(),
                    lines: vec![
                        "Use the arrow keys or click the edge arrows to".to_string(),
                        "move between slides, and the digit keys or the".to_string(),
                        "dots below to jump straight to one.".to_string(),
                    ],
                    link: None,
                },
                Slide {
                    title: "Make it yours".to_string(),
                    lines: vec![
                        "Write your own deck as a small TOML file and".to_string(),
                        "pass its path on the command line.".to_string(),
                        String::new(),
                        "Press 't' to flip between dark and light;".to_string(),
                        "the choice is remembered for next time.".to_string(),
                    ],
                    link: Some("https://github.com/teledeck/teledeck".to_string()),
                },
            ],
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Deck::load("/definitely/not/here.toml").await;
        assert!(matches!(result, Err(AppError::DeckNotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_valid_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        tokio::fs::write(
            &path,
            r#"
title = "DEMO"
subtitle = "An example"

[[slide]]
title = "First"
lines = ["hello", "world"]

[[slide]]
title = "Second"
link = "https://example.com"
"#,
        )
        .await
        .unwrap();

        let deck = Deck::load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(deck.title, "DEMO");
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].lines.len(), 2);
        assert_eq!(deck.slides[1].link.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_load_malformed_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        tokio::fs::write(&path, "title = [broken").await.unwrap();

        let result = Deck::load(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(AppError::DeckParse { .. })));
    }

    #[test]
    fn test_builtin_deck_is_usable() {
        let deck = Deck::builtin();
        assert!(!deck.is_empty());
        assert!(deck.slides.iter().all(|s| !s.title.is_empty()));
    }

    #[test]
    fn test_deck_with_no_slides_parses() {
        let deck: Deck = toml::from_str("title = \"EMPTY\"").unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.slide_count(), 0);
    }
}
