//! Light/dark theme selection with persistence.
//!
//! The active theme is stored in the config file under the `theme` key as
//! `"dark"` or `"light"`. When the key is absent the default is derived from
//! the terminal's advertised background (the `COLORFGBG` environment variable
//! set by several terminal emulators), falling back to dark.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The value persisted to the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Derives the preferred theme from the environment when no theme has
    /// been persisted yet.
    ///
    /// Terminals that set `COLORFGBG` report `<fg>;<bg>` ANSI indices; a
    /// light background index (7 or 15) selects the light theme. Anything
    /// else, including an unset variable, selects dark.
    pub fn detect_preferred() -> Self {
        match std::env::var("COLORFGBG") {
            Ok(value) => Self::from_colorfgbg(&value),
            Err(_) => Theme::Dark,
        }
    }

    /// Parses a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
    /// The last field is the background color index.
    fn from_colorfgbg(value: &str) -> Self {
        let background = value.rsplit(';').next().unwrap_or("");
        match background.parse::<u8>() {
            Ok(7) | Ok(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(AppError::config_error(format!(
                "Invalid theme '{other}', expected 'dark' or 'light'"
            ))),
        }
    }
}
