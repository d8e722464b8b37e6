//! Dark/light theme state and its on-disk preference.
//!
//! The saved theme is loaded once at startup and handed to whatever does
//! the rendering; the computation modules never see it. Toggling writes
//! the preference straight back to disk.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    theme: Theme,
}

/// JSON-backed store for the theme preference.
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store under the platform config directory.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("could not locate a config directory")?
            .join("agecalc");
        Ok(Self::open(dir))
    }

    pub fn open(dir: PathBuf) -> Self {
        Self {
            path: dir.join("preferences.json"),
        }
    }

    /// Saved theme, or `Light` when nothing usable is on disk.
    pub fn load(&self) -> Theme {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Theme::Light;
        };
        match serde_json::from_str::<Preferences>(&raw) {
            Ok(prefs) => prefs.theme,
            Err(err) => {
                warn!("ignoring unreadable preferences file: {err}");
                Theme::Light
            }
        }
    }

    /// Persist `theme`, creating the directory on first use.
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(&Preferences { theme })?;
        fs::write(&self.path, body).with_context(|| format!("writing {}", self.path.display()))
    }
}
