//! User settings stored in `~/.config/gamenfo/settings.toml`.
//!
//! A missing file means defaults. Command-line flags take precedence over
//! anything read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub render: RenderSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct RenderSettings {
    /// Output format used when `--format` is not given.
    pub format: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: "nfo".to_string(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/gamenfo/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gamenfo").join("settings.toml")
}

/// Load settings from `path`, falling back to defaults when it doesn't exist.
pub(crate) fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&contents)
        .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
