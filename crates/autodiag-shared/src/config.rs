//! autodiag configuration.
//!
//! Optional TOML file with output settings and fact presets:
//!
//! ```toml
//! [output]
//! format = "json"
//! color = false
//!
//! [facts]
//! arranca = false
//! humo = "negro"
//! ```
//!
//! Lookup order: explicit path, `$AUTODIAG_CONFIG`,
//! `$XDG_CONFIG_HOME/autodiag/config.toml`, `~/.config/autodiag/config.toml`.

use crate::error::DiagError;
use crate::intake::FactPreset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the config file path
pub const CONFIG_ENV: &str = "AUTODIAG_CONFIG";
const CONFIG_DIR: &str = "autodiag";
const CONFIG_FILE: &str = "config.toml";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Colour the text report when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,

    /// Base values for flag mode; command-line flags override them
    pub facts: FactPreset,
}

impl Config {
    /// Load from `explicit` if given, else from the first discovered file.
    ///
    /// A missing explicit file is an error; a missing discovered file just
    /// yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, DiagError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DiagError::ConfigNotFound(path.to_path_buf()));
            }
            return Self::load_from_path(path);
        }

        match discover_path(|name| std::env::var(name).ok()) {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, DiagError> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DiagError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DiagError> {
        toml::from_str(content).map_err(|source| DiagError::ConfigParse {
            path: "<inline>".to_string(),
            source,
        })
    }
}

/// Discover the config path from environment lookups
///
/// Priority:
/// 1. $AUTODIAG_CONFIG (explicit override)
/// 2. $XDG_CONFIG_HOME/autodiag/config.toml
/// 3. $HOME/.config/autodiag/config.toml
pub fn discover_path(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = env(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    if let Some(xdg) = env("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join(CONFIG_DIR).join(CONFIG_FILE));
    }

    env("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    })
}
