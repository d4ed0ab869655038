//! Error types for autodiag.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config parse error in {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown value '{value}' for fact '{key}'")]
    UnknownFactValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiagError {
    /// Config problems are the user's to fix, everything else is internal.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DiagError::ConfigNotFound(_) | DiagError::ConfigParse { .. }
        )
    }
}
