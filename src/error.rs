//! Crate-level error types.

use std::path::PathBuf;

/// Errors produced while loading, saving or validating camera settings
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse camera settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize camera settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid camera settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, CameraError>;
