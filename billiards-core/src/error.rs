use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a table
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read table '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("surface must have positive finite size, got {width} x {height}")]
    InvalidSurface { width: f32, height: f32 },

    #[error("body {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("body {index}: {field} is not finite")]
    NonFinite { index: usize, field: &'static str },

    #[error("physics parameter '{0}' is not finite")]
    InvalidParameter(&'static str),
}
