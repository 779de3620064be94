//! Error types for configuration loading and the terminal frontend.
//!
//! The simulation itself never fails: crashing into a pipe is a state
//! transition, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or validating a [`GameConfig`](crate::core::GameConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for the `flappy` binary.
#[derive(Error, Debug)]
pub enum FlappyError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T, E = FlappyError> = std::result::Result<T, E>;
