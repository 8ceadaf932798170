// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON rendering error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A program record could not be built from its textual form.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The flow network ended in a state that cannot come from a correct
    /// build + augment sequence.
    #[error("Internal consistency error: {0}")]
    Invariant(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SchedulerError>;
