//! Error module for Kani Morse.
//!
//! Codec errors describe a single letter or token and are usually recorded
//! per item rather than propagated. Everything that stops a whole run
//! (configuration, I/O, serialization) surfaces as a [`KaniError`].

use thiserror::Error;

use crate::codec::MorseError;

pub mod config;

/// Result type alias used throughout the application layer.
pub type KaniResult<T> = Result<T, KaniError>;

/// Application-level error enum.
#[derive(Error, Debug)]
pub enum KaniError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Codec errors that could not be handled per item.
    #[error("Codec error: {0}")]
    Codec(#[from] MorseError),

    /// IO errors that may occur while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors from JSON transcript output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
