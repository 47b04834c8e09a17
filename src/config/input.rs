//! Input configuration module.
//!
//! Where file-based runs read from, and how encode input treats characters
//! that are not letters.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Text file read by "encode by file"
    pub encode_file: PathBuf,

    /// Morse token file read by "decode by file"
    pub decode_file: PathBuf,

    /// Report non-letters in encode input as errors instead of dropping them
    pub strict_letters: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            encode_file: PathBuf::from("encode_input.txt"),
            decode_file: PathBuf::from("decode_input.txt"),
            strict_letters: false,
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.encode_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "encode_file must not be empty".to_string(),
            ));
        }

        if self.decode_file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "decode_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
