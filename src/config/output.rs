//! Output configuration module.
//!
//! Controls how transcripts are rendered to stdout.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Transcript rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text listing followed by statistics
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Printed in place of any item that has no mapping
    pub placeholder: String,

    /// Whether to print letter and symbol statistics
    pub statistics: bool,

    /// Rendering format
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            placeholder: "?".to_string(),
            statistics: true,
            format: OutputFormat::Text,
        }
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.placeholder.chars().count() != 1 {
            return Err(ConfigError::ValidationError(format!(
                "placeholder must be a single character, got {:?}",
                self.placeholder
            )));
        }

        Ok(())
    }
}
