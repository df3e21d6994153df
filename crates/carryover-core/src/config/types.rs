//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for carryover
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Commit message parsing configuration
    pub message: MessageConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Commit message parsing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Lines starting with this prefix are dropped before segmentation
    pub comment_prefix: String,

    /// Exact line that opens the tests section when no test is listed
    pub no_tests_sentinel: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            no_tests_sentinel: "No new tests (OOPS!).".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (text, json)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}
