//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Settings for building a few-shot prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Subject in snake_case (e.g. "computer_science").
    pub subject: String,

    /// Number of example rows; -1 uses every row.
    pub shots: i64,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            subject: String::new(),
            shots: -1,
        }
    }
}
