//! Config loading, validation, and prompt generation.

use super::model::PromptConfig;
use crate::error::{PromptError, Result};
use crate::prompt::{Shots, gen_prompt};
use crate::table::TableSource;
use std::path::Path;

impl PromptConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(PromptConfig)` - Successfully loaded and validated config
    /// * `Err(PromptError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading prompt config");

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: PromptConfig = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PromptError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// `shots` must be -1 or a non-negative count.
    pub fn validate(&self) -> Result<()> {
        if self.shots < -1 {
            return Err(PromptError::Config(format!(
                "config validation failed: shots must be -1 (all rows) or at least 0, found {}",
                self.shots
            )));
        }
        Ok(())
    }

    /// The configured example count.
    pub fn shots(&self) -> Result<Shots> {
        Shots::try_from(self.shots)
    }

    /// Build the few-shot prompt for `train` using these settings.
    pub fn gen_prompt<T>(&self, train: &T) -> Result<String>
    where
        T: TableSource + ?Sized,
    {
        gen_prompt(train, &self.subject, self.shots()?)
    }
}
