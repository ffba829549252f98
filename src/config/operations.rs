//! Config loading and validation.

use super::model::Config;
use super::types::{LOG_LEVELS, MAX_RECURSION_LIMIT};
use crate::error::{PromptError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

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
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PromptError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// - `max_recursion` must not exceed 64
    /// - `log_level` must be one of trace, debug, info, warn, error
    pub fn validate(&self) -> Result<()> {
        if self.max_recursion > MAX_RECURSION_LIMIT {
            return Err(PromptError::Config(format!(
                "config validation failed: max_recursion must be at most {} (found {})",
                MAX_RECURSION_LIMIT, self.max_recursion
            )));
        }

        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(PromptError::Config(format!(
                "config validation failed: log_level must be one of {} (found '{}')",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}
