//! Config struct definition and default implementation.

use super::types::*;
use crate::template::RenderOptions;
use serde::{Deserialize, Serialize};

/// Configuration for prompt resolution and the CLI.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Resolution settings
    // =========================================================================
    /// Nesting depth for nested prompt lookup (default: 5).
    #[serde(default = "default_max_recursion")]
    pub max_recursion: u32,

    /// Whether to substitute context values after nested lookup.
    #[serde(default)]
    pub auto_compile: bool,

    /// Whether unresolvable placeholders are errors (default) or left as literals.
    #[serde(default = "default_true")]
    pub raise_on_missing_input: bool,

    // =========================================================================
    // Render settings
    // =========================================================================
    /// Render-time (`[[ ]]`) engine settings.
    #[serde(default)]
    pub render: RenderOptions,

    // =========================================================================
    // Logging settings
    // =========================================================================
    /// Default log level; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_recursion: default_max_recursion(),
            auto_compile: false,
            raise_on_missing_input: default_true(),
            render: RenderOptions::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
