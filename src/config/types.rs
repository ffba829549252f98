//! Configuration types and defaults for prompthandler.

use crate::handler::DEFAULT_MAX_RECURSION;
pub use crate::handler::MAX_RECURSION_LIMIT;
use serde::{Deserialize, Serialize};

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable multi-line output (default).
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Default value functions
// ============================================================================

pub(crate) fn default_max_recursion() -> u32 {
    DEFAULT_MAX_RECURSION
}

pub(crate) fn default_log_level() -> String {
    "warn".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
