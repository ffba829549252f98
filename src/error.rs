//! Error types for prompthandler.
//!
//! Uses thiserror for derive macros. Messages are meant to be shown to the
//! caller as-is, so they name the prompt or variable that caused the failure.

use crate::exit_codes;
use crate::template::FormatError;
use thiserror::Error;

/// Main error type for prompt handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The prompt (or a variable resolved as a nested prompt) does not exist.
    #[error("Prompt or variable with name \"{name}\" not found.")]
    NotFound {
        /// Trimmed name that was looked up.
        name: String,
    },

    /// Placeholders were still unresolved when the recursion budget ran out.
    #[error("Missing input context: [{}] - max recursion reached.", quoted_list(.missing))]
    MissingContext {
        /// Unresolved identifiers, in ascending order.
        missing: Vec<String>,
    },

    /// Direct compilation referenced an undefined key or had bad brace syntax.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// A namespace contained no upper-case string constants.
    #[error("No prompts found in namespace (scanned: [{}])", quoted_list(.scanned))]
    NoPromptsFound {
        /// Every entry name that was inspected.
        scanned: Vec<String>,
    },

    /// The render-time template engine rejected the content.
    #[error("Render failed: {0}")]
    Render(String),

    /// Configuration or input file could not be read or parsed.
    #[error("{0}")]
    Config(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::NotFound { .. } => exit_codes::NOT_FOUND,
            PromptError::MissingContext { .. } => exit_codes::MISSING_CONTEXT,
            PromptError::Format(_) | PromptError::Render(_) => exit_codes::TEMPLATE_FAILURE,
            PromptError::NoPromptsFound { .. } | PromptError::Config(_) => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        PromptError::NotFound { name: name.into() }
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for prompt operations.
pub type Result<T> = std::result::Result<T, PromptError>;
