//! Prompthandler: named prompt templates with nested placeholder resolution.
//!
//! Prompts are stored by name in a [`handler::PromptHandler`] backend and
//! resolved into final strings by substituting variables. A prompt may
//! reference other prompts through `{NAME}` placeholders; those are expanded
//! recursively up to a bounded depth.
//!
//! ```
//! use prompthandler::handler::{PromptHandler, ResolveOptions, context};
//! use prompthandler::store::InMemoryPromptHandler;
//!
//! let handler = InMemoryPromptHandler::from_yaml_str(r#"
//! GREETING: "Hello {name}!"
//! NESTED_PROMPT: "This is a nested prompt: {GREETING}"
//! "#)?;
//!
//! let options = ResolveOptions::new()
//!     .with_context(context([("name", "Alice")]))
//!     .with_auto_compile(true);
//! assert_eq!(
//!     handler.get_prompt("NESTED_PROMPT", &options)?,
//!     "This is a nested prompt: Hello Alice!"
//! );
//! # Ok::<(), prompthandler::error::PromptError>(())
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod handler;
pub mod logging;
pub mod namespace;
pub mod store;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;
