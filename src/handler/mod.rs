//! Prompt handler contract and recursive resolution.
//!
//! A [`PromptHandler`] is a storage backend exposing three primitives
//! (`create_prompt`, `fetch_prompt`, `update_prompt`). Resolution of nested
//! prompts is provided on top of those primitives by
//! [`PromptHandler::get_prompt`], so alternate backends only implement
//! storage.
//!
//! # Nested prompts
//!
//! When a context is supplied, every `{identifier}` in a prompt that is not a
//! context key is looked up as another prompt and spliced in, up to
//! [`ResolveOptions::max_recursion`] levels deep:
//!
//! ```
//! use prompthandler::handler::{PromptHandler, ResolveOptions, context};
//! use prompthandler::store::InMemoryPromptHandler;
//!
//! let mut handler = InMemoryPromptHandler::new();
//! handler.create_prompt("GREETING", "Hello {name}!")?;
//! handler.create_prompt("INTRO", "{GREETING} Welcome aboard.")?;
//!
//! let options = ResolveOptions::new()
//!     .with_context(context([("name", "Alice")]))
//!     .with_auto_compile(true);
//! let prompt = handler.get_prompt("INTRO", &options)?;
//! assert_eq!(prompt, "Hello Alice! Welcome aboard.");
//! # Ok::<(), prompthandler::error::PromptError>(())
//! ```

mod options;
mod resolve;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::template;
use std::collections::BTreeMap;

pub use options::{DEFAULT_MAX_RECURSION, MAX_RECURSION_LIMIT, ResolveOptions};

/// Compile-time context: identifier to stringified value.
pub type Context = BTreeMap<String, String>;

/// Render-time keyword arguments for `[[ identifier ]]` tokens.
pub type RenderArgs = BTreeMap<String, serde_json::Value>;

/// Storage backend capability set plus the resolution algorithm built on it.
pub trait PromptHandler {
    /// Create a prompt, silently overwriting any existing one with that name.
    fn create_prompt(&mut self, name: &str, content: &str) -> Result<()>;

    /// Fetch raw content by name with render-time tokens substituted.
    ///
    /// Fails with [`crate::error::PromptError::NotFound`] if the name is absent.
    fn fetch_prompt(&self, name: &str, render_args: &RenderArgs) -> Result<String>;

    /// Update a prompt. Inserts it when absent.
    fn update_prompt(&mut self, name: &str, content: &str) -> Result<()> {
        self.create_prompt(name, content)
    }

    /// Resolve a prompt by name, expanding nested prompt references.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the prompt (or, in strict mode, a nested variable) is absent
    /// * `MissingContext` - placeholders remain when the recursion budget runs out
    fn get_prompt(&self, name: &str, options: &ResolveOptions) -> Result<String> {
        resolve::resolve(self, name, options)
    }

    /// Compile `content` directly against `context` without nested lookup.
    fn compile_prompt(&self, content: &str, context: &Context) -> Result<String> {
        Ok(template::compile(content, context)?)
    }
}

/// Helper to build a [`Context`] from key/value pairs.
pub fn context<I, K, V>(pairs: I) -> Context
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.to_string()))
        .collect()
}

/// Helper to build [`RenderArgs`] from key/value pairs.
pub fn render_args<I, K, V>(pairs: I) -> RenderArgs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<serde_json::Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
