//! In-memory prompt storage.
//!
//! [`InMemoryPromptHandler`] keeps prompts in a map owned by the handler
//! instance. Prompts live as long as the handler; there is no deletion and no
//! persistence. Fetching substitutes `[[ ]]` render tokens (see
//! [`crate::template::Renderer`]).


use crate::error::{PromptError, Result};
use crate::handler::{PromptHandler, RenderArgs};
use crate::namespace;
use crate::template::{RenderOptions, Renderer};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Prompt handler backed by an in-process map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromptHandler {
    prompts: HashMap<String, String>,
    renderer: Renderer,
}

impl InMemoryPromptHandler {
    /// Create a handler with no prompts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler seeded with `prompts`.
    pub fn with_prompts(prompts: HashMap<String, String>) -> Self {
        Self {
            prompts,
            renderer: Renderer::default(),
        }
    }

    /// Replace the render-time engine options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.renderer = Renderer::new(options);
        self
    }

    /// Build a handler from a namespace of constants.
    ///
    /// Only upper-case, non-underscore names with string values are loaded.
    ///
    /// # Errors
    ///
    /// `NoPromptsFound` if nothing in the namespace qualifies.
    ///
    /// # Example
    ///
    /// ```
    /// use prompthandler::store::InMemoryPromptHandler;
    /// use serde_json::json;
    ///
    /// let handler = InMemoryPromptHandler::from_namespace([
    ///     ("GREETING", json!("Hello {name}!")),
    ///     ("_PRIVATE", json!("x")),
    ///     ("NOT_STRING", json!(123)),
    /// ])?;
    /// assert_eq!(handler.names(), vec!["GREETING"]);
    /// # Ok::<(), prompthandler::error::PromptError>(())
    /// ```
    pub fn from_namespace<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, serde_json::Value)>,
        K: Into<String>,
    {
        let prompts = namespace::collect_prompts(entries)?;
        info!(count = prompts.len(), "loaded prompts from namespace");
        Ok(Self::with_prompts(prompts))
    }

    /// Build a handler from a YAML mapping of prompt constants.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::from_namespace(namespace::parse_yaml(yaml)?)
    }

    /// Load a handler from a YAML prompt file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Config(format!(
                "failed to read prompt file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml_str(&content)
    }

    /// All stored prompts, unrendered.
    pub fn prompts(&self) -> &HashMap<String, String> {
        &self.prompts
    }

    /// Stored prompt names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prompts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prompts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl PromptHandler for InMemoryPromptHandler {
    fn create_prompt(&mut self, name: &str, content: &str) -> Result<()> {
        let replaced = self
            .prompts
            .insert(name.to_string(), content.to_string())
            .is_some();
        debug!(prompt = name, replaced, "stored prompt");
        Ok(())
    }

    fn fetch_prompt(&self, name: &str, render_args: &RenderArgs) -> Result<String> {
        let content = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;
        self.renderer.render(content, render_args)
    }
}
