//! Options controlling prompt resolution.

use super::{Context, RenderArgs};
use crate::config::Config;

/// Default nesting depth for prompt resolution.
pub const DEFAULT_MAX_RECURSION: u32 = 5;

/// Hard cap on nesting depth. Larger budgets are clamped to this value.
pub const MAX_RECURSION_LIMIT: u32 = 64;

/// Options for [`super::PromptHandler::get_prompt`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Context used for nested lookup and auto-compilation. When `None`, the
    /// fetched content is returned without scanning for placeholders.
    pub context: Option<Context>,

    /// Remaining nesting levels for nested prompt lookup. Clamped to
    /// [`MAX_RECURSION_LIMIT`] during resolution.
    pub max_recursion: u32,

    /// Substitute context values into the result once nesting is done.
    pub auto_compile: bool,

    /// Fail on unresolvable placeholders instead of leaving them as literals.
    pub raise_on_missing_input: bool,

    /// Render-time arguments, forwarded to every fetch including nested ones.
    pub render_args: RenderArgs,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            context: None,
            max_recursion: DEFAULT_MAX_RECURSION,
            auto_compile: false,
            raise_on_missing_input: true,
            render_args: RenderArgs::new(),
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed defaults from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_recursion: config.max_recursion,
            auto_compile: config.auto_compile,
            raise_on_missing_input: config.raise_on_missing_input,
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_max_recursion(mut self, max_recursion: u32) -> Self {
        self.max_recursion = max_recursion;
        self
    }

    pub fn with_auto_compile(mut self, auto_compile: bool) -> Self {
        self.auto_compile = auto_compile;
        self
    }

    pub fn with_raise_on_missing_input(mut self, raise: bool) -> Self {
        self.raise_on_missing_input = raise;
        self
    }

    pub fn with_render_args(mut self, render_args: RenderArgs) -> Self {
        self.render_args = render_args;
        self
    }
}
