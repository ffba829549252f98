//! Render-time substitution of `[[ identifier ]]` tokens.
//!
//! Rendering is delegated to minijinja with its variable delimiters moved to
//! `[[` / `]]`, so `{identifier}` context placeholders pass through untouched.
//! Block (`{% %}`) and comment (`{# #}`) delimiters keep the engine defaults.

use crate::error::{PromptError, Result};
use crate::handler::RenderArgs;
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;

static RENDER_SYNTAX: LazyLock<SyntaxConfig> = LazyLock::new(|| {
    SyntaxConfig::builder()
        .variable_delimiters("[[", "]]")
        .build()
        .expect("Invalid render syntax")
});

static DOUBLE_BRACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("Invalid double brace regex"));

/// Behaviour switches for the render-time engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// HTML-escape every substituted value.
    pub autoescape: bool,

    /// Fail on `[[ name ]]` tokens with no matching render argument instead of
    /// rendering them as empty strings.
    pub strict_undefined: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            autoescape: true,
            strict_undefined: false,
        }
    }
}

/// Rewrite `{{ identifier }}` into the single-brace context form `{identifier}`.
pub fn normalize_double_braces(content: &str) -> Cow<'_, str> {
    DOUBLE_BRACE_REGEX.replace_all(content, "{${1}}")
}

/// Render-time template engine shared by storage backends.
#[derive(Clone)]
pub struct Renderer {
    env: Environment<'static>,
    options: RenderOptions,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("options", &self.options)
            .finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer {
    /// Build an engine configured for `[[ ]]` tokens.
    pub fn new(options: RenderOptions) -> Self {
        let mut env = Environment::new();
        env.set_syntax(RENDER_SYNTAX.clone());

        let autoescape = options.autoescape;
        env.set_auto_escape_callback(move |_name| {
            if autoescape {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });

        env.set_undefined_behavior(if options.strict_undefined {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Lenient
        });

        Self { env, options }
    }

    /// Options this engine was built with.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Normalise double-brace placeholders, then substitute `[[ ]]` tokens.
    pub fn render(&self, content: &str, args: &RenderArgs) -> Result<String> {
        let source = normalize_double_braces(content);
        self.env
            .render_str(&source, args)
            .map_err(|e| PromptError::Render(e.to_string()))
    }
}
