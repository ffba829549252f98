//! CLI argument parsing for prompthandler.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prompthandler: resolve named prompt templates from a YAML prompt file.
///
/// The prompt file is a mapping of UPPER_CASE names to prompt text. Lower-case
/// and underscore-prefixed names are ignored.
#[derive(Parser, Debug)]
#[command(name = "prompthandler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML file with prompt constants. Required by `get` and `list`.
    #[arg(short, long, global = true)]
    pub prompts: Option<PathBuf>,

    /// Optional YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prompthandler.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a prompt and print it.
    ///
    /// Without `--context` (or `--nested`) the prompt is printed as stored,
    /// with only `[[ ]]` render tokens substituted.
    Get(GetArgs),

    /// List loaded prompt names.
    List,

    /// Compile a template string directly against context values.
    Compile(CompileArgs),
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Prompt name.
    pub name: String,

    /// Context value as key=value. Repeatable.
    #[arg(short, long = "context", value_parser = parse_key_value)]
    pub context: Vec<(String, String)>,

    /// Render argument for `[[ key ]]` tokens as key=value. Repeatable.
    #[arg(short, long = "render", value_parser = parse_key_value)]
    pub render: Vec<(String, String)>,

    /// Resolve nested prompts even when no context value is given.
    #[arg(long)]
    pub nested: bool,

    /// Substitute context values into the result.
    #[arg(long)]
    pub auto_compile: bool,

    /// Override the configured nesting depth.
    #[arg(long)]
    pub max_recursion: Option<u32>,

    /// Leave unresolvable placeholders in place instead of failing.
    #[arg(long)]
    pub best_effort: bool,
}

/// Arguments for the `compile` command.
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Template text with `{key}` placeholders.
    pub template: String,

    /// Context value as key=value. Repeatable.
    #[arg(short, long = "context", value_parser = parse_key_value)]
    pub context: Vec<(String, String)>,
}

/// Parse a `key=value` argument. The value may contain further `=`.
fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", arg))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", arg));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
