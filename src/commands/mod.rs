//! Command implementations for prompthandler.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands that read stored prompts load the prompt file
//! into an [`InMemoryPromptHandler`]; `compile` works on its argument alone.

use crate::cli::{Cli, Command, CompileArgs, GetArgs};
use prompthandler::config::Config;
use prompthandler::config::types::MAX_RECURSION_LIMIT;
use prompthandler::error::{PromptError, Result};
use prompthandler::handler::{Context, PromptHandler, RenderArgs, ResolveOptions};
use prompthandler::logging;
use prompthandler::store::InMemoryPromptHandler;
use prompthandler::template;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logging::init_from_config(&config, cli.verbose);

    let output = match cli.command {
        Command::Get(args) => {
            let handler = load_handler(cli.prompts.as_deref(), &config)?;
            cmd_get(&handler, &config, args)?
        }
        Command::List => cmd_list(&load_handler(cli.prompts.as_deref(), &config)?),
        Command::Compile(args) => cmd_compile(args)?,
    };

    println!("{}", output);
    Ok(())
}

fn load_handler(prompts: Option<&Path>, config: &Config) -> Result<InMemoryPromptHandler> {
    let path = prompts.ok_or_else(|| {
        PromptError::Config("--prompts <FILE> is required for this command".to_string())
    })?;
    debug!(prompts = %path.display(), "loading prompt file");

    Ok(InMemoryPromptHandler::load(path)?.with_render_options(config.render))
}

fn cmd_get(handler: &InMemoryPromptHandler, config: &Config, args: GetArgs) -> Result<String> {
    let max_recursion = args.max_recursion.unwrap_or(config.max_recursion);
    if max_recursion > MAX_RECURSION_LIMIT {
        return Err(PromptError::Config(format!(
            "--max-recursion must be at most {} (found {})",
            MAX_RECURSION_LIMIT, max_recursion
        )));
    }

    let options = get_options(config, args.context, args.render, args.nested)
        .with_auto_compile(args.auto_compile || config.auto_compile)
        .with_max_recursion(max_recursion)
        .with_raise_on_missing_input(config.raise_on_missing_input && !args.best_effort);

    handler.get_prompt(&args.name, &options)
}

fn cmd_list(handler: &InMemoryPromptHandler) -> String {
    handler.names().join("\n")
}

fn cmd_compile(args: CompileArgs) -> Result<String> {
    let context: Context = args.context.into_iter().collect();
    Ok(template::compile(&args.template, &context)?)
}

/// Build resolution options from CLI pairs. A context is attached when any
/// context value was given or nested lookup was requested.
fn get_options(
    config: &Config,
    context: Vec<(String, String)>,
    render: Vec<(String, String)>,
    nested: bool,
) -> ResolveOptions {
    let render_args: RenderArgs = render
        .into_iter()
        .map(|(key, raw)| (key, render_value(raw)))
        .collect();

    let mut options = ResolveOptions::from_config(config).with_render_args(render_args);
    if nested || !context.is_empty() {
        options = options.with_context(context.into_iter().collect());
    }
    options
}

/// Interpret a render argument as a JSON scalar when it parses as one.
fn render_value(raw: String) -> Value {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_) | Value::Null)) => value,
        _ => Value::String(raw),
    }
}
