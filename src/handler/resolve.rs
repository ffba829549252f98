//! Recursive resolution of nested prompt references.

use super::{MAX_RECURSION_LIMIT, PromptHandler, ResolveOptions};
use crate::error::{PromptError, Result};
use crate::template::{missing_placeholders, replace_placeholder};
use tracing::debug;

pub(super) fn resolve<H>(handler: &H, name: &str, options: &ResolveOptions) -> Result<String>
where
    H: PromptHandler + ?Sized,
{
    let budget = options.max_recursion.min(MAX_RECURSION_LIMIT);
    if budget < options.max_recursion {
        debug!(requested = options.max_recursion, budget, "clamping recursion budget");
    }
    resolve_level(handler, name, options, budget, false)
}

/// Resolve one level. `nested` is set for sub-resolutions of missing
/// placeholders; only the top level performs auto-compilation.
fn resolve_level<H>(
    handler: &H,
    name: &str,
    options: &ResolveOptions,
    budget: u32,
    nested: bool,
) -> Result<String>
where
    H: PromptHandler + ?Sized,
{
    let name = name.trim();

    let mut content = match handler.fetch_prompt(name, &options.render_args) {
        Ok(content) => content,
        Err(err) => {
            debug!(prompt = name, nested, error = %err, "prompt fetch failed");
            if nested && !options.raise_on_missing_input {
                return Ok(format!("{{{}}}", name));
            }
            return Err(PromptError::not_found(name));
        }
    };

    let Some(context) = options.context.as_ref() else {
        return Ok(content);
    };

    let missing = missing_placeholders(&content, context);
    if !missing.is_empty() {
        if budget == 0 {
            if options.raise_on_missing_input {
                return Err(PromptError::MissingContext { missing });
            }
            debug!(prompt = name, ?missing, "recursion budget exhausted, leaving placeholders");
            return Ok(content);
        }

        for variable in &missing {
            debug!(prompt = name, variable = variable.as_str(), budget, "resolving nested prompt");
            let inner = resolve_level(handler, variable, options, budget - 1, true)?;
            content = replace_placeholder(&content, variable, &inner);
        }
    }

    if !nested && options.auto_compile {
        for (key, value) in context {
            content = replace_placeholder(&content, key, value);
        }
    }

    Ok(content)
}
