//! Direct, single-pass compilation of `{key}` placeholders.
//!
//! This is the non-recursive counterpart to prompt resolution: every
//! placeholder must be present in the supplied context.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of key `name` (looked up verbatim)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A single `}` outside a placeholder is an error, as is an undefined key.

use std::collections::BTreeMap;
use thiserror::Error;

/// Error type for compile failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A key was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable {
        /// The name of the undefined key.
        name: String,
        /// Byte offset of the opening brace.
        position: usize,
    },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// A lone `}` was found outside a placeholder.
    #[error("single '}}' encountered at position {position} in template")]
    SingleClosingBrace { position: usize },

    /// An empty placeholder `{}` was found.
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Compile `content` by substituting every `{key}` with `context[key]`.
///
/// # Examples
///
/// ```
/// use prompthandler::handler::context;
/// use prompthandler::template::compile;
///
/// let ctx = context([("name", "Alice"), ("task", "coding")]);
/// let result = compile("Hello {name}, your task is {task}.", &ctx).unwrap();
/// assert_eq!(result, "Hello Alice, your task is coding.");
/// ```
///
/// Use `{{` to render a literal `{`:
///
/// ```
/// use prompthandler::handler::Context;
/// use prompthandler::template::compile;
///
/// let result = compile("Use {{var}} for variables", &Context::new()).unwrap();
/// assert_eq!(result, "Use {var} for variables");
/// ```
pub fn compile(content: &str, context: &BTreeMap<String, String>) -> Result<String, FormatError> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => key.push(c),
                        None => return Err(FormatError::UnmatchedBrace { position: pos }),
                    }
                }

                if key.is_empty() {
                    return Err(FormatError::EmptyVariableName { position: pos });
                }

                match context.get(&key) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(FormatError::UndefinedVariable {
                            name: key,
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    result.push('}');
                } else {
                    return Err(FormatError::SingleClosingBrace { position: pos });
                }
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
