//! Bulk loading of prompts from a namespace of constants.
//!
//! A namespace is any sequence of `(name, value)` pairs. Only entries that
//! look like prompt constants are kept:
//!
//! - the name does not start with `_`
//! - the name is upper-case (at least one cased character, none lower-case)
//! - the value is a string
//!
//! YAML documents whose top level is a mapping are namespaces too, which is
//! how prompt files are loaded.

use crate::error::{PromptError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Check whether a namespace entry qualifies as a prompt constant.
pub fn is_prompt_constant(name: &str, value: &Value) -> bool {
    !name.starts_with('_') && is_upper(name) && value.is_string()
}

/// Upper-case test: at least one cased character and no lower-case ones.
fn is_upper(name: &str) -> bool {
    let mut cased = false;
    for ch in name.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Filter a namespace down to its prompt constants.
///
/// # Errors
///
/// `NoPromptsFound` if no entry qualifies; the error lists the scanned names.
pub fn collect_prompts<I, K>(entries: I) -> Result<HashMap<String, String>>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut scanned = Vec::new();
    let mut prompts = HashMap::new();

    for (name, value) in entries {
        let name = name.into();
        if is_prompt_constant(&name, &value) {
            if let Value::String(content) = value {
                prompts.insert(name.clone(), content);
            }
        }
        scanned.push(name);
    }

    if prompts.is_empty() {
        return Err(PromptError::NoPromptsFound { scanned });
    }

    Ok(prompts)
}

/// Parse a YAML document into namespace entries.
///
/// Entries with non-string keys are skipped.
pub fn parse_yaml(yaml: &str) -> Result<Vec<(String, Value)>> {
    let doc: serde_yaml::Value = serde_yaml::from_str(yaml)
        .map_err(|e| PromptError::Config(format!("failed to parse prompt YAML: {}", e)))?;

    let mapping = match doc {
        serde_yaml::Value::Mapping(mapping) => mapping,
        serde_yaml::Value::Null => serde_yaml::Mapping::new(),
        _ => {
            return Err(PromptError::Config(
                "prompt YAML must be a mapping of NAME: content".to_string(),
            ));
        }
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let serde_yaml::Value::String(name) = key else {
            continue;
        };
        let value = serde_json::to_value(&value).map_err(|e| {
            PromptError::Config(format!("unsupported value for '{}': {}", name, e))
        })?;
        entries.push((name, value));
    }

    Ok(entries)
}
