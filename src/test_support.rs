use crate::store::InMemoryPromptHandler;
use serde_json::{Value, json};
use std::collections::HashMap;

pub(crate) fn sample_prompts() -> HashMap<String, String> {
    [
        ("GREETING", "Hello {name}!"),
        ("FAREWELL", "Goodbye {name}, see you later!"),
        ("NESTED_PROMPT", "This is a nested prompt: {GREETING}"),
        ("COMPLEX_PROMPT", "User: {name}, Age: {age}, City: {city}"),
        ("JINJA_TEMPLATE", "Hello [[ name ]]! You have [[ count ]] messages."),
        (
            "MIXED_TEMPLATE",
            "Hello {name}! You have [[ count ]] messages and [[ status ]] status.",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub(crate) fn empty_handler() -> InMemoryPromptHandler {
    InMemoryPromptHandler::new()
}

pub(crate) fn populated_handler() -> InMemoryPromptHandler {
    InMemoryPromptHandler::with_prompts(sample_prompts())
}

/// Constants as a module would expose them, including ones that must be skipped.
pub(crate) fn sample_namespace() -> Vec<(&'static str, Value)> {
    vec![
        ("GREETING", json!("Hello {name}!")),
        ("FAREWELL", json!("Goodbye {name}!")),
        ("_PRIVATE", json!("This should be ignored")),
        ("not_upper", json!("This should be ignored")),
        ("NOT_STRING", json!(123)),
    ]
}
