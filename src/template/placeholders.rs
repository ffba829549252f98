//! Scanning and literal replacement of `{identifier}` placeholders.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Non-greedy, bracket-delimited token. Does not cross newlines.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("Invalid placeholder regex"));

/// Collect the distinct identifiers referenced by `{...}` tokens in `content`.
///
/// Identifiers are returned verbatim (not trimmed) in ascending order.
pub fn find_placeholders(content: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Identifiers present in `content` but absent from `context`'s keys.
pub fn missing_placeholders<V>(content: &str, context: &BTreeMap<String, V>) -> Vec<String> {
    find_placeholders(content)
        .into_iter()
        .filter(|name| !context.contains_key(name))
        .collect()
}

/// Replace every literal `{name}` in `content` with `value`.
pub fn replace_placeholder(content: &str, name: &str, value: &str) -> String {
    content.replace(&format!("{{{}}}", name), value)
}
