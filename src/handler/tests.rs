//! Tests for prompt resolution.

use crate::error::PromptError;
use crate::handler::{
    Context, DEFAULT_MAX_RECURSION, MAX_RECURSION_LIMIT, PromptHandler, ResolveOptions, context,
    render_args,
};
use crate::store::InMemoryPromptHandler;
use crate::template::FormatError;
use crate::test_support::{empty_handler, populated_handler};
use serde_json::json;

fn handler_with(prompts: &[(&str, &str)]) -> InMemoryPromptHandler {
    let mut handler = empty_handler();
    for (name, content) in prompts {
        handler.create_prompt(name, content).unwrap();
    }
    handler
}

#[test]
fn test_default_options() {
    let options = ResolveOptions::default();
    assert_eq!(options.context, None);
    assert_eq!(options.max_recursion, DEFAULT_MAX_RECURSION);
    assert_eq!(options.max_recursion, 5);
    assert!(!options.auto_compile);
    assert!(options.raise_on_missing_input);
    assert!(options.render_args.is_empty());
}

#[test]
fn test_get_prompt_basic() {
    let handler = populated_handler();
    let result = handler.get_prompt("GREETING", &ResolveOptions::new()).unwrap();
    assert_eq!(result, "Hello {name}!");
}

#[test]
fn test_get_prompt_trims_name() {
    let handler = populated_handler();
    let result = handler
        .get_prompt("  GREETING\n", &ResolveOptions::new())
        .unwrap();
    assert_eq!(result, "Hello {name}!");
}

#[test]
fn test_no_context_skips_nested_lookup() {
    let handler = populated_handler();
    let result = handler
        .get_prompt("NESTED_PROMPT", &ResolveOptions::new())
        .unwrap();
    assert_eq!(result, "This is a nested prompt: {GREETING}");
}

#[test]
fn test_get_prompt_with_context_no_autocompile() {
    let handler = populated_handler();
    let options = ResolveOptions::new().with_context(context([("name", "Alice")]));
    let result = handler.get_prompt("GREETING", &options).unwrap();
    assert_eq!(result, "Hello {name}!");
}

#[test]
fn test_get_prompt_with_context_autocompile() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice")]))
        .with_auto_compile(true);
    let result = handler.get_prompt("GREETING", &options).unwrap();
    assert_eq!(result, "Hello Alice!");
}

#[test]
fn test_autocompile_stringifies_values() {
    let handler = populated_handler();
    let mut ctx = context([("age", 30), ("city", 7)]);
    ctx.insert("name".to_string(), "Alice".to_string());
    let options = ResolveOptions::new()
        .with_context(ctx)
        .with_auto_compile(true);
    let result = handler.get_prompt("COMPLEX_PROMPT", &options).unwrap();
    assert_eq!(result, "User: Alice, Age: 30, City: 7");
}

#[test]
fn test_autocompile_ignores_unused_keys() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice"), ("unused", "x")]))
        .with_auto_compile(true);
    assert_eq!(handler.get_prompt("GREETING", &options).unwrap(), "Hello Alice!");
}

#[test]
fn test_get_prompt_missing() {
    let handler = empty_handler();
    let options = ResolveOptions::new().with_auto_compile(true);
    let err = handler.get_prompt("missing", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Prompt or variable with name \"missing\" not found."
    );
}

#[test]
fn test_missing_top_level_fails_even_in_best_effort_mode() {
    let handler = empty_handler();
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_raise_on_missing_input(false);
    let err = handler.get_prompt("missing", &options).unwrap_err();
    assert_eq!(err, PromptError::not_found("missing"));
}

// ============================================================================
// Nested resolution
// ============================================================================

#[test]
fn test_nested_prompt_resolution() {
    let handler = populated_handler();
    let options = ResolveOptions::new().with_context(context([("name", "Alice")]));
    let result = handler.get_prompt("NESTED_PROMPT", &options).unwrap();
    assert_eq!(result, "This is a nested prompt: Hello {name}!");
}

#[test]
fn test_nested_prompt_resolution_with_autocompile() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice")]))
        .with_auto_compile(true);
    let result = handler.get_prompt("NESTED_PROMPT", &options).unwrap();
    assert_eq!(result, "This is a nested prompt: Hello Alice!");
}

#[test]
fn test_context_key_shadows_prompt() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("GREETING", "Hi there")]))
        .with_auto_compile(true);
    let result = handler.get_prompt("NESTED_PROMPT", &options).unwrap();
    assert_eq!(result, "This is a nested prompt: Hi there");
}

#[test]
fn test_multi_level_nesting() {
    let handler = handler_with(&[
        ("SYSTEM", "{PERSONA}\n{RULES}"),
        ("PERSONA", "You are {ROLE}."),
        ("ROLE", "a {adjective} assistant"),
        ("RULES", "Answer in {language}."),
    ]);
    let options = ResolveOptions::new()
        .with_context(context([("adjective", "helpful"), ("language", "French")]))
        .with_auto_compile(true);
    let result = handler.get_prompt("SYSTEM", &options).unwrap();
    assert_eq!(result, "You are a helpful assistant.\nAnswer in French.");
}

#[test]
fn test_nested_variable_missing_fails() {
    let handler = populated_handler();
    let options = ResolveOptions::new().with_context(context([("name", "Alice")]));
    let err = handler.get_prompt("COMPLEX_PROMPT", &options).unwrap_err();
    assert_eq!(err, PromptError::not_found("age"));
}

#[test]
fn test_nested_variable_missing_best_effort() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice")]))
        .with_auto_compile(true)
        .with_raise_on_missing_input(false);
    let result = handler.get_prompt("COMPLEX_PROMPT", &options).unwrap();
    assert_eq!(result, "User: Alice, Age: {age}, City: {city}");
}

#[test]
fn test_nested_placeholder_whitespace_is_trimmed_for_lookup() {
    let handler = handler_with(&[("OUTER", "[{ INNER }]"), ("INNER", "inside")]);
    let options = ResolveOptions::new().with_context(Context::new());
    assert_eq!(handler.get_prompt("OUTER", &options).unwrap(), "[inside]");
}

#[test]
fn test_render_args_reach_nested_prompts() {
    let handler = handler_with(&[
        ("OUTER", "Dear [[ user ]], {INNER}"),
        ("INNER", "you have [[ count ]] messages"),
    ]);
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_render_args(render_args([("user", json!("Kim")), ("count", json!(3))]));
    assert_eq!(
        handler.get_prompt("OUTER", &options).unwrap(),
        "Dear Kim, you have 3 messages"
    );
}

// ============================================================================
// Recursion budget
// ============================================================================

#[test]
fn test_zero_budget_raises_missing_context() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice")]))
        .with_max_recursion(0);
    let err = handler.get_prompt("COMPLEX_PROMPT", &options).unwrap_err();
    assert_eq!(
        err,
        PromptError::MissingContext {
            missing: vec!["age".to_string(), "city".to_string()],
        }
    );
}

#[test]
fn test_zero_budget_best_effort_returns_unresolved() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice")]))
        .with_max_recursion(0)
        .with_auto_compile(true)
        .with_raise_on_missing_input(false);
    let result = handler.get_prompt("COMPLEX_PROMPT", &options).unwrap();
    // Returned before auto-compilation, so even known keys stay intact.
    assert_eq!(result, "User: {name}, Age: {age}, City: {city}");
}

#[test]
fn test_zero_budget_without_missing_keys_succeeds() {
    let handler = populated_handler();
    let options = ResolveOptions::new()
        .with_context(context([("name", "Alice")]))
        .with_max_recursion(0)
        .with_auto_compile(true);
    assert_eq!(handler.get_prompt("GREETING", &options).unwrap(), "Hello Alice!");
}

#[test]
fn test_cycle_exhausts_budget() {
    let handler = handler_with(&[("PING", "ping {PONG}"), ("PONG", "pong {PING}")]);
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_max_recursion(3);
    let err = handler.get_prompt("PING", &options).unwrap_err();
    assert!(matches!(err, PromptError::MissingContext { ref missing } if missing.len() == 1));
}

#[test]
fn test_cycle_best_effort_stops_at_budget() {
    let handler = handler_with(&[("PING", "ping {PONG}"), ("PONG", "pong {PING}")]);
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_max_recursion(2)
        .with_raise_on_missing_input(false);
    let result = handler.get_prompt("PING", &options).unwrap();
    assert_eq!(result, "ping pong ping {PONG}");
}

#[test]
fn test_large_budget_is_clamped_for_cycles() {
    let handler = handler_with(&[("PING", "ping {PONG}"), ("PONG", "pong {PING}")]);
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_max_recursion(5_000_000)
        .with_raise_on_missing_input(false);
    let result = handler.get_prompt("PING", &options).unwrap();

    // One fetch per level from the clamped budget down to zero.
    let levels = MAX_RECURSION_LIMIT as usize + 1;
    assert_eq!(result.split(' ').count(), levels + 1);
    assert_eq!(result.matches("ping").count(), levels / 2 + 1);
    assert!(result.starts_with("ping pong ping"));
    assert!(result.ends_with("ping {PONG}"));
}

#[test]
fn test_large_budget_cycle_raises_missing_context() {
    let handler = handler_with(&[("PING", "ping {PONG}"), ("PONG", "pong {PING}")]);
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_max_recursion(u32::MAX);
    let err = handler.get_prompt("PING", &options).unwrap_err();
    assert_eq!(
        err,
        PromptError::MissingContext {
            missing: vec!["PONG".to_string()],
        }
    );
}

#[test]
fn test_deep_missing_context_propagates_unchanged() {
    let handler = handler_with(&[("A", "{B}"), ("B", "{C}"), ("C", "{missing_leaf}")]);
    let options = ResolveOptions::new()
        .with_context(Context::new())
        .with_max_recursion(2);
    let err = handler.get_prompt("A", &options).unwrap_err();
    assert_eq!(
        err,
        PromptError::MissingContext {
            missing: vec!["missing_leaf".to_string()],
        }
    );
}

#[test]
fn test_deep_not_found_names_the_leaf() {
    let handler = handler_with(&[("A", "{B}"), ("B", "{C}"), ("C", "{missing_leaf}")]);
    let options = ResolveOptions::new().with_context(Context::new());
    let err = handler.get_prompt("A", &options).unwrap_err();
    assert_eq!(err, PromptError::not_found("missing_leaf"));
}

// ============================================================================
// Direct compilation
// ============================================================================

#[test]
fn test_compile_prompt() {
    let handler = empty_handler();
    let result = handler
        .compile_prompt("Hello {name}, you are {age}.", &context([("name", "Bo"), ("age", "9")]))
        .unwrap();
    assert_eq!(result, "Hello Bo, you are 9.");
}

#[test]
fn test_compile_prompt_undefined_key() {
    let handler = empty_handler();
    let err = handler
        .compile_prompt("Hello {name}", &Context::new())
        .unwrap_err();
    assert_eq!(
        err,
        PromptError::Format(FormatError::UndefinedVariable {
            name: "name".to_string(),
            position: 6,
        })
    );
}

#[test]
fn test_options_from_config() {
    let config = crate::config::Config {
        max_recursion: 2,
        auto_compile: true,
        raise_on_missing_input: false,
        ..Default::default()
    };
    let options = ResolveOptions::from_config(&config);
    assert_eq!(options.max_recursion, 2);
    assert!(options.auto_compile);
    assert!(!options.raise_on_missing_input);
    assert_eq!(options.context, None);
}
