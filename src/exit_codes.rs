//! Exit code constants for the prompthandler CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable config or prompt file, empty namespace)
//! - 2: Prompt or nested variable not found
//! - 3: Missing context after the recursion budget was exhausted
//! - 4: Template failure (compile format error or render error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or no prompts loaded.
pub const USER_ERROR: i32 = 1;

/// A prompt or variable could not be found.
pub const NOT_FOUND: i32 = 2;

/// Placeholders remained unresolved at maximum recursion depth.
pub const MISSING_CONTEXT: i32 = 3;

/// Compile or render step rejected the template.
pub const TEMPLATE_FAILURE: i32 = 4;
