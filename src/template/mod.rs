//! Template syntaxes understood by prompthandler.
//!
//! Two placeholder syntaxes coexist in a prompt:
//!
//! - **Context placeholders** `{identifier}`: resolved from a context map,
//!   either directly ([`compile`]) or through nested prompt lookup during
//!   resolution (see [`crate::handler`]).
//! - **Render placeholders** `[[ identifier ]]`: substituted by the storage
//!   backend at fetch time from render arguments, HTML-escaped by default.
//!
//! ```text
//! You are {PERSONA}.
//! Answer the question from [[ user_name ]] in {language}.
//! ```

mod compile;
mod placeholders;
mod render;

pub use compile::{FormatError, compile};
pub use placeholders::{find_placeholders, missing_placeholders, replace_placeholder};
pub use render::{RenderOptions, Renderer, normalize_double_braces};
