//! Interactive terminal prompts
//!
//! Prompts draw on stderr so they stay visible while the shell integration
//! evaluates stdout.

mod prompt;

pub use prompt::{confirm_delete, select_context};
