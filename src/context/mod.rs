//! Context management module
//!
//! Named contexts bundle a gh host and account login. Records live as small
//! `KEY=value` files in the store directory; tokens are never written.

mod commands;
mod models;
pub mod ops;
mod resolve;
mod store;

pub use commands::run_command;
pub use models::{validate_name, Context, ContextEntry};
pub use resolve::resolve_host;
pub use store::ContextStore;
