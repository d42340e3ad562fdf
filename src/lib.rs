//! ghctx - per-shell GitHub CLI contexts
//!
//! Manage named (host, user) pairs for `gh` and switch between them per shell
//! session. The active context lives only in the shell's own environment
//! (`GH_CONTEXT`, `GH_TOKEN`, `GH_HOST`), so two terminals can use different
//! accounts at the same time without stepping on each other.
//!
//! # Features
//!
//! - Create contexts from logged-in gh accounts; tokens are never stored
//! - Switch, clear and inspect the active context of the current shell
//! - Bind a git repository to a context with a `.ghcontext` marker file
//! - Prompt hook that applies the binding when you enter the repository
//!
//! # Example
//!
//! ```bash
//! # Load the shell integration
//! eval "$(ghctx init bash)"
//!
//! # Save the account gh is logged in with on an enterprise host
//! ghctx new work --host git.example.com
//!
//! # Switch this shell only
//! ghctx use work
//!
//! # Always use it inside this repository
//! ghctx bind work
//! ```

pub mod binding;
pub mod cli;
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod hook;
pub mod session;
pub mod shell;
pub mod ui;

pub use binding::{Binding, Unbound};
pub use cli::{Cli, Command, OutputFormat};
pub use context::{run_command, Context, ContextEntry, ContextStore};
pub use credentials::{CredentialTool, GhCli};
pub use error::{CtxError, Result};
pub use hook::{auto_apply, HookOutcome};
pub use session::{CurrentReport, Exports, Session};
pub use shell::Shell;
