//! CLI argument parsing

mod common;
mod context;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{defaults, session as session_config, store as store_config};
use crate::shell::Shell;

pub use common::OutputFormat;
pub use context::{BindArgs, CompletionArgs, DeleteArgs, InitArgs, ListArgs, NewArgs, UseArgs};

/// Per-shell GitHub CLI contexts
#[derive(Parser, Debug)]
#[command(name = "ghctx")]
#[command(version)]
#[command(
    about = "Switch gh accounts per shell session",
    long_about = "Switch gh accounts per shell session.\n\n\
        Each shell keeps its own active context in GH_CONTEXT, GH_TOKEN and GH_HOST, \
        so switching in one terminal never affects another. Load the shell \
        integration with 'eval \"$(ghctx init bash)\"' (or zsh / fish)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Shell dialect for environment changes printed on stdout
    #[arg(long, global = true, value_enum, env = session_config::SHELL_ENV_VAR, default_value_t = Shell::Bash)]
    pub shell: Shell,

    /// Directory holding context records
    #[arg(long, global = true, env = store_config::DIR_ENV_VAR)]
    pub store_dir: Option<PathBuf>,

    /// Batch mode: never prompt
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List stored contexts
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Create a context from a logged-in gh account
    New(NewArgs),

    /// Switch this shell to a context
    Use(UseArgs),

    /// Delete a context
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Bind the current git repository to a context
    Bind(BindArgs),

    /// Remove the current git repository's binding
    Unbind,

    /// Show this shell's active context and the repository binding
    Current,

    /// Deactivate the context in this shell
    Clear,

    /// Apply the repository binding (run by the prompt hook)
    #[command(hide = true)]
    Hook,

    /// Print shell integration code
    Init(InitArgs),

    /// Generate shell completions
    Completion(CompletionArgs),
}

impl Command {
    /// Commands whose stdout is evaluated by the shell integration
    pub fn mutates_session(&self) -> bool {
        matches!(
            self,
            Command::Use(_) | Command::Clear | Command::Delete(_) | Command::Hook
        )
    }
}
