//! Context subcommand arguments

use clap::Parser;

use super::common::OutputFormat;
use crate::shell::Shell;

/// Arguments for 'list' subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'new' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        ghctx new personal                      # gh's current account on github.com\n  \
        ghctx new work --host git.example.com   # current account on an enterprise host\n  \
        ghctx new bot --user alice-bot          # a specific logged-in account")]
pub struct NewArgs {
    /// Context name
    pub name: String,
    /// gh host (default: $GH_HOST, then github.com)
    #[arg(long)]
    pub host: Option<String>,
    /// Account login (default: gh's current account on the host)
    #[arg(long)]
    pub user: Option<String>,
}

/// Arguments for 'use' subcommand
#[derive(Parser, Debug)]
pub struct UseArgs {
    /// Context name to activate (interactive selection if omitted)
    pub name: Option<String>,
}

/// Arguments for 'delete' subcommand
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Context name to delete
    pub name: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'bind' subcommand
#[derive(Parser, Debug)]
pub struct BindArgs {
    /// Context name to bind to the current repository
    pub name: String,
}

/// Arguments for 'init' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        eval \"$(ghctx init bash)\"     # ~/.bashrc\n  \
        eval \"$(ghctx init zsh)\"      # ~/.zshrc\n  \
        ghctx init fish | source      # ~/.config/fish/config.fish")]
pub struct InitArgs {
    /// Shell to generate integration for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Arguments for 'completion' subcommand
#[derive(Parser, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
