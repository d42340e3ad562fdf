//! Context command handlers
//!
//! Confirmations of session-changing commands go to stderr: their stdout is
//! evaluated by the shell integration.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use crate::binding::{self, Unbound};
use crate::cli::{Cli, Command, DeleteArgs, ListArgs, NewArgs, OutputFormat, UseArgs};
use crate::credentials::CredentialTool;
use crate::error::{CtxError, Result};
use crate::hook::{self, HookOutcome};
use crate::session::{CurrentReport, Session};
use crate::ui;

use super::ops;
use super::resolve::resolve_host;
use super::store::ContextStore;

/// Dispatch context subcommands
pub fn run_command(
    cli: &Cli,
    store: &ContextStore,
    tool: &dyn CredentialTool,
    session: &mut Session,
    cwd: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let result = match &cli.command {
        Command::List(args) => run_list(store, session, args),
        Command::New(args) => run_new(store, tool, args),
        Command::Use(args) => run_use(store, tool, session, args, cli.batch),
        Command::Delete(args) => run_delete(store, session, args, cli.batch),
        Command::Bind(args) => run_bind(store, cwd, &args.name),
        Command::Unbind => run_unbind(cwd),
        Command::Current => run_current(store, session, cwd),
        Command::Clear => {
            run_clear(session);
            Ok(())
        }
        Command::Hook => {
            run_hook(store, tool, session, cwd);
            Ok(())
        }
        Command::Init(_) | Command::Completion(_) => Ok(()),
    };
    result.map_err(Into::into)
}

/// List all contexts
fn run_list(store: &ContextStore, session: &Session, args: &ListArgs) -> Result<()> {
    let entries = ops::list(store, session)?;

    if args.output == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| CtxError::Store(format!("Failed to serialize contexts: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'ghctx new <name>' to create one from your current gh login.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("HOST"),
            Cell::new("USER"),
        ]);

    for entry in &entries {
        table.add_row(vec![
            Cell::new(if entry.current { "*" } else { "" }),
            Cell::new(&entry.name),
            Cell::new(&entry.host),
            Cell::new(&entry.user),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Create a context from a logged-in gh account
fn run_new(store: &ContextStore, tool: &dyn CredentialTool, args: &NewArgs) -> Result<()> {
    let host = resolve_host(args.host.as_deref());
    let ctx = ops::create(store, tool, &args.name, &host, args.user.as_deref())?;
    println!(
        "✓ Created context '{}' ({}@{})",
        args.name, ctx.user, ctx.host
    );
    println!("\nActivate it with 'ghctx use {}'.", args.name);
    Ok(())
}

/// Switch this session to a context
fn run_use(
    store: &ContextStore,
    tool: &dyn CredentialTool,
    session: &mut Session,
    args: &UseArgs,
    batch_mode: bool,
) -> Result<()> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => ui::select_context(&ops::list(store, session)?, batch_mode)?,
    };

    let ctx = session.use_context(store, tool, &name)?;
    eprintln!("✓ Switched to context '{}' ({}@{})", name, ctx.user, ctx.host);
    Ok(())
}

/// Delete a context, clearing this session if it was active
fn run_delete(
    store: &ContextStore,
    session: &mut Session,
    args: &DeleteArgs,
    batch_mode: bool,
) -> Result<()> {
    if !store.exists(&args.name)? {
        return Err(CtxError::NotFound(args.name.clone()));
    }

    let is_active = session.active_name() == Some(args.name.as_str());
    if !args.yes && !ui::confirm_delete(&args.name, is_active, batch_mode)? {
        eprintln!("Aborted.");
        return Ok(());
    }

    let cleared = ops::delete(store, session, &args.name)?;
    eprintln!("✓ Deleted context '{}'", args.name);
    if cleared {
        eprintln!("  It was active in this shell; the session has been cleared.");
    }
    Ok(())
}

/// Bind the current repository to a context
fn run_bind(store: &ContextStore, cwd: &Path, name: &str) -> Result<()> {
    let bound = binding::bind(store, cwd, name)?;
    println!(
        "✓ Bound {} to context '{}'",
        bound.root.display(),
        bound.name
    );
    Ok(())
}

/// Remove the current repository's binding
fn run_unbind(cwd: &Path) -> Result<()> {
    match binding::unbind(cwd)? {
        Unbound::Removed { root, name } => {
            println!("✓ Removed binding of {} (was '{}')", root.display(), name)
        }
        Unbound::NoBinding { root } => println!("No binding for {}", root.display()),
    }
    Ok(())
}

/// Show the session's active context and the repository binding
fn run_current(store: &ContextStore, session: &Session, cwd: &Path) -> Result<()> {
    let report = session.current(store, cwd)?;
    print!("{}", format_current(&report));
    Ok(())
}

fn format_current(report: &CurrentReport) -> String {
    let mut out = String::new();

    match (&report.active, &report.context) {
        (Some(name), Some(ctx)) => {
            out.push_str(&format!("Current context: {}\n", name));
            out.push_str(&format!("  Host:  {}\n", ctx.host));
            out.push_str(&format!("  User:  {}\n", ctx.user));
        }
        (Some(name), None) => {
            out.push_str(&format!(
                "Current context: {} (no longer in the store)\n",
                name
            ));
        }
        (None, _) => out.push_str("No context active in this shell.\n"),
    }

    match (&report.active, &report.token) {
        (_, None) => out.push_str("  Token: <not set>\n"),
        (Some(_), Some(token)) => {
            out.push_str(&format!("  Token: {}\n", mask_token(Some(token))))
        }
        (None, Some(token)) => out.push_str(&format!(
            "  Note: GH_TOKEN is set ({}) by something other than ghctx\n",
            mask_token(Some(token))
        )),
    }

    match &report.binding {
        Some(b) => {
            let applied = report.active.as_deref() == Some(b.name.as_str());
            out.push_str(&format!(
                "Repository binding: {} -> '{}'{}\n",
                b.root.display(),
                b.name,
                if applied { "" } else { " (not applied)" }
            ));
        }
        None => out.push_str("Repository binding: none\n"),
    }

    out
}

/// Deactivate the context in this session
fn run_clear(session: &mut Session) {
    let previous = session.active_name().map(str::to_string);
    session.clear();
    match previous {
        Some(name) => eprintln!("✓ Cleared context '{}'", name),
        None => eprintln!("✓ Cleared gh credentials from this shell"),
    }
}

/// Prompt hook: apply the repository binding; errors are printed, never returned
fn run_hook(
    store: &ContextStore,
    tool: &dyn CredentialTool,
    session: &mut Session,
    cwd: &Path,
) {
    match hook::auto_apply(session, store, tool, cwd) {
        HookOutcome::Switched(name) => eprintln!("ghctx: switched to context '{}'", name),
        HookOutcome::Failed {
            name: Some(name),
            error,
        } => eprintln!("ghctx: could not switch to '{}': {}", name, error),
        HookOutcome::Failed { name: None, error } => eprintln!("ghctx: {}", error),
        HookOutcome::NotInRepo | HookOutcome::Unbound | HookOutcome::AlreadyActive(_) => {}
    }
}

/// Mask a token for display: last 4 chars, or "<not set>"
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) => match t.char_indices().rev().nth(3) {
            Some((start, _)) => format!("****{}", &t[start..]),
            None => "****".to_string(),
        },
        None => "<not set>".to_string(),
    }
}
