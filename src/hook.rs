//! Prompt-time auto-apply of directory bindings

use log::debug;
use std::path::Path;

use crate::binding;
use crate::context::ContextStore;
use crate::credentials::CredentialTool;
use crate::error::CtxError;
use crate::session::Session;

/// What one hook run did
#[derive(Debug)]
pub enum HookOutcome {
    /// Working directory is not inside a repository
    NotInRepo,
    /// Repository has no binding
    Unbound,
    /// Binding already matches the active context
    AlreadyActive(String),
    /// Session switched to the bound context
    Switched(String),
    /// Reading the binding or switching failed; session left unchanged
    Failed {
        name: Option<String>,
        error: CtxError,
    },
}

/// Apply the binding of the repository containing `cwd` to `session`.
///
/// Only local reads unless the binding differs from the active name, in which
/// case at most one token resolution happens. Never returns an error: failures
/// are reported through [`HookOutcome::Failed`] so the prompt still renders.
pub fn auto_apply(
    session: &mut Session,
    store: &ContextStore,
    tool: &dyn CredentialTool,
    cwd: &Path,
) -> HookOutcome {
    if binding::find_repo_root(cwd).is_none() {
        return HookOutcome::NotInRepo;
    }

    let bound = match binding::read_binding(cwd) {
        Ok(Some(b)) => b,
        Ok(None) => return HookOutcome::Unbound,
        Err(error) => return HookOutcome::Failed { name: None, error },
    };

    if session.active_name() == Some(bound.name.as_str()) {
        debug!("Binding '{}' already active", bound.name);
        return HookOutcome::AlreadyActive(bound.name);
    }

    debug!(
        "Applying binding '{}' from {}",
        bound.name,
        bound.root.display()
    );
    match session.use_context(store, tool, &bound.name) {
        Ok(_) => HookOutcome::Switched(bound.name),
        Err(error) => HookOutcome::Failed {
            name: Some(bound.name),
            error,
        },
    }
}
