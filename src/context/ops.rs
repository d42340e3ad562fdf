//! Context lifecycle: create, list, delete

use log::debug;

use crate::credentials::CredentialTool;
use crate::error::{CtxError, Result};
use crate::session::Session;

use super::models::{validate_name, Context, ContextEntry};
use super::store::ContextStore;

/// Create context `name` for `host`.
///
/// The user defaults to gh's current account on `host`. A token must be
/// resolvable for the pair before anything is written.
pub fn create(
    store: &ContextStore,
    tool: &dyn CredentialTool,
    name: &str,
    host: &str,
    user: Option<&str>,
) -> Result<Context> {
    validate_name(name)?;
    if store.exists(name)? {
        return Err(CtxError::AlreadyExists(name.to_string()));
    }

    let user = match user {
        Some(user) => user.to_string(),
        None => tool.current_user(host)?,
    };
    tool.token(host, &user)?;

    let ctx = Context::new(host, user);
    store.save(name, &ctx)?;
    debug!("Created context '{}' for {}@{}", name, ctx.user, ctx.host);
    Ok(ctx)
}

/// All contexts, marking the session's active one
pub fn list(store: &ContextStore, session: &Session) -> Result<Vec<ContextEntry>> {
    let active = session.active_name();
    Ok(store
        .list()?
        .into_iter()
        .map(|(name, ctx)| ContextEntry {
            current: active == Some(name.as_str()),
            name,
            host: ctx.host,
            user: ctx.user,
        })
        .collect())
}

/// Delete context `name`, clearing `session` if it was active.
/// Returns true when the session was cleared.
pub fn delete(store: &ContextStore, session: &mut Session, name: &str) -> Result<bool> {
    store.remove(name)?;
    if session.active_name() == Some(name) {
        session.clear();
        return Ok(true);
    }
    Ok(false)
}
