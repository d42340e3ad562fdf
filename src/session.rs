//! Per-session active context and exported credentials
//!
//! A [`Session`] is an owned value: every shell (or every logical session in an
//! embedding process) holds its own, so switching in one never affects another.

use log::debug;

use crate::binding::{self, Binding};
use crate::config::session as session_config;
use crate::context::{Context, ContextStore};
use crate::credentials::CredentialTool;
use crate::error::Result;

/// Variables exported to the hosting shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exports {
    pub token: Option<String>,
    pub host: Option<String>,
}

/// State of one running session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    active: Option<String>,
    exports: Exports,
    modified: bool,
}

/// What `current` reports
#[derive(Debug)]
pub struct CurrentReport {
    /// Active context name, if any
    pub active: Option<String>,
    /// Stored (host, user) of the active context; `None` if the record has since been deleted
    pub context: Option<Context>,
    /// Token present in the session, whoever exported it
    pub token: Option<String>,
    /// Directory binding for the working tree, applied or not
    pub binding: Option<Binding>,
}

impl Session {
    /// An empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the calling shell's session from its environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Rebuild a session from any `name -> value` lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            active: get(session_config::CONTEXT_ENV_VAR),
            exports: Exports {
                token: get(session_config::TOKEN_ENV_VAR),
                host: get(session_config::HOST_ENV_VAR),
            },
            modified: false,
        }
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn exports(&self) -> &Exports {
        &self.exports
    }

    /// True once `use`/`clear` changed this session
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Switch this session to `name`.
    /// A fresh token is resolved on every call; nothing changes if lookup or resolution fails.
    pub fn use_context(
        &mut self,
        store: &ContextStore,
        tool: &dyn CredentialTool,
        name: &str,
    ) -> Result<Context> {
        let ctx = store.get(name)?;
        let token = tool.token(&ctx.host, &ctx.user)?;

        debug!(
            "Session switching to context '{}' ({}@{})",
            name, ctx.user, ctx.host
        );
        self.active = Some(name.to_string());
        self.exports = Exports {
            token: Some(token),
            host: Some(ctx.host.clone()),
        };
        self.modified = true;
        Ok(ctx)
    }

    /// Unset the active context and both exported variables
    pub fn clear(&mut self) {
        debug!("Clearing session (was {:?})", self.active);
        self.active = None;
        self.exports = Exports::default();
        self.modified = true;
    }

    /// Describe the session plus the binding of the tree containing `cwd`
    pub fn current(&self, store: &ContextStore, cwd: &std::path::Path) -> Result<CurrentReport> {
        let context = match &self.active {
            Some(name) => match store.get(name) {
                Ok(ctx) => Some(ctx),
                Err(crate::error::CtxError::NotFound(_)) => None,
                Err(e) => return Err(e),
            },
            None => None,
        };

        Ok(CurrentReport {
            active: self.active.clone(),
            context,
            token: self.exports.token.clone(),
            binding: binding::read_binding(cwd)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::testing::FakeTool;
    use crate::error::CtxError;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn store_with_work(dir: &TempDir) -> ContextStore {
        let store = ContextStore::with_dir(dir.path().join("contexts"));
        store
            .save("work", &Context::new("git.example.com", "alice-corp"))
            .unwrap();
        store
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.active_name().is_none());
        assert_eq!(session.exports(), &Exports::default());
        assert!(!session.is_modified());
    }

    #[test]
    fn test_from_lookup_reads_session_vars() {
        let vars: HashMap<&str, &str> = [
            ("GH_CONTEXT", "work"),
            ("GH_TOKEN", "tok"),
            ("GH_HOST", ""),
        ]
        .into_iter()
        .collect();
        let session = Session::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(session.active_name(), Some("work"));
        assert_eq!(session.exports().token.as_deref(), Some("tok"));
        assert!(session.exports().host.is_none());
        assert!(!session.is_modified());
    }

    #[test]
    fn test_use_exports_host_and_fresh_token() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let tool = FakeTool::new().with_token("git.example.com", "alice-corp", "gho_work");

        let mut session = Session::new();
        let ctx = session.use_context(&store, &tool, "work").unwrap();

        assert_eq!(ctx.user, "alice-corp");
        assert_eq!(session.active_name(), Some("work"));
        assert_eq!(session.exports().host.as_deref(), Some("git.example.com"));
        assert_eq!(session.exports().token.as_deref(), Some("gho_work"));
        assert!(session.is_modified());
    }

    #[test]
    fn test_use_resolves_token_every_time() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let tool = FakeTool::new().with_token("git.example.com", "alice-corp", "gho_work");

        let mut session = Session::new();
        session.use_context(&store, &tool, "work").unwrap();
        session.use_context(&store, &tool, "work").unwrap();
        assert_eq!(tool.calls(), 2);
    }

    #[test]
    fn test_use_unknown_name_leaves_state() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let tool = FakeTool::new();

        let mut session = Session::new();
        let err = session.use_context(&store, &tool, "ghost").unwrap_err();
        assert!(matches!(err, CtxError::NotFound(_)));
        assert_eq!(session, Session::new());
        assert_eq!(tool.calls(), 0);
    }

    #[test]
    fn test_use_without_credential_leaves_previous_context() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        store
            .save("home", &Context::new("github.com", "alice"))
            .unwrap();
        let tool = FakeTool::new().with_token("git.example.com", "alice-corp", "gho_work");

        let mut session = Session::new();
        session.use_context(&store, &tool, "work").unwrap();
        let before = session.clone();

        let err = session.use_context(&store, &tool, "home").unwrap_err();
        assert!(err.to_string().contains("gh auth login"));
        assert_eq!(session, before);
    }

    #[test]
    fn test_clear_unsets_everything() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let tool = FakeTool::new().with_token("git.example.com", "alice-corp", "gho_work");

        let mut session = Session::new();
        session.use_context(&store, &tool, "work").unwrap();
        session.clear();
        assert!(session.active_name().is_none());
        assert_eq!(session.exports(), &Exports::default());
        assert!(session.is_modified());
    }

    #[test]
    fn test_current_after_use_reports_same_context() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let tool = FakeTool::new().with_token("git.example.com", "alice-corp", "gho_work");

        let mut session = Session::new();
        session.use_context(&store, &tool, "work").unwrap();
        let report = session.current(&store, dir.path()).unwrap();

        assert_eq!(report.active.as_deref(), Some("work"));
        assert_eq!(
            report.context,
            Some(Context::new("git.example.com", "alice-corp"))
        );
        assert_eq!(report.token.as_deref(), Some("gho_work"));
        assert!(report.binding.is_none());
    }

    #[test]
    fn test_current_with_deleted_record() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let session = Session::from_lookup(|k| (k == "GH_CONTEXT").then(|| "gone".to_string()));
        let report = session.current(&store, dir.path()).unwrap();
        assert_eq!(report.active.as_deref(), Some("gone"));
        assert!(report.context.is_none());
    }

    #[test]
    fn test_current_reports_foreign_token() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        let session = Session::from_lookup(|k| (k == "GH_TOKEN").then(|| "ghp_other".to_string()));
        let report = session.current(&store, dir.path()).unwrap();
        assert!(report.active.is_none());
        assert_eq!(report.token.as_deref(), Some("ghp_other"));
    }

    #[test]
    fn test_concurrent_sessions_are_isolated() {
        let dir = TempDir::new().unwrap();
        let store = store_with_work(&dir);
        store
            .save("home", &Context::new("github.com", "alice"))
            .unwrap();
        let tool = FakeTool::new()
            .with_token("git.example.com", "alice-corp", "gho_work")
            .with_token("github.com", "alice", "gho_home");

        let (a, b) = std::thread::scope(|s| {
            let a = s.spawn(|| {
                let mut session = Session::new();
                for _ in 0..50 {
                    session.use_context(&store, &tool, "work").unwrap();
                }
                session
            });
            let b = s.spawn(|| {
                let mut session = Session::new();
                for _ in 0..50 {
                    session.use_context(&store, &tool, "home").unwrap();
                }
                session
            });
            (a.join().unwrap(), b.join().unwrap())
        });

        assert_eq!(a.active_name(), Some("work"));
        assert_eq!(a.exports().token.as_deref(), Some("gho_work"));
        assert_eq!(a.exports().host.as_deref(), Some("git.example.com"));
        assert_eq!(b.active_name(), Some("home"));
        assert_eq!(b.exports().token.as_deref(), Some("gho_home"));
        assert_eq!(b.exports().host.as_deref(), Some("github.com"));
    }
}
