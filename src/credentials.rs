//! Identity and token resolution through the gh CLI

use log::debug;
use std::ffi::OsString;
use std::process::Command;

use crate::config::credentials;
use crate::error::{CtxError, Result};

/// The external system of record for logins and tokens.
///
/// This is the only place secrets are materialized; callers never persist them.
pub trait CredentialTool {
    /// Login of the account gh is currently configured to use for `host`
    fn current_user(&self, host: &str) -> Result<String>;

    /// A fresh token for `user` on `host`
    fn token(&self, host: &str, user: &str) -> Result<String>;
}

/// [`CredentialTool`] backed by the `gh` executable
pub struct GhCli {
    program: OsString,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GhCli {
    /// Use `$GHCTX_GH` if set, otherwise `gh` from PATH
    pub fn new() -> Self {
        let program = std::env::var_os(credentials::PROGRAM_ENV_VAR)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from(credentials::PROGRAM));
        Self { program }
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// gh invocation with token overrides stripped from its environment
    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args);
        for var in credentials::SHADOWING_ENV_VARS {
            command.env_remove(var);
        }
        command
    }

    /// Run gh and return trimmed stdout
    fn run(&self, args: &[&str]) -> std::result::Result<String, String> {
        debug!("Running {} {}", self.program.to_string_lossy(), args.join(" "));

        let output = self.command(args).output().map_err(|e| {
            format!(
                "failed to run '{}': {}",
                self.program.to_string_lossy(),
                e
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                format!("gh exited with {}", output.status)
            } else {
                first_line(stderr).to_string()
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl CredentialTool for GhCli {
    fn current_user(&self, host: &str) -> Result<String> {
        let user = self
            .run(&["config", "get", "user", "--host", host])
            .map_err(|reason| CtxError::CredentialUnavailable {
                host: host.to_string(),
                user: None,
                reason,
            })?;

        if user.is_empty() {
            return Err(CtxError::CredentialUnavailable {
                host: host.to_string(),
                user: None,
                reason: "not logged in".to_string(),
            });
        }
        debug!("gh reports user '{}' for host {}", user, host);
        Ok(user)
    }

    fn token(&self, host: &str, user: &str) -> Result<String> {
        let token = self
            .run(&["auth", "token", "--hostname", host, "--user", user])
            .map_err(|reason| CtxError::CredentialUnavailable {
                host: host.to_string(),
                user: Some(user.to_string()),
                reason,
            })?;

        if token.is_empty() {
            return Err(CtxError::CredentialUnavailable {
                host: host.to_string(),
                user: Some(user.to_string()),
                reason: "gh returned an empty token".to_string(),
            });
        }
        debug!("Resolved token for user '{}' on host {}", user, host);
        Ok(token)
    }
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or(s).trim()
}
