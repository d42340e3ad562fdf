//! Context record data models

use serde::Serialize;

use crate::config::store as store_config;
use crate::error::{CtxError, Result};

const HOST_KEY: &str = "HOST";
const USER_KEY: &str = "USER";

/// A named context: the (host, user) pair gh resolves a token for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    /// gh host, e.g. github.com
    pub host: String,
    /// Account login on that host
    pub user: String,
}

impl Context {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
        }
    }

    /// Render the record file contents (`KEY=value` lines)
    pub fn to_record(&self) -> String {
        format!("{}={}\n{}={}\n", HOST_KEY, self.host, USER_KEY, self.user)
    }

    /// Parse record file contents.
    /// Blank lines and `#` comments are skipped, unknown keys are ignored.
    pub fn parse_record(content: &str) -> Result<Self> {
        let mut host = None;
        let mut user = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| CtxError::Store(format!("Malformed record line '{}'", line)))?;
            match key.trim() {
                HOST_KEY => host = Some(value.trim().to_string()),
                USER_KEY => user = Some(value.trim().to_string()),
                _ => {}
            }
        }

        match (host, user) {
            (Some(host), Some(user)) if !host.is_empty() && !user.is_empty() => {
                Ok(Self { host, user })
            }
            _ => Err(CtxError::Store(format!(
                "Record must contain non-empty {} and {} entries",
                HOST_KEY, USER_KEY
            ))),
        }
    }
}

/// One row of `list` output
#[derive(Debug, Clone, Serialize)]
pub struct ContextEntry {
    pub name: String,
    pub host: String,
    pub user: String,
    /// True when this is the calling session's active context
    pub current: bool,
}

/// Check that a context name is safe to use as a file name
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CtxError::InvalidName("name must not be empty".to_string()));
    }
    if name.len() > store_config::MAX_NAME_LEN {
        return Err(CtxError::InvalidName(format!(
            "'{}' is longer than {} characters",
            name,
            store_config::MAX_NAME_LEN
        )));
    }
    if name.starts_with('.') {
        return Err(CtxError::InvalidName(format!(
            "'{}' must not start with '.'",
            name
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(*c, '.' | '_' | '-')))
    {
        return Err(CtxError::InvalidName(format!(
            "'{}' contains '{}'; use letters, digits, '.', '_' or '-'",
            name, c
        )));
    }
    Ok(())
}
