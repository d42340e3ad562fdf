use std::fmt;
use std::path::PathBuf;

/// Custom error type for context operations
#[derive(Debug)]
pub enum CtxError {
    /// No context record with this name
    NotFound(String),
    /// A context record with this name already exists
    AlreadyExists(String),
    /// The directory is not inside a git repository
    NotInRepo(PathBuf),
    /// The credential tool could not produce a user or token
    CredentialUnavailable {
        host: String,
        user: Option<String>,
        reason: String,
    },
    /// Context name is not filesystem-safe
    InvalidName(String),
    /// Failed to read, write or parse a record or marker file
    Store(String),
    /// Interactive prompt failed or was required in batch mode
    Prompt(String),
}

impl fmt::Display for CtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CtxError::NotFound(name) => write!(
                f,
                "Context '{}' not found. Run 'ghctx list' to see available contexts.",
                name
            ),
            CtxError::AlreadyExists(name) => write!(
                f,
                "Context '{}' already exists. Remove it first with 'ghctx delete {}'.",
                name, name
            ),
            CtxError::NotInRepo(path) => {
                write!(f, "Not inside a git repository: {}", path.display())
            }
            CtxError::CredentialUnavailable { host, user, reason } => {
                let who = match user {
                    Some(user) => format!("user '{}' on host '{}'", user, host),
                    None => format!("host '{}'", host),
                };
                write!(
                    f,
                    "No credential available for {} ({}). Re-authenticate with 'gh auth login --hostname {}'.",
                    who, reason, host
                )
            }
            CtxError::InvalidName(msg) => write!(f, "Invalid context name: {}", msg),
            CtxError::Store(msg) => write!(f, "{}", msg),
            CtxError::Prompt(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CtxError {}

impl From<std::io::Error> for CtxError {
    fn from(err: std::io::Error) -> Self {
        CtxError::Store(err.to_string())
    }
}

impl From<dialoguer::Error> for CtxError {
    fn from(err: dialoguer::Error) -> Self {
        CtxError::Prompt(format!("Prompt failed: {}", err))
    }
}

/// Result type alias for context operations
pub type Result<T> = std::result::Result<T, CtxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_suggests_list() {
        let err = CtxError::NotFound("work".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'work'"));
        assert!(msg.contains("ghctx list"));
    }

    #[test]
    fn test_already_exists_suggests_delete() {
        let err = CtxError::AlreadyExists("work".to_string());
        assert!(err.to_string().contains("ghctx delete work"));
    }

    #[test]
    fn test_not_in_repo_display() {
        let err = CtxError::NotInRepo(PathBuf::from("/tmp/elsewhere"));
        assert!(err.to_string().contains("/tmp/elsewhere"));
    }

    #[test]
    fn test_credential_unavailable_suggests_login() {
        let err = CtxError::CredentialUnavailable {
            host: "git.example.com".to_string(),
            user: Some("alice-corp".to_string()),
            reason: "no oauth token".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("alice-corp"));
        assert!(msg.contains("no oauth token"));
        assert!(msg.contains("gh auth login --hostname git.example.com"));
    }

    #[test]
    fn test_credential_unavailable_without_user() {
        let err = CtxError::CredentialUnavailable {
            host: "github.com".to_string(),
            user: None,
            reason: "not logged in".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("host 'github.com'"));
        assert!(!msg.contains("user '"));
    }

    #[test]
    fn test_messages_are_single_line() {
        let errors = vec![
            CtxError::NotFound("a".to_string()),
            CtxError::AlreadyExists("a".to_string()),
            CtxError::NotInRepo(PathBuf::from("/x")),
            CtxError::InvalidName("bad".to_string()),
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'), "{}", err);
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CtxError = io_err.into();
        match err {
            CtxError::Store(msg) => assert!(msg.contains("denied")),
            _ => panic!("Expected CtxError::Store"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CtxError>();
    }
}
