//! Host resolution for new contexts

use log::debug;

use crate::config::{defaults, session as session_config};

/// Resolve the host for a new context from multiple sources:
/// 1. --host CLI flag
/// 2. GH_HOST env var
/// 3. github.com
pub fn resolve_host(cli_host: Option<&str>) -> String {
    resolve_host_from(cli_host, std::env::var(session_config::HOST_ENV_VAR).ok())
}

fn resolve_host_from(cli_host: Option<&str>, env_host: Option<String>) -> String {
    if let Some(host) = cli_host {
        debug!("Using host from CLI flag: {}", host);
        return host.to_string();
    }

    if let Some(host) = env_host.filter(|h| !h.is_empty()) {
        debug!(
            "Using host from {} env var: {}",
            session_config::HOST_ENV_VAR,
            host
        );
        return host;
    }

    debug!("Using default host: {}", defaults::HOST);
    defaults::HOST.to_string()
}
