/// Configuration constants for the context store
pub mod store {
    /// Environment variable overriding the store directory
    pub const DIR_ENV_VAR: &str = "GHCTX_DIR";

    /// gh's own config directory override; the store lives beneath it when set
    pub const GH_CONFIG_DIR_ENV_VAR: &str = "GH_CONFIG_DIR";

    /// Store directory relative to HOME when no override is set
    pub const DIR_PATH_UNIX: &str = ".config/gh/contexts";

    /// Store directory name beneath GH_CONFIG_DIR
    pub const DIR_NAME: &str = "contexts";

    /// Extension of a context record file
    pub const FILE_EXTENSION: &str = "ctx";

    /// Maximum context name length
    pub const MAX_NAME_LEN: usize = 64;
}

/// Configuration constants for directory bindings
pub mod binding {
    /// Marker file placed at a repository root
    pub const MARKER_FILE: &str = ".ghcontext";
}

/// Configuration constants for the credential tool
pub mod credentials {
    /// Credential tool executable
    pub const PROGRAM: &str = "gh";

    /// Environment variable overriding the credential tool executable
    pub const PROGRAM_ENV_VAR: &str = "GHCTX_GH";

    /// Token variables stripped from the credential tool's environment so they
    /// cannot shadow the keyring lookup
    pub const SHADOWING_ENV_VARS: &[&str] = &[
        "GH_TOKEN",
        "GH_ENTERPRISE_TOKEN",
        "GITHUB_TOKEN",
        "GITHUB_ENTERPRISE_TOKEN",
        "GH_HOST",
    ];
}

/// Environment variables that carry a shell session's state
pub mod session {
    /// Active context name
    pub const CONTEXT_ENV_VAR: &str = "GH_CONTEXT";

    /// Exported token
    pub const TOKEN_ENV_VAR: &str = "GH_TOKEN";

    /// Exported host
    pub const HOST_ENV_VAR: &str = "GH_HOST";

    /// Shell dialect used when rendering session changes
    pub const SHELL_ENV_VAR: &str = "GHCTX_SHELL";
}

/// Default values for CLI
pub mod defaults {
    /// Default GitHub host
    pub const HOST: &str = "github.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
