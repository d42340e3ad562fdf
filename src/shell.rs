//! Shell dialects: rendering session state and integration scripts

use clap::ValueEnum;

use crate::config::session as session_config;
use crate::session::Session;

/// Subcommands whose stdout the shell function evaluates
const EVAL_COMMANDS: &[&str] = &["use", "clear", "delete", "rm", "hook"];

/// Supported shells
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
            Shell::Fish => write!(f, "fish"),
        }
    }
}

impl Shell {
    fn quote(self, value: &str) -> String {
        match self {
            Shell::Bash | Shell::Zsh => format!("'{}'", value.replace('\'', r"'\''")),
            Shell::Fish => format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'")),
        }
    }

    fn set(self, key: &str, value: &str) -> String {
        match self {
            Shell::Bash | Shell::Zsh => format!("export {}={};\n", key, self.quote(value)),
            Shell::Fish => format!("set -gx {} {};\n", key, self.quote(value)),
        }
    }

    fn unset(self, key: &str) -> String {
        match self {
            Shell::Bash | Shell::Zsh => format!("unset {};\n", key),
            Shell::Fish => format!("set -e {};\n", key),
        }
    }

    /// Statements that make the shell's environment match `session`
    pub fn render(self, session: &Session) -> String {
        let exports = session.exports();
        let vars = [
            (session_config::CONTEXT_ENV_VAR, session.active_name()),
            (session_config::TOKEN_ENV_VAR, exports.token.as_deref()),
            (session_config::HOST_ENV_VAR, exports.host.as_deref()),
        ];

        vars.iter()
            .map(|(key, value)| match value {
                Some(value) => self.set(key, value),
                None => self.unset(key),
            })
            .collect()
    }

    /// Shell function and prompt hook printed by `ghctx init`
    pub fn init_script(self) -> String {
        match self {
            Shell::Bash => format!(
                r#"ghctx() {{
  case "$1" in
    {cases})
      eval "$(command ghctx --shell bash "$@")" ;;
    *)
      command ghctx "$@" ;;
  esac
}}

_ghctx_hook() {{
  local previous_exit_status=$?
  ghctx hook
  return $previous_exit_status
}}

if [[ ";${{PROMPT_COMMAND[*]:-}};" != *";_ghctx_hook;"* ]]; then
  PROMPT_COMMAND="_ghctx_hook${{PROMPT_COMMAND:+;$PROMPT_COMMAND}}"
fi
"#,
                cases = EVAL_COMMANDS.join("|")
            ),
            Shell::Zsh => format!(
                r#"ghctx() {{
  case "$1" in
    {cases})
      eval "$(command ghctx --shell zsh "$@")" ;;
    *)
      command ghctx "$@" ;;
  esac
}}

_ghctx_hook() {{
  ghctx hook
}}

typeset -ag precmd_functions
if (( ! ${{precmd_functions[(I)_ghctx_hook]}} )); then
  precmd_functions=(_ghctx_hook $precmd_functions)
fi
"#,
                cases = EVAL_COMMANDS.join("|")
            ),
            Shell::Fish => format!(
                r#"function ghctx
    switch "$argv[1]"
        case {cases}
            command ghctx --shell fish $argv | source
        case '*'
            command ghctx $argv
    end
end

function __ghctx_hook --on-event fish_prompt
    ghctx hook
end
"#,
                cases = EVAL_COMMANDS.join(" ")
            ),
        }
    }
}
