//! Selection and confirmation prompts

use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use log::debug;

use crate::context::ContextEntry;
use crate::error::{CtxError, Result};

/// Let the user pick a context; the active one is preselected
pub fn select_context(entries: &[ContextEntry], batch_mode: bool) -> Result<String> {
    if entries.is_empty() {
        return Err(CtxError::Prompt(
            "No contexts configured. Create one with 'ghctx new <name>'.".to_string(),
        ));
    }
    if batch_mode {
        return Err(CtxError::Prompt(format!(
            "Context name required in batch mode. Available: {}",
            entry_names(entries)
        )));
    }

    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{}  ({}@{})", e.name, e.user, e.host))
        .collect();
    let default = entries.iter().position(|e| e.current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a context")
        .items(&items)
        .default(default)
        .interact()?;

    let name = entries[selection].name.clone();
    debug!("User selected context: {}", name);
    Ok(name)
}

/// Ask before deleting a context. Batch mode without --yes declines.
pub fn confirm_delete(name: &str, is_active: bool, batch_mode: bool) -> Result<bool> {
    if batch_mode {
        return Err(CtxError::Prompt(format!(
            "Refusing to delete '{}' in batch mode without --yes",
            name
        )));
    }

    let prompt = if is_active {
        format!("Delete context '{}'? It is active in this shell and will be cleared", name)
    } else {
        format!("Delete context '{}'?", name)
    };

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn entry_names(entries: &[ContextEntry]) -> String {
    entries
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ContextEntry {
        ContextEntry {
            name: name.to_string(),
            host: "github.com".to_string(),
            user: "alice".to_string(),
            current: false,
        }
    }

    #[test]
    fn test_select_empty_suggests_new() {
        let err = select_context(&[], false).unwrap_err();
        assert!(err.to_string().contains("ghctx new"));
    }

    #[test]
    fn test_select_batch_mode_lists_names() {
        let err = select_context(&[entry("work"), entry("home")], true).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("batch mode"));
        assert!(msg.contains("work, home"));
    }

    #[test]
    fn test_confirm_delete_batch_mode_refuses() {
        let err = confirm_delete("work", false, true).unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }
}
