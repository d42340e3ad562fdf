//! Repository-root `.ghcontext` marker files

use git2::Repository;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::binding as binding_config;
use crate::context::ContextStore;
use crate::error::{CtxError, Result};

/// A context name bound to a repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub root: PathBuf,
    pub name: String,
}

/// Result of `unbind`
#[derive(Debug, PartialEq, Eq)]
pub enum Unbound {
    /// Marker removed; carries the name it held
    Removed { root: PathBuf, name: String },
    /// Nothing was bound at this root
    NoBinding { root: PathBuf },
}

/// Working tree root of the git repository containing `start`.
/// Bare repositories have no working tree and yield `None`.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let repo = match Repository::discover(start) {
        Ok(repo) => repo,
        Err(e) => {
            debug!("No repository at {}: {}", start.display(), e.message());
            return None;
        }
    };
    let root = repo.workdir().map(|dir| dir.components().collect::<PathBuf>());
    debug!("Repository root for {}: {:?}", start.display(), root);
    root
}

fn marker_path(root: &Path) -> PathBuf {
    root.join(binding_config::MARKER_FILE)
}

/// Read the binding of the repository containing `cwd`.
/// Outside a repository, or with no (or an empty) marker, returns `None`.
pub fn read_binding(cwd: &Path) -> Result<Option<Binding>> {
    let Some(root) = find_repo_root(cwd) else {
        return Ok(None);
    };
    let path = marker_path(&root);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CtxError::Store(format!(
                "Failed to read binding {}: {}",
                path.display(),
                e
            )));
        }
    };

    let name = content.lines().next().unwrap_or("").trim();
    if name.is_empty() {
        warn!("Ignoring empty binding file {}", path.display());
        return Ok(None);
    }
    Ok(Some(Binding {
        root,
        name: name.to_string(),
    }))
}

/// Bind the repository containing `cwd` to context `name`, replacing any previous binding
pub fn bind(store: &ContextStore, cwd: &Path, name: &str) -> Result<Binding> {
    let root = find_repo_root(cwd).ok_or_else(|| CtxError::NotInRepo(cwd.to_path_buf()))?;
    if !store.exists(name)? {
        return Err(CtxError::NotFound(name.to_string()));
    }

    let path = marker_path(&root);
    fs::write(&path, format!("{}\n", name)).map_err(|e| {
        CtxError::Store(format!("Failed to write binding {}: {}", path.display(), e))
    })?;
    debug!("Bound {} to context '{}'", root.display(), name);

    Ok(Binding {
        root,
        name: name.to_string(),
    })
}

/// Remove the binding of the repository containing `cwd`, if there is one
pub fn unbind(cwd: &Path) -> Result<Unbound> {
    let root = find_repo_root(cwd).ok_or_else(|| CtxError::NotInRepo(cwd.to_path_buf()))?;
    let name = read_binding(&root)?.map(|b| b.name).unwrap_or_default();

    let path = marker_path(&root);
    match fs::remove_file(&path) {
        Ok(()) => {
            debug!("Removed binding {}", path.display());
            Ok(Unbound::Removed { root, name })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Unbound::NoBinding { root }),
        Err(e) => Err(CtxError::Store(format!(
            "Failed to remove binding {}: {}",
            path.display(),
            e
        ))),
    }
}
