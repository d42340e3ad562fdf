//! Context record file I/O

use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::store as store_config;
use crate::error::{CtxError, Result};

use super::models::{validate_name, Context};

/// A directory of `<name>.ctx` record files, one per context
pub struct ContextStore {
    dir: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    /// Create a new store in the default directory ($GH_CONFIG_DIR/contexts or ~/.config/gh/contexts)
    pub fn new() -> Self {
        Self {
            dir: Self::default_dir(),
        }
    }

    /// Create a store rooted at a custom directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn default_dir() -> PathBuf {
        if let Ok(gh_dir) = std::env::var(store_config::GH_CONFIG_DIR_ENV_VAR) {
            if !gh_dir.is_empty() {
                return PathBuf::from(gh_dir).join(store_config::DIR_NAME);
            }
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(store_config::DIR_PATH_UNIX)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", name, store_config::FILE_EXTENSION))
    }

    /// Check whether a record exists for `name`
    pub fn exists(&self, name: &str) -> Result<bool> {
        validate_name(name)?;
        Ok(self.record_path(name).is_file())
    }

    /// Load a single record
    pub fn get(&self, name: &str) -> Result<Context> {
        validate_name(name)?;
        let path = self.record_path(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CtxError::NotFound(name.to_string()));
            }
            Err(e) => {
                return Err(CtxError::Store(format!(
                    "Failed to read context {}: {}",
                    path.display(),
                    e
                )));
            }
        };
        Context::parse_record(&content).map_err(|e| {
            CtxError::Store(format!(
                "Failed to parse context {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Write a record, replacing any existing one.
    /// Uses atomic write (tmp file + rename) and creates the store dir if needed.
    pub fn save(&self, name: &str, ctx: &Context) -> Result<()> {
        validate_name(name)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            CtxError::Store(format!(
                "Failed to create context directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        // Hidden, per-process tmp name keeps concurrent writers apart and out of list()
        let path = self.record_path(name);
        let tmp_path = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            name,
            store_config::FILE_EXTENSION,
            std::process::id()
        ));
        if let Err(e) = fs::write(&tmp_path, ctx.to_record()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CtxError::Store(format!(
                "Failed to write temp context file {}: {}",
                tmp_path.display(),
                e
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            if let Err(e) = fs::set_permissions(&tmp_path, permissions) {
                let _ = fs::remove_file(&tmp_path);
                return Err(CtxError::Store(format!(
                    "Failed to set permissions on context file: {}",
                    e
                )));
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CtxError::Store(format!(
                "Failed to rename temp context file to {}: {}",
                path.display(),
                e
            )));
        }

        debug!("Saved context '{}' to {}", name, path.display());
        Ok(())
    }

    /// Remove a record
    pub fn remove(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        let path = self.record_path(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed context file {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CtxError::NotFound(name.to_string())),
            Err(e) => Err(CtxError::Store(format!(
                "Failed to remove context {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// All records in directory enumeration order.
    /// Files that fail to parse are skipped with a warning.
    pub fn list(&self) -> Result<Vec<(String, Context)>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Context directory {} does not exist", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(CtxError::Store(format!(
                    "Failed to read context directory {}: {}",
                    self.dir.display(),
                    e
                )));
            }
        };

        let mut contexts = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(store_config::FILE_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if validate_name(name).is_err() {
                continue;
            }
            match fs::read_to_string(&path)
                .map_err(CtxError::from)
                .and_then(|content| Context::parse_record(&content))
            {
                Ok(ctx) => contexts.push((name.to_string(), ctx)),
                Err(e) => warn!("Skipping context file {}: {}", path.display(), e),
            }
        }
        Ok(contexts)
    }
}
