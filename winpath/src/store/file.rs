//! YAML-file backed environment store.
//!
//! The document looks like:
//!
//! ```yaml
//! system: C:\Windows;C:\Windows\System32
//! user: '%USERPROFILE%\bin'
//! ```
//!
//! A missing file reads as two empty scopes. Every write rewrites the whole
//! document through a sibling temporary file followed by a rename.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EnvironmentStore, Scope};
use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct StoreDocument {
    #[serde(default)]
    system: String,
    #[serde(default)]
    user: String,
}

impl StoreDocument {
    fn get(&self, scope: Scope) -> &str {
        match scope {
            Scope::System => &self.system,
            Scope::User => &self.user,
        }
    }

    fn set(&mut self, scope: Scope, value: &str) {
        let slot = match scope {
            Scope::System => &mut self.system,
            Scope::User => &mut self.user,
        };
        *slot = value.to_string();
    }
}

/// An [`EnvironmentStore`] persisted as a small YAML document.
///
/// # Examples
///
/// ```no_run
/// use winpath::store::{EnvironmentStore, FileStore, Scope};
///
/// let store = FileStore::new("/tmp/winpath-store.yaml");
/// store.write_scope(Scope::User, r"C:\tools").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, scope: Scope) -> Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| Error::StoreRead {
            scope,
            reason: format!("{}: {e}", self.path.display()),
        })?;
        if contents.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::StoreRead {
            scope,
            reason: format!("{}: invalid YAML: {e}", self.path.display()),
        })
    }

    fn save(&self, scope: Scope, document: &StoreDocument) -> Result<()> {
        let write_error = |reason: String| Error::StoreWrite { scope, reason };

        let contents = serde_yaml::to_string(document).map_err(|e| write_error(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| write_error(format!("{}: {e}", parent.display())))?;
            }
        }

        let staging = self.path.with_extension("yaml.tmp");
        fs::write(&staging, contents)
            .map_err(|e| write_error(format!("{}: {e}", staging.display())))?;
        fs::rename(&staging, &self.path)
            .map_err(|e| write_error(format!("{}: {e}", self.path.display())))
    }
}

impl EnvironmentStore for FileStore {
    fn read_scope(&self, scope: Scope) -> Result<String> {
        Ok(self.load(scope)?.get(scope).to_string())
    }

    fn write_scope(&self, scope: Scope, value: &str) -> Result<()> {
        let mut document = self.load(scope)?;
        document.set(scope, value);
        log::debug!("Writing {scope} path to {}", self.path.display());
        self.save(scope, &document)
    }
}
