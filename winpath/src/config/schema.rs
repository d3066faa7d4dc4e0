//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::expand::DEFAULT_MAX_EXPANSION_PASSES;
use crate::store::Scope;

/// Name of the environment variable holding the search path.
pub const DEFAULT_VARIABLE: &str = "Path";

/// Complete configuration structure.
///
/// Every field is optional so sources can be layered; the accessor methods
/// fill in defaults.
///
/// # Examples
///
/// ```
/// use winpath::config::Config;
/// use winpath::Scope;
///
/// let config = Config {
///     new_entry_scope: Some(Scope::System),
///     ..Default::default()
/// };
/// assert_eq!(config.variable(), "Path");
/// assert_eq!(config.new_entry_scope(), Scope::System);
/// assert_eq!(config.max_expansion_passes(), 32);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment variable to manage (normally `Path`).
    pub variable: Option<String>,

    /// Bound on variable substitutions per entry.
    pub max_expansion_passes: Option<usize>,

    /// Scope receiving entries that were not loaded from either scope.
    pub new_entry_scope: Option<Scope>,

    /// Use a YAML file instead of the native environment store.
    pub store_file: Option<PathBuf>,
}

impl Config {
    /// The managed variable name.
    #[must_use]
    pub fn variable(&self) -> &str {
        self.variable.as_deref().unwrap_or(DEFAULT_VARIABLE)
    }

    /// The expansion bound.
    #[must_use]
    pub fn max_expansion_passes(&self) -> usize {
        self.max_expansion_passes
            .unwrap_or(DEFAULT_MAX_EXPANSION_PASSES)
    }

    /// The scope new entries are saved to.
    #[must_use]
    pub fn new_entry_scope(&self) -> Scope {
        self.new_entry_scope.unwrap_or(Scope::User)
    }

    /// Overlay `other` on top of `self`: fields set in `other` win.
    pub fn merge_from(&mut self, other: &Config) {
        if other.variable.is_some() {
            self.variable.clone_from(&other.variable);
        }
        if other.max_expansion_passes.is_some() {
            self.max_expansion_passes = other.max_expansion_passes;
        }
        if other.new_entry_scope.is_some() {
            self.new_entry_scope = other.new_entry_scope;
        }
        if other.store_file.is_some() {
            self.store_file.clone_from(&other.store_file);
        }
    }
}
