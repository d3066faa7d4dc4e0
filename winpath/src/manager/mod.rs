//! Merged System + User search path with write-back.
//!
//! [`PathManager`] loads both scopes of the managed variable into one
//! [`PathList`], remembers which scope every entry came from, runs the
//! cleaning and pattern-removal passes, and on [`update`](PathManager::update)
//! writes each scope's surviving entries back to the store.
//!
//! Nothing is persisted until `update` is called.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use winpath::config::Config;
//! use winpath::expand::MemoryExpander;
//! use winpath::store::{MemoryStore, Scope};
//! use winpath::{PathManager, PathPattern};
//!
//! let store = MemoryStore::new(r"C:\Windows;C:\Tools", r"C:\Tools\;D:\bin");
//! let mut manager =
//!     PathManager::load(&store, Rc::new(MemoryExpander::new()), &Config::default()).unwrap();
//!
//! let removed = manager.remove_matching(&PathPattern::glob(r"C:\TOOLS*").unwrap()).unwrap();
//! assert_eq!(removed.len(), 2);
//!
//! manager.update().unwrap();
//! assert_eq!(store.value(Scope::System), r"C:\Windows");
//! assert_eq!(store.value(Scope::User), r"D:\bin");
//! ```

mod clean;
mod remove;

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::expand::VariableExpander;
use crate::path::{PathComparator, PathList};
use crate::store::{join_entries, split_entries, EnvironmentStore, Scope};

pub use clean::{Removal, RemovalReason};

/// One entry of the merged path, as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Expanded path.
    pub path: String,
    /// Stored form, possibly containing `%NAME%` references.
    pub raw: String,
    /// Scope the entry will be saved to.
    pub scope: Scope,
}

/// Outcome of [`PathManager::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateResult {
    /// Scopes that were written, in write order.
    pub written: Vec<Scope>,
}

impl UpdateResult {
    /// Whether nothing needed writing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

/// The merged, scope-aware search path.
pub struct PathManager<S: EnvironmentStore> {
    store: S,
    paths: PathList,
    /// Scopes per raw string, one per occurrence in list order.
    origins: HashMap<String, Vec<Scope>>,
    /// Last value known to be in the store, per scope.
    persisted: HashMap<Scope, String>,
    new_entry_scope: Scope,
}

impl<S: EnvironmentStore> PathManager<S> {
    /// Read System then User from `store` into one list.
    ///
    /// Each scope string is split on `;`; pieces are trimmed and blank
    /// pieces skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`](crate::Error::StoreRead) if a scope
    /// cannot be read.
    pub fn load(store: S, expander: Rc<dyn VariableExpander>, config: &Config) -> Result<Self> {
        let comparator = PathComparator::with_max_passes(expander, config.max_expansion_passes());
        let mut manager = Self {
            store,
            paths: PathList::new(comparator),
            origins: HashMap::new(),
            persisted: HashMap::new(),
            new_entry_scope: config.new_entry_scope(),
        };

        for scope in Scope::ALL {
            let value = manager.store.read_scope(scope)?;
            let entries: Vec<&str> = split_entries(&value).collect();
            log::debug!("Loaded {} {scope} entries", entries.len());

            for entry in &entries {
                manager.push_entry(entry, scope);
            }
            manager.persisted.insert(scope, join_entries(&entries));
        }

        Ok(manager)
    }

    /// The merged list.
    #[must_use]
    pub fn paths(&self) -> &PathList {
        &self.paths
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the merged list contains `path` (canonical comparison).
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand.
    pub fn contains(&self, path: &str) -> Result<bool> {
        self.paths.contains(path)
    }

    /// Append `path` to the list unless it is already present.
    ///
    /// Returns whether the entry was added. The entry is saved to `scope`,
    /// or to the configured new-entry scope when `scope` is `None`.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand.
    pub fn add(&mut self, path: &str, scope: Option<Scope>) -> Result<bool> {
        let path = path.trim();
        if path.is_empty() || self.paths.contains(path)? {
            return Ok(false);
        }
        self.push_entry(path, scope.unwrap_or(self.new_entry_scope));
        Ok(true)
    }

    /// The scope each entry will be saved to, in list order.
    #[must_use]
    pub fn scopes(&self) -> Vec<Scope> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        self.paths
            .raw_entries()
            .iter()
            .map(|raw| {
                let occurrence = seen.entry(raw.as_str()).or_insert(0);
                let scope = self
                    .origins
                    .get(raw)
                    .and_then(|scopes| scopes.get(*occurrence))
                    .copied()
                    .unwrap_or(self.new_entry_scope);
                *occurrence += 1;
                scope
            })
            .collect()
    }

    /// Every entry with its expanded form and scope.
    ///
    /// # Errors
    ///
    /// Fails if an entry fails to expand.
    pub fn entries(&self) -> Result<Vec<PathEntry>> {
        self.paths
            .iter()
            .zip(self.paths.raw_entries())
            .zip(self.scopes())
            .map(|((path, raw), scope)| {
                Ok(PathEntry {
                    path: path?,
                    raw: raw.clone(),
                    scope,
                })
            })
            .collect()
    }

    /// Write the list back to the store, one `;`-joined string per scope.
    ///
    /// Scopes whose value did not change are not written, so a call makes
    /// at most two writes. The writes are independent: if the second fails
    /// the first stays written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`](crate::Error::StoreWrite) on the first
    /// rejected write.
    pub fn update(&mut self) -> Result<UpdateResult> {
        let mut groups: HashMap<Scope, Vec<&str>> = HashMap::new();
        for (raw, scope) in self.paths.raw_entries().iter().zip(self.scopes()) {
            groups.entry(scope).or_default().push(raw.as_str());
        }

        let mut result = UpdateResult::default();
        for scope in Scope::ALL {
            let value = join_entries(groups.get(&scope).map_or(&[][..], Vec::as_slice));
            if self.persisted.get(&scope) == Some(&value) {
                log::debug!("{scope} path unchanged; skipping write");
                continue;
            }

            self.store.write_scope(scope, &value)?;
            log::debug!("Wrote {scope} path");
            self.persisted.insert(scope, value);
            result.written.push(scope);
        }

        Ok(result)
    }

    fn push_entry(&mut self, raw: &str, scope: Scope) {
        self.paths.append(raw);
        self.origins.entry(raw.to_string()).or_default().push(scope);
    }

    /// Remove the entry at `position`, keeping origin bookkeeping aligned.
    fn remove_entry_at(&mut self, position: usize) -> Result<String> {
        let entries = self.paths.raw_entries();
        let occurrence = entries.get(position).map_or(0, |target| {
            entries[..position].iter().filter(|raw| *raw == target).count()
        });
        let raw = self.paths.remove_at(position)?;

        if let Some(scopes) = self.origins.get_mut(&raw) {
            if occurrence < scopes.len() {
                scopes.remove(occurrence);
            }
            if scopes.is_empty() {
                self.origins.remove(&raw);
            }
        }
        Ok(raw)
    }

    /// Remove every entry canonically equal to `path`.
    fn remove_entries_equal_to(&mut self, path: &str) -> Result<usize> {
        let removed = self.paths.remove_by_value(path)?;
        for raw in &removed {
            self.origins.remove(raw);
        }
        Ok(removed.len())
    }
}
