//! Environment stores holding the two scoped path strings.
//!
//! Windows keeps the executable search path in two places: a machine-wide
//! System scope and a per-user User scope. Each holds one `;`-joined string.
//! The [`EnvironmentStore`] trait is the narrow seam the rest of the crate
//! reads and writes those strings through, so the registry, a YAML file or
//! an in-memory double are interchangeable.
//!
//! # Examples
//!
//! ```
//! use winpath::store::{EnvironmentStore, MemoryStore, Scope};
//!
//! let store = MemoryStore::new(r"C:\Windows", r"C:\Users\me\bin");
//! assert_eq!(store.read_scope(Scope::System).unwrap(), r"C:\Windows");
//!
//! store.write_scope(Scope::User, r"C:\tools").unwrap();
//! assert_eq!(store.read_scope(Scope::User).unwrap(), r"C:\tools");
//! ```

mod file;
mod memory;
#[cfg(windows)]
mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(windows)]
pub use registry::RegistryStore;

/// Separator between entries in a persisted path string.
pub const ENTRY_SEPARATOR: char = ';';

/// One of the two environment scopes a path entry can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Machine-wide path, read first.
    System,
    /// Per-user path, appended after the system entries.
    User,
}

impl Scope {
    /// Both scopes in load order.
    pub const ALL: [Scope; 2] = [Scope::System, Scope::User];
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::User => write!(f, "User"),
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            _ => Err(format!("invalid scope: {s} (expected 'system' or 'user')")),
        }
    }
}

/// Read/write access to the scoped path strings.
///
/// Writes are independent; no transactionality is provided.
pub trait EnvironmentStore {
    /// Read the raw `;`-joined path string for a scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`](crate::Error::StoreRead) if the value
    /// cannot be read.
    fn read_scope(&self, scope: Scope) -> Result<String>;

    /// Replace the raw `;`-joined path string for a scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`](crate::Error::StoreWrite) if the store
    /// rejects the write.
    fn write_scope(&self, scope: Scope, value: &str) -> Result<()>;
}

impl<T: EnvironmentStore + ?Sized> EnvironmentStore for Box<T> {
    fn read_scope(&self, scope: Scope) -> Result<String> {
        (**self).read_scope(scope)
    }

    fn write_scope(&self, scope: Scope, value: &str) -> Result<()> {
        (**self).write_scope(scope, value)
    }
}

impl<T: EnvironmentStore + ?Sized> EnvironmentStore for &T {
    fn read_scope(&self, scope: Scope) -> Result<String> {
        (**self).read_scope(scope)
    }

    fn write_scope(&self, scope: Scope, value: &str) -> Result<()> {
        (**self).write_scope(scope, value)
    }
}

/// Split a persisted path string into trimmed, non-empty entries.
///
/// # Examples
///
/// ```
/// use winpath::store::split_entries;
///
/// let entries: Vec<&str> = split_entries(r" C:\a ;;C:\b; ").collect();
/// assert_eq!(entries, vec![r"C:\a", r"C:\b"]);
/// ```
pub fn split_entries(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(ENTRY_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

/// Join entries back into a persisted path string.
#[must_use]
pub fn join_entries<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&ENTRY_SEPARATOR.to_string())
}
