//! In-memory environment store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{EnvironmentStore, Scope};
use crate::error::{Error, Result};

/// An [`EnvironmentStore`] held entirely in memory.
///
/// Useful as a test double: it counts writes and can be told to reject
/// writes to a given scope.
///
/// # Examples
///
/// ```
/// use winpath::store::{EnvironmentStore, MemoryStore, Scope};
///
/// let store = MemoryStore::new("", "");
/// store.fail_writes_to(Scope::System);
/// assert!(store.write_scope(Scope::System, "x").is_err());
/// assert!(store.write_scope(Scope::User, "x").is_ok());
/// assert_eq!(store.write_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<Scope, String>>,
    writes: Cell<usize>,
    failing: RefCell<Option<Scope>>,
}

impl MemoryStore {
    /// Create a store holding the given System and User strings.
    #[must_use]
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(Scope::System, system.into());
        values.insert(Scope::User, user.into());
        Self {
            values: RefCell::new(values),
            ..Self::default()
        }
    }

    /// Current value of a scope (empty if never set).
    #[must_use]
    pub fn value(&self, scope: Scope) -> String {
        self.values.borrow().get(&scope).cloned().unwrap_or_default()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Make every subsequent write to `scope` fail.
    pub fn fail_writes_to(&self, scope: Scope) {
        *self.failing.borrow_mut() = Some(scope);
    }
}

impl EnvironmentStore for MemoryStore {
    fn read_scope(&self, scope: Scope) -> Result<String> {
        Ok(self.value(scope))
    }

    fn write_scope(&self, scope: Scope, value: &str) -> Result<()> {
        if *self.failing.borrow() == Some(scope) {
            return Err(Error::StoreWrite {
                scope,
                reason: "write rejected by store".to_string(),
            });
        }
        self.values.borrow_mut().insert(scope, value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
