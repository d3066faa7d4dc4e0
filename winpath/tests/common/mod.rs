//! Common test utilities for integration tests.
//!
//! Real directories live under a [`TempDir`] so cleaning can be tested
//! against the actual filesystem with [`winpath::FsProbe`].

use std::fs;
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;
use winpath::expand::MemoryExpander;
use winpath::store::join_entries;
use winpath::{Config, EnvironmentStore, MemoryStore, PathManager};

/// A scratch directory tree for building search paths.
pub struct PathFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl PathFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// The fixture root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `name` (and its parents) and returns its path as a string.
    pub fn dir(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// Creates a regular file and returns its path as a string.
    pub fn file(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        fs::write(&path, "").unwrap();
        path.to_str().unwrap().to_string()
    }

    /// A path under the fixture that does not exist.
    pub fn missing(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }
}

/// Builds a memory store from two entry lists.
#[allow(dead_code)]
pub fn memory_store<S: AsRef<str>>(system: &[S], user: &[S]) -> MemoryStore {
    MemoryStore::new(join_entries(system), join_entries(user))
}

/// Loads a manager over `store` with default configuration.
#[allow(dead_code)]
pub fn load<S: EnvironmentStore>(store: S) -> PathManager<S> {
    load_with(store, Rc::new(MemoryExpander::new()))
}

/// Loads a manager over `store` expanding through `vars`.
#[allow(dead_code)]
pub fn load_with<S: EnvironmentStore>(store: S, vars: Rc<MemoryExpander>) -> PathManager<S> {
    PathManager::load(store, vars, &Config::default()).unwrap()
}
