//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated temporary directory used as `HOME`
//! - A YAML store file passed with `--store`
//! - Helpers to seed and read back the two scopes

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated store file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the YAML store file
    pub store: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty store.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let store = temp_path.join("store.yaml");

        Self {
            temp_dir,
            temp_path,
            store,
        }
    }

    /// A command with no store configured and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("winpath").expect("Failed to find winpath binary");
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path)
            .env_remove("WINPATH_STORE")
            .env_remove("WINPATH_VARIABLE")
            .env_remove("WINPATH_MAX_EXPANSION_PASSES")
            .env_remove("WINPATH_NEW_ENTRY_SCOPE")
            .env_remove("WINPATH_LOG_MODE");
        cmd
    }

    /// A command with `--store` pointing at this environment's store file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--store").arg(&self.store);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a directory under the temp dir and return it as a string.
    pub fn create_dir(&self, name: &str) -> String {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path.to_str().unwrap().to_string()
    }

    /// A path under the temp dir that does not exist.
    pub fn missing(&self, name: &str) -> String {
        self.temp_path.join(name).to_str().unwrap().to_string()
    }

    /// Seed the store with the given entries.
    pub fn write_store(&self, system: &[&str], user: &[&str]) {
        let mut doc = BTreeMap::new();
        doc.insert("system", system.join(";"));
        doc.insert("user", user.join(";"));
        let yaml = serde_yaml::to_string(&doc).expect("Failed to serialize store");
        std::fs::write(&self.store, yaml).expect("Failed to write store");
    }

    /// Read one scope back from the store.
    pub fn read_scope(&self, scope: &str) -> String {
        let contents = std::fs::read_to_string(&self.store).expect("Failed to read store");
        let doc: BTreeMap<String, String> =
            serde_yaml::from_str(&contents).expect("Invalid store YAML");
        doc.get(scope).cloned().unwrap_or_default()
    }

    /// Run `list` and return stdout.
    pub fn list(&self) -> String {
        let output = self.command().arg("list").output().expect("Failed to run list");
        assert!(
            output.status.success(),
            "list failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
