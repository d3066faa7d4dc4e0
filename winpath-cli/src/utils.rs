//! Utility functions for CLI operations.
//!
//! This module provides the plumbing shared by every command: configuration
//! loading, choosing the environment store, loading the path manager and
//! writing JSON output.

use crate::error::CliError;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use winpath::{Config, ConfigBuilder, EnvironmentStore, FileStore, PathManager, ProcessEnvExpander};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Use this YAML file as the environment store.
    pub store: Option<PathBuf>,
}

/// The manager type every command works with.
pub type Manager = PathManager<Box<dyn EnvironmentStore>>;

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        store_file: global.store.clone(),
        ..Default::default()
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the environment store selected by `config`.
///
/// A configured store file always wins; otherwise the native store is used.
pub fn open_store(config: &Config) -> Result<Box<dyn EnvironmentStore>, CliError> {
    if let Some(ref path) = config.store_file {
        log::debug!("Using store file {}", path.display());
        return Ok(Box::new(FileStore::new(path)));
    }
    native_store(config)
}

#[cfg(windows)]
fn native_store(config: &Config) -> Result<Box<dyn EnvironmentStore>, CliError> {
    log::debug!("Using the registry value {}", config.variable());
    Ok(Box::new(winpath::store::RegistryStore::new(config.variable())))
}

#[cfg(not(windows))]
fn native_store(_config: &Config) -> Result<Box<dyn EnvironmentStore>, CliError> {
    Err(CliError::Config(
        "no native environment store on this platform (use --store FILE or WINPATH_STORE)"
            .to_string(),
    ))
}

/// Load configuration, open the store and read both scopes.
pub fn load_manager(global: &GlobalOptions) -> Result<(Config, Manager), CliError> {
    let config = load_configuration(global)?;
    let store = open_store(&config)?;
    let manager = PathManager::load(store, Rc::new(ProcessEnvExpander), &config)?;
    Ok((config, manager))
}

/// Write `value` to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).map_err(std::io::Error::from)?;
    writeln!(handle)?;
    Ok(())
}
