//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `WINPATH_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the managed variable name.
pub const VARIABLE_VAR: &str = "WINPATH_VARIABLE";
/// Overrides the expansion bound.
pub const MAX_EXPANSION_PASSES_VAR: &str = "WINPATH_MAX_EXPANSION_PASSES";
/// Overrides the scope new entries are saved to.
pub const NEW_ENTRY_SCOPE_VAR: &str = "WINPATH_NEW_ENTRY_SCOPE";
/// Selects a YAML file store.
pub const STORE_VAR: &str = "WINPATH_STORE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use winpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `WINPATH_*` overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed (non-numeric bound,
    /// unknown scope).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Same as [`apply_overrides`](Self::apply_overrides).
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(variable) = lookup(VARIABLE_VAR) {
            config.variable = Some(variable);
        }

        if let Some(passes) = lookup(MAX_EXPANSION_PASSES_VAR) {
            config.max_expansion_passes =
                Some(passes.trim().parse().map_err(|_| Error::Validation {
                    field: MAX_EXPANSION_PASSES_VAR.into(),
                    message: format!("Must be a positive integer, got '{passes}'"),
                })?);
        }

        if let Some(scope) = lookup(NEW_ENTRY_SCOPE_VAR) {
            config.new_entry_scope = Some(scope.parse().map_err(|message| Error::Validation {
                field: NEW_ENTRY_SCOPE_VAR.into(),
                message,
            })?);
        }

        if let Some(store) = lookup(STORE_VAR) {
            if !store.is_empty() {
                config.store_file = Some(PathBuf::from(store));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Scope;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_no_overrides_leaves_config() {
        let mut config = Config::default();
        EnvironmentConfig::apply_from(&mut config, lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_all_overrides() {
        let mut config = Config::default();
        EnvironmentConfig::apply_from(
            &mut config,
            lookup_from(&[
                (VARIABLE_VAR, "PATHEXT"),
                (MAX_EXPANSION_PASSES_VAR, " 7 "),
                (NEW_ENTRY_SCOPE_VAR, "System"),
                (STORE_VAR, "/tmp/store.yaml"),
            ]),
        )
        .unwrap();

        assert_eq!(config.variable(), "PATHEXT");
        assert_eq!(config.max_expansion_passes(), 7);
        assert_eq!(config.new_entry_scope(), Scope::System);
        assert_eq!(config.store_file, Some(PathBuf::from("/tmp/store.yaml")));
    }

    #[test]
    fn test_invalid_passes_rejected() {
        let mut config = Config::default();
        let err = EnvironmentConfig::apply_from(
            &mut config,
            lookup_from(&[(MAX_EXPANSION_PASSES_VAR, "many")]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == MAX_EXPANSION_PASSES_VAR));
    }

    #[test]
    fn test_invalid_scope_rejected() {
        let mut config = Config::default();
        let result = EnvironmentConfig::apply_from(
            &mut config,
            lookup_from(&[(NEW_ENTRY_SCOPE_VAR, "machine")]),
        );
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_reads_process_env() {
        let saved = env::var(VARIABLE_VAR).ok();
        env::set_var(VARIABLE_VAR, "WINPATH_TEST_VARIABLE");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.variable(), "WINPATH_TEST_VARIABLE");

        match saved {
            Some(val) => env::set_var(VARIABLE_VAR, val),
            None => env::remove_var(VARIABLE_VAR),
        }
    }
}
