//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding winpath files.
pub const DATA_DIR_NAME: &str = ".winpath";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use winpath::config::ConfigLoader;
///
/// if let Some(config) = ConfigLoader::load_user_config().unwrap() {
///     println!("managing {}", config.variable());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default user configuration file, `~/.winpath/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "Cannot determine home directory".to_string(),
        })?;
        Ok(home.join(DATA_DIR_NAME).join("config.yaml"))
    }

    /// Load the user configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<Config>> {
        Self::load_optional(&Self::user_config_path()?)
    }

    /// Load `path` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            log::debug!("No configuration file at {}", path.display());
            return Ok(None);
        }
        Self::load_file(path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
