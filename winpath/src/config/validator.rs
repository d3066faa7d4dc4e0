//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Upper bound accepted for `max_expansion_passes`.
pub const MAX_EXPANSION_PASSES_LIMIT: usize = 1024;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use winpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_expansion_passes: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref variable) = config.variable {
            Self::validate_variable(variable)?;
        }

        if let Some(passes) = config.max_expansion_passes {
            if passes == 0 || passes > MAX_EXPANSION_PASSES_LIMIT {
                return Err(Error::Validation {
                    field: "max_expansion_passes".into(),
                    message: format!("Must be between 1 and {MAX_EXPANSION_PASSES_LIMIT}"),
                });
            }
        }

        if let Some(ref store) = config.store_file {
            if store.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "store_file".into(),
                    message: "Store file path cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_variable(variable: &str) -> Result<()> {
        if variable.trim().is_empty() {
            return Err(Error::Validation {
                field: "variable".into(),
                message: "Variable name cannot be empty".into(),
            });
        }

        if let Some(bad) = variable.chars().find(|c| matches!(c, '=' | ';' | '%' | '\0')) {
            return Err(Error::Validation {
                field: "variable".into(),
                message: format!("Variable name cannot contain '{}'", bad.escape_default()),
            });
        }

        Ok(())
    }
}
