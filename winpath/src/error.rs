//! Error types for the winpath library.
//!
//! This module provides the error hierarchy for all operations in the
//! winpath library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::store::Scope;

/// Result type alias for operations that may fail with a winpath error.
///
/// # Examples
///
/// ```
/// use winpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the winpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// Variable references in a path never reached a fixed point.
    #[error("variable expansion of '{path}' did not terminate after {passes} passes")]
    ExpansionNonTermination {
        /// The raw path being expanded.
        path: String,
        /// The number of substitution passes performed.
        passes: usize,
    },

    /// An index outside the current bounds of a path list.
    #[error("index {index} out of bounds for path list of length {len}")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// The environment store could not be read.
    #[error("failed to read {scope} path: {reason}")]
    StoreRead {
        /// The scope being read.
        scope: Scope,
        /// The underlying failure.
        reason: String,
    },

    /// The environment store rejected a write.
    #[error("failed to write {scope} path: {reason}")]
    StoreWrite {
        /// The scope being written.
        scope: Scope,
        /// The underlying failure.
        reason: String,
    },

    /// A malformed glob or regular expression.
    #[error("invalid pattern '{pattern}': {reason}")]
    Pattern {
        /// The pattern text as supplied.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error came from the environment store.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::{Error, Scope};
    ///
    /// let err = Error::StoreWrite { scope: Scope::System, reason: "denied".into() };
    /// assert!(err.is_store_error());
    /// ```
    #[must_use]
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::StoreRead { .. } | Self::StoreWrite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_error_display() {
        let err = Error::ExpansionNonTermination {
            path: "%A%".to_string(),
            passes: 32,
        };
        let display = format!("{err}");
        assert!(display.contains("%A%"));
        assert!(display.contains("32"));
    }

    #[test]
    fn test_invalid_index_display() {
        let err = Error::InvalidIndex { index: 5, len: 2 };
        let display = format!("{err}");
        assert!(display.contains("index 5"));
        assert!(display.contains("length 2"));
    }

    #[test]
    fn test_store_write_display() {
        let err = Error::StoreWrite {
            scope: Scope::User,
            reason: "access denied".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("User"));
        assert!(display.contains("access denied"));
        assert!(err.is_store_error());
    }

    #[test]
    fn test_pattern_error_display() {
        let err = Error::Pattern {
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid pattern"));
        assert!(display.contains("unclosed group"));
        assert!(!err.is_store_error());
    }

    #[test]
    fn test_invalid_path_display() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/missing/config.yaml"),
            reason: "not readable".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("/missing/config.yaml"));
        assert!(display.contains("not readable"));
    }
}
