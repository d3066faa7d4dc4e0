//! Patterns selecting path entries for removal.
//!
//! Globs follow Windows conventions: matching ignores case and `\` is an
//! ordinary character, never an escape. `*` matches any run of characters
//! (including none and including separators) and `?` matches exactly one.
//! Regular expressions use the `regex` crate syntax and match anywhere in
//! the entry unless anchored.
//!
//! # Examples
//!
//! ```
//! use winpath::pattern::PathPattern;
//!
//! let glob = PathPattern::glob(r"C:\PROGRAM*").unwrap();
//! assert!(glob.matches(r"C:\program files"));
//!
//! let regex = PathPattern::regex(r"(?i)^c:\\program files$").unwrap();
//! assert!(regex.matches(r"C:\Program Files"));
//! ```

use std::fmt;

use glob::{MatchOptions, Pattern};
use regex::Regex;

use crate::error::{Error, Result};

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled glob or regular expression.
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Shell-style glob.
    Glob(Pattern),
    /// Regular expression.
    Regex(Regex),
}

impl PathPattern {
    /// Compile a glob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] for malformed globs such as `[a-`.
    pub fn glob(text: &str) -> Result<Self> {
        Pattern::new(&collapse_stars(text))
            .map(Self::Glob)
            .map_err(|e| Error::Pattern {
                pattern: text.to_string(),
                reason: e.msg.to_string(),
            })
    }

    /// Compile a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] for malformed expressions.
    pub fn regex(text: &str) -> Result<Self> {
        Regex::new(text)
            .map(Self::Regex)
            .map_err(|e| Error::Pattern {
                pattern: text.to_string(),
                reason: e.to_string(),
            })
    }

    /// Compile `text` as a regex when `is_regex` is set, otherwise as a glob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if `text` does not compile.
    pub fn parse(text: &str, is_regex: bool) -> Result<Self> {
        if is_regex {
            Self::regex(text)
        } else {
            Self::glob(text)
        }
    }

    /// Whether an expanded path entry matches.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Glob(pattern) => pattern.matches_with(path, GLOB_OPTIONS),
            Self::Regex(regex) => regex.is_match(path),
        }
    }
}

/// Reduce every run of `*` to one.
///
/// The `glob` crate reads `**` as a recursive wildcard that must stand alone
/// between separators. Here `\` is never a separator, so `**` means `*`.
fn collapse_stars(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob(pattern) => write!(f, "glob {}", pattern.as_str()),
            Self::Regex(regex) => write!(f, "regex {}", regex.as_str()),
        }
    }
}
