//! Expansion of `%NAME%` variable references inside path strings.
//!
//! Windows path entries often reference other environment variables, as in
//! `%SystemRoot%\System32`. Expansion is always done on demand: the values
//! behind a name can change while the program runs, so nothing here caches.
//!
//! # Examples
//!
//! ```
//! use winpath::expand::{expand_variables, MemoryExpander};
//!
//! let vars = MemoryExpander::new();
//! vars.set("SystemRoot", r"C:\Windows");
//!
//! let expanded = expand_variables(r"%SYSTEMROOT%\System32", &vars, 32).unwrap();
//! assert_eq!(expanded, r"C:\Windows\System32");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::env;

use crate::error::{Error, Result};

/// Default bound on substitution passes before giving up.
pub const DEFAULT_MAX_EXPANSION_PASSES: usize = 32;

/// Longest expanded string Windows will produce for an environment value.
pub const MAX_EXPANDED_LEN: usize = 32_767;

/// Resolves a single `%NAME%` token.
///
/// Implementations return the token unchanged when the name is unknown,
/// mirroring `ExpandEnvironmentStrings`.
pub trait VariableExpander {
    /// Expand one `%NAME%` token (delimiters included).
    fn expand(&self, token: &str) -> String;
}

/// Strip the `%` delimiters from a token.
fn token_name(token: &str) -> &str {
    token
        .strip_prefix('%')
        .and_then(|t| t.strip_suffix('%'))
        .unwrap_or(token)
}

/// Expands tokens from the current process environment.
///
/// Lookups happen at call time, so changes made with `std::env::set_var`
/// are visible to the next expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvExpander;

impl VariableExpander for ProcessEnvExpander {
    fn expand(&self, token: &str) -> String {
        env::var(token_name(token)).unwrap_or_else(|_| token.to_string())
    }
}

/// Expands tokens from an in-memory table with case-insensitive names.
///
/// Values can be changed through a shared reference, which lets a caller
/// keep a handle and rebind variables between two expansions.
#[derive(Debug, Default)]
pub struct MemoryExpander {
    vars: RefCell<HashMap<String, String>>,
}

impl MemoryExpander {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn set(&self, name: &str, value: impl Into<String>) {
        self.vars
            .borrow_mut()
            .insert(name.to_uppercase(), value.into());
    }

    /// Remove a binding.
    pub fn unset(&self, name: &str) {
        self.vars.borrow_mut().remove(&name.to_uppercase());
    }
}

impl VariableExpander for MemoryExpander {
    fn expand(&self, token: &str) -> String {
        self.vars
            .borrow()
            .get(&token_name(token).to_uppercase())
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }
}

/// Find the first `%NAME%` token at or after byte offset `from`.
///
/// Returns the byte range of the token including both delimiters. `%%` is
/// not a token.
fn find_token(s: &str, from: usize) -> Option<(usize, usize)> {
    let mut search = from;
    loop {
        let start = search + s[search..].find('%')?;
        let end = start + 1 + s[start + 1..].find('%')?;
        if end > start + 1 {
            return Some((start, end + 1));
        }
        // "%%": the second percent may open the next token.
        search = end;
    }
}

/// Expand every `%NAME%` token in `raw` until none resolve any further.
///
/// The string is scanned left to right for the first token; every
/// occurrence of that token is replaced by its expansion and scanning
/// restarts from the beginning. Tokens the expander leaves unchanged stay in
/// place verbatim, and scanning resumes at their closing `%`.
///
/// # Errors
///
/// Returns [`Error::ExpansionNonTermination`] if more than `max_passes`
/// substitutions are needed, which happens with circular references such as
/// `A=%B%`, `B=%A%`, or if the result would outgrow [`MAX_EXPANDED_LEN`].
pub fn expand_variables(
    raw: &str,
    expander: &dyn VariableExpander,
    max_passes: usize,
) -> Result<String> {
    let mut current = raw.to_string();
    let mut cursor = 0;
    let mut passes = 0;

    while let Some((start, end)) = find_token(&current, cursor) {
        let token = current[start..end].to_string();
        let value = expander.expand(&token);

        if value == token {
            // The closing `%` may open the next token.
            cursor = end - 1;
            continue;
        }

        passes += 1;
        if passes > max_passes || current.len() + value.len() > MAX_EXPANDED_LEN {
            return Err(Error::ExpansionNonTermination {
                path: raw.to_string(),
                passes: passes.min(max_passes),
            });
        }

        current = current.replace(&token, &value);
        cursor = 0;
    }

    Ok(current)
}
