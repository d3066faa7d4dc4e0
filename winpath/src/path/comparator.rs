//! Canonical path identity.

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::expand::{expand_variables, VariableExpander, DEFAULT_MAX_EXPANSION_PASSES};

use super::normalize::normalize_lexical;

/// The comparison form of a path: expanded, lowercased, lexically normalized.
///
/// Two raw entries name the same directory iff their canonical forms are
/// equal. A `CanonicalPath` is a throwaway value; it is recomputed on every
/// comparison because the variables behind it can change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    /// The canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes canonical forms against a variable expander.
///
/// Cloning is cheap: clones share the same expander.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use winpath::expand::MemoryExpander;
/// use winpath::path::PathComparator;
///
/// let vars = Rc::new(MemoryExpander::new());
/// vars.set("ProgramFiles", r"C:\Program Files");
/// let comparator = PathComparator::new(vars.clone());
///
/// assert!(comparator.equal(r"%ProgramFiles%\Git", r"c:\program files\git\").unwrap());
///
/// vars.set("ProgramFiles", r"D:\Apps");
/// assert!(!comparator.equal(r"%ProgramFiles%\Git", r"c:\program files\git").unwrap());
/// ```
#[derive(Clone)]
pub struct PathComparator {
    expander: Rc<dyn VariableExpander>,
    max_passes: usize,
}

impl fmt::Debug for PathComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathComparator")
            .field("max_passes", &self.max_passes)
            .finish_non_exhaustive()
    }
}

impl PathComparator {
    /// Create a comparator using the default expansion bound.
    pub fn new(expander: Rc<dyn VariableExpander>) -> Self {
        Self::with_max_passes(expander, DEFAULT_MAX_EXPANSION_PASSES)
    }

    /// Create a comparator with an explicit expansion bound.
    pub fn with_max_passes(expander: Rc<dyn VariableExpander>, max_passes: usize) -> Self {
        Self {
            expander,
            max_passes,
        }
    }

    /// Expand variable references in `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExpansionNonTermination`](crate::Error::ExpansionNonTermination)
    /// for circular references.
    pub fn expand(&self, raw: &str) -> Result<String> {
        expand_variables(raw, self.expander.as_ref(), self.max_passes)
    }

    /// Compute the canonical form of `raw`.
    ///
    /// # Errors
    ///
    /// Fails only if expansion fails.
    pub fn canonicalize(&self, raw: &str) -> Result<CanonicalPath> {
        let expanded = self.expand(raw)?;
        Ok(CanonicalPath(normalize_lexical(&expanded.to_lowercase())))
    }

    /// Whether `a` and `b` name the same path.
    ///
    /// # Errors
    ///
    /// Fails if either side fails to expand.
    pub fn equal(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.canonicalize(a)? == self.canonicalize(b)?)
    }
}
