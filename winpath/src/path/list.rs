//! Ordered list of raw path entries.

use crate::error::{Error, Result};

use super::comparator::PathComparator;

/// An ordered sequence of raw path strings with canonical-path equality.
///
/// Entries are stored exactly as given; reads expand them on demand.
/// Insertion order is search order and only deletions change it.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use winpath::expand::MemoryExpander;
/// use winpath::path::{PathComparator, PathList};
///
/// let vars = Rc::new(MemoryExpander::new());
/// vars.set("TOOLS", r"C:\Tools");
///
/// let mut list = PathList::new(PathComparator::new(vars));
/// list.append(r"%TOOLS%\bin");
/// list.append(r"C:\Windows");
///
/// assert!(list.contains(r"c:\tools\bin\").unwrap());
/// assert_eq!(list.get(0).unwrap(), r"C:\Tools\bin");
/// assert_eq!(list.raw(0), Some(r"%TOOLS%\bin"));
/// ```
#[derive(Debug, Clone)]
pub struct PathList {
    entries: Vec<String>,
    comparator: PathComparator,
}

impl PathList {
    /// Create an empty list comparing through `comparator`.
    #[must_use]
    pub fn new(comparator: PathComparator) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// The comparator used for membership and value removal.
    #[must_use]
    pub fn comparator(&self) -> &PathComparator {
        &self.comparator
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is canonically equal to `path`.
    ///
    /// # Errors
    ///
    /// Fails if `path` or a stored entry fails to expand.
    pub fn contains(&self, path: &str) -> Result<bool> {
        let target = self.comparator.canonicalize(path)?;
        for entry in &self.entries {
            if self.comparator.canonicalize(entry)? == target {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Add a raw entry at the end.
    pub fn append(&mut self, path: impl Into<String>) {
        self.entries.push(path.into());
    }

    /// Remove every entry canonically equal to `path`, returning the raw
    /// strings that were removed, in list order.
    ///
    /// # Errors
    ///
    /// Fails if `path` or a stored entry fails to expand; the list is left
    /// untouched in that case.
    pub fn remove_by_value(&mut self, path: &str) -> Result<Vec<String>> {
        let target = self.comparator.canonicalize(path)?;
        let keep = self
            .entries
            .iter()
            .map(|entry| Ok(self.comparator.canonicalize(entry)? != target))
            .collect::<Result<Vec<bool>>>()?;

        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .zip(keep)
            .partition(|(_, keep)| *keep);
        self.entries = kept.into_iter().map(|(entry, _)| entry).collect();
        Ok(removed.into_iter().map(|(entry, _)| entry).collect())
    }

    /// Remove the entry at `index` in the current sequence and return its
    /// raw string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// The expanded form of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if `index` is out of bounds, or an
    /// expansion error.
    pub fn get(&self, index: usize) -> Result<String> {
        self.check_index(index)?;
        self.comparator.expand(&self.entries[index])
    }

    /// The stored raw string at `index`.
    #[must_use]
    pub fn raw(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All stored raw strings in order.
    #[must_use]
    pub fn raw_entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over expanded entries in order.
    ///
    /// Each element is expanded when it is yielded, so the iterator reflects
    /// variable values at that moment. Call again to restart.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries.iter(),
            comparator: &self.comparator,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index,
                len: self.entries.len(),
            })
        }
    }
}

/// Lazily expanding iterator over a [`PathList`].
#[derive(Debug)]
pub struct Iter<'a> {
    entries: std::slice::Iter<'a, String>,
    comparator: &'a PathComparator,
}

impl Iterator for Iter<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .next()
            .map(|entry| self.comparator.expand(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PathList {
    type Item = Result<String>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
