//! Directory existence checks used when cleaning.

use std::path::Path;

/// Answers whether an expanded path names an existing directory.
pub trait DirectoryProbe {
    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &str) -> bool;
}

/// Checks the real filesystem.
///
/// # Examples
///
/// ```
/// use winpath::probe::{DirectoryProbe, FsProbe};
///
/// let here = std::env::current_dir().unwrap();
/// assert!(FsProbe.is_dir(here.to_str().unwrap()));
/// assert!(!FsProbe.is_dir("/definitely/not/here/winpath"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
    fn is_dir(&self, path: &str) -> bool {
        // Unreadable metadata counts as missing, same as `Path::is_dir`.
        !path.is_empty() && Path::new(path).is_dir()
    }
}

impl<F> DirectoryProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_dir(&self, path: &str) -> bool {
        self(path)
    }
}
