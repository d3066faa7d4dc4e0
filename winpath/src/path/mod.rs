//! Windows-style path identity and the ordered path list.
//!
//! # Key Concepts
//!
//! ## Canonical form
//!
//! Two entries of the search path name the same directory when their
//! canonical forms match. The canonical form is computed by:
//! - Expanding `%NAME%` variable references
//! - Lowercasing
//! - Lexical normalization (separators, `.`/`..`, trailing separator)
//!
//! It is never cached; see [`PathComparator`].
//!
//! ## Path list
//!
//! [`PathList`] stores raw entries verbatim, in search order, and answers
//! membership and removal questions through the comparator.
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use winpath::expand::MemoryExpander;
//! use winpath::path::{PathComparator, PathList};
//!
//! let comparator = PathComparator::new(Rc::new(MemoryExpander::new()));
//! let mut list = PathList::new(comparator);
//! list.append(r"C:\Program Files");
//! list.append(r"c:\program files\");
//!
//! assert_eq!(list.remove_by_value(r"C:\PROGRAM FILES").unwrap().len(), 2);
//! assert!(list.is_empty());
//! ```

mod comparator;
mod list;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use comparator::{CanonicalPath, PathComparator};
pub use list::{Iter, PathList};
