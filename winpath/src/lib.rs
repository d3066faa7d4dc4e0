#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winpath
//!
//! A library for inspecting and cleaning the Windows executable search path.
//!
//! The search path lives in two environment scopes, System and User. This
//! library merges them into one ordered list, compares entries the way
//! Windows resolves them (variable references expanded, case ignored,
//! separators normalized), and writes the result back per scope.
//!
//! ## Core Types
//!
//! - [`PathManager`]: load, clean, pattern removal and write-back
//! - [`PathList`] and [`PathComparator`]: ordered entries with canonical equality
//! - [`EnvironmentStore`] and [`Scope`]: where the scoped strings live
//! - [`PathPattern`]: glob or regex selection of entries
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::rc::Rc;
//! use winpath::expand::MemoryExpander;
//! use winpath::store::MemoryStore;
//! use winpath::{Config, PathManager, Scope};
//!
//! let store = MemoryStore::new(r"C:\Windows;c:\windows\", r"D:\missing");
//! let mut manager =
//!     PathManager::load(&store, Rc::new(MemoryExpander::new()), &Config::default()).unwrap();
//!
//! // Pretend only C:\Windows exists.
//! let probe = |path: &str| path.trim_end_matches('\\').eq_ignore_ascii_case(r"C:\Windows");
//! let removed = manager.clean_with(&probe, |r| println!("{} ({})", r.path, r.reason)).unwrap();
//! assert_eq!(removed, 2);
//!
//! manager.update().unwrap();
//! assert_eq!(store.value(Scope::System), r"C:\Windows");
//! assert_eq!(store.value(Scope::User), "");
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod logging;
pub mod manager;
pub mod path;
pub mod pattern;
pub mod probe;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use expand::{ProcessEnvExpander, VariableExpander};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::{PathEntry, PathManager, Removal, RemovalReason, UpdateResult};
pub use path::{CanonicalPath, PathComparator, PathList};
pub use pattern::PathPattern;
pub use probe::{DirectoryProbe, FsProbe};
pub use store::{EnvironmentStore, FileStore, MemoryStore, Scope};
