//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: Show the merged search path
//! - `contains`: Check membership
//! - `add`: Append a directory
//! - `clean`: Remove missing and duplicate directories
//! - `remove`: Remove directories matching a pattern
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod clean;
pub mod completions;
pub mod contains;
pub mod list;
pub mod remove;

pub use add::AddCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use contains::ContainsCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
