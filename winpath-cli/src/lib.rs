//! Library exports for winpath-cli.
//!
//! The binary in `main.rs` is a thin dispatcher over these modules.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
