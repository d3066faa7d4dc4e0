//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CleanCommand, CompletionsCommand, ContainsCommand, ListCommand, RemoveCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting and cleaning the Windows search path.
#[derive(Parser)]
#[command(name = "winpath")]
#[command(version, about = "Inspect and clean the Windows executable search path", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read and write a YAML file instead of the system environment
    #[arg(long, value_name = "FILE", global = true, env = "WINPATH_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the merged search path
    List(ListCommand),

    /// Exit successfully if a directory is on the search path
    Contains(ContainsCommand),

    /// Append a directory to the search path
    Add(AddCommand),

    /// Remove missing and duplicate directories
    Clean(CleanCommand),

    /// Remove directories matching a pattern
    Remove(RemoveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
