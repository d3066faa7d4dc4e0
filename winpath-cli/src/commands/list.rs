//! List command implementation.
//!
//! Prints the merged search path, one expanded entry per line in search
//! order, or the full entries as JSON.

use crate::error::CliError;
use crate::utils::{load_manager, print_json, GlobalOptions};
use clap::Args;
use std::io::Write;
use winpath::PathEntry;

/// List the merged search path.
#[derive(Args)]
pub struct ListCommand {
    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Prefix each entry with the scope it is saved to
    #[arg(long)]
    pub scope: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, manager) = load_manager(global)?;
        let entries = manager.entries()?;

        if self.json {
            return print_json(&entries);
        }
        format_as_lines(&entries, self.scope)
    }
}

fn format_as_lines(entries: &[PathEntry], with_scope: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for entry in entries {
        if with_scope {
            writeln!(handle, "{}\t{}", entry.scope, entry.path)?;
        } else {
            writeln!(handle, "{}", entry.path)?;
        }
    }

    Ok(())
}
