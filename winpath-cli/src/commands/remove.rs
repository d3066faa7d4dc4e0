//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{load_manager, print_json, GlobalOptions};
use clap::Args;
use std::io::Write;
use winpath::PathPattern;

/// Remove directories matching a pattern.
///
/// Globs ignore case and treat `\` literally: `C:\PROGRAM*` removes every
/// entry under `C:\Program Files` and `C:\Program Files (x86)`.
#[derive(Args)]
pub struct RemoveCommand {
    /// Glob (or regular expression with --regex) matched against expanded entries
    pub pattern: String,

    /// Treat the pattern as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Show what would be removed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print removed paths as JSON
    #[arg(long)]
    pub json: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Compile before touching the store.
        let pattern = PathPattern::parse(&self.pattern, self.regex)?;
        let (_config, mut manager) = load_manager(global)?;

        let removed = if self.dry_run {
            manager.matching(&pattern)?
        } else {
            let removed = manager.remove_matching(&pattern)?;
            manager.update()?;
            removed
        };

        if self.json {
            return print_json(&removed);
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for path in &removed {
            writeln!(handle, "{path}")?;
        }

        if removed.is_empty() && !global.quiet {
            eprintln!("No entries match {pattern}");
        }
        Ok(())
    }
}
