//! Clean command implementation.
//!
//! Removes entries that are not existing directories and entries that
//! repeat an earlier one, then writes the result back. Each removal is
//! printed as `<reason>\t<path>` where the reason is `dup` or `notfound`.

use crate::error::CliError;
use crate::utils::{load_manager, print_json, GlobalOptions};
use clap::Args;
use std::io::Write;
use winpath::{FsProbe, Removal};

/// Remove missing and duplicate directories.
#[derive(Args)]
pub struct CleanCommand {
    /// Show what would be removed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print removals as JSON
    #[arg(long)]
    pub json: bool,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, mut manager) = load_manager(global)?;

        let removals = if self.dry_run {
            manager.plan_clean(&FsProbe)?
        } else {
            let removals = manager.clean()?;
            let result = manager.update()?;
            log::debug!("Updated scopes: {:?}", result.written);
            removals
        };

        if self.json {
            return print_json(&removals);
        }
        print_removals(&removals)?;

        if !global.quiet {
            let verb = if self.dry_run { "Would remove" } else { "Removed" };
            eprintln!("{verb} {} entries", removals.len());
        }
        Ok(())
    }
}

fn print_removals(removals: &[Removal]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for removal in removals {
        writeln!(handle, "{}\t{}", removal.reason, removal.path)?;
    }
    Ok(())
}
