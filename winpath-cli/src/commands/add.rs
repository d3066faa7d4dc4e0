//! Add command implementation.

use crate::error::CliError;
use crate::utils::{load_manager, GlobalOptions};
use clap::Args;
use winpath::Scope;

/// Append a directory to the search path.
#[derive(Args)]
pub struct AddCommand {
    /// Directory to append, stored exactly as given
    pub path: String,

    /// Save to the System scope instead of the configured default
    #[arg(long)]
    pub system: bool,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// Adding a path that is already present is not an error.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.path.trim().is_empty() {
            return Err(CliError::InvalidArguments("path cannot be empty".into()));
        }

        let (config, mut manager) = load_manager(global)?;
        let scope = if self.system {
            Scope::System
        } else {
            config.new_entry_scope()
        };

        if !manager.add(&self.path, Some(scope))? {
            if !global.quiet {
                eprintln!("{} is already on the search path", self.path);
            }
            return Ok(());
        }

        manager.update()?;
        if !global.quiet {
            eprintln!("Added {} to the {scope} path", self.path);
        }
        Ok(())
    }
}
