//! Contains command implementation.

use crate::error::CliError;
use crate::utils::{load_manager, GlobalOptions};
use clap::Args;

/// Exit successfully if a directory is on the search path.
#[derive(Args)]
pub struct ContainsCommand {
    /// Directory to look for (variable references are expanded)
    pub path: String,
}

impl ContainsCommand {
    /// Execute the contains command.
    ///
    /// Exits with code 1 when the path is absent.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, manager) = load_manager(global)?;

        if manager.contains(&self.path)? {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not on the search path",
                self.path
            )))
        }
    }
}
