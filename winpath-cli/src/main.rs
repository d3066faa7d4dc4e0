//! Main entry point for the winpath CLI.
//!
//! This is the command-line interface for inspecting and cleaning the
//! Windows executable search path:
//! - `list`: Show the merged System + User path
//! - `contains`: Check whether a directory is on the path
//! - `add`: Append a directory
//! - `clean`: Drop missing and duplicate directories
//! - `remove`: Drop directories matching a glob or regex

use clap::Parser;
use winpath_cli::cli::{Cli, Command};
use winpath_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _level = winpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        store: cli.store,
    };

    let result = match cli.command {
        Command::List(cmd) => cmd.execute(&global),
        Command::Contains(cmd) => cmd.execute(&global),
        Command::Add(cmd) => cmd.execute(&global),
        Command::Clean(cmd) => cmd.execute(&global),
        Command::Remove(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
