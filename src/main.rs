//! apexdeploy CLI
//!
//! Usage: apexdeploy <JSON_FILE> [--run-tests] [--wait MINUTES]
//!
//! Exit codes: 0 on success, 1 when the artifact file is missing or a fatal
//! error occurs, otherwise the exit code of the failing sfdx step.

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let code = match commands::deploy::cmd_deploy(&cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err);
            1
        }
    };

    std::process::exit(code);
}
