//! Deploy command entry point

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use apexdeploy::application::{DeployOptions, DeployUseCase};
use apexdeploy::config;
use apexdeploy::infrastructure::fs::resolve_input_path;
use apexdeploy::{DeployError, ProcessRunner, SfdxCommands};

use crate::cli::Cli;
use crate::ui::output::{print_config_source, print_config_warnings, ConsoleEventSink};

/// Exit code for a missing artifact file
pub const EXIT_NOT_FOUND: i32 = 1;

/// Run the deploy and return the process exit code.
///
/// Fatal errors (bad config, malformed JSON, filesystem or spawn failures)
/// come back as `Err`.
pub fn cmd_deploy(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::discover(cli.config.as_deref(), &cwd)?;
    print_config_warnings(&loaded.warnings);
    print_config_source(loaded.source.as_deref(), cli.verbose);
    let config = loaded.config;

    let target_org = cli.target_org.clone().or(config.sfdx.target_org);
    let sfdx = SfdxCommands::new(config.sfdx.bin).with_target_org(target_org);

    let mut options = DeployOptions::new(resolve_input_path(&cli.json_file));
    if cli.run_tests {
        options = options.with_tests(cli.wait.unwrap_or(config.tests.wait));
    }

    // Ctrl+C reaches the sfdx child through the process group; the flag
    // only stops further steps.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl+C handler")?;

    let use_case = DeployUseCase::new(ProcessRunner::new(), sfdx)
        .with_events(Box::new(ConsoleEventSink::new(cli.verbose)))
        .with_interrupt(interrupted);

    match use_case.execute(&options) {
        Ok(outcome) => Ok(outcome.exit_code),
        Err(err @ DeployError::ArtifactFileNotFound { .. }) => {
            eprintln!("{}", err);
            Ok(EXIT_NOT_FOUND)
        }
        Err(err) => Err(err.into()),
    }
}
