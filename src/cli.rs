//! CLI Argument Parsing

use std::path::PathBuf;

use clap::Parser;

/// apexdeploy - deploy generated Apex artifacts with sfdx
#[derive(Parser, Debug)]
#[command(name = "apexdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to JSON file containing the generated code artifacts
    pub json_file: PathBuf,

    /// Execute local tests after deployment
    #[arg(long)]
    pub run_tests: bool,

    /// Minutes to wait for the test run when --run-tests is set [default: 30]
    #[arg(long, value_name = "MINUTES")]
    pub wait: Option<u32>,

    /// Org alias passed to sfdx as --targetusername
    #[arg(long, value_name = "ALIAS")]
    pub target_org: Option<String>,

    /// Configuration file (defaults to ./apexdeploy.toml, then the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
