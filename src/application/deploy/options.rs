//! Deploy Options

use std::path::PathBuf;

use crate::config::DEFAULT_WAIT_MINUTES;

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Artifact JSON file (already resolved to an absolute path by the CLI)
    pub artifact_file: PathBuf,
    /// Run local tests after a successful deploy
    pub run_tests: bool,
    /// Minutes `sfdx` waits for the test run
    pub wait_minutes: u32,
}

impl DeployOptions {
    pub fn new(artifact_file: impl Into<PathBuf>) -> Self {
        Self {
            artifact_file: artifact_file.into(),
            run_tests: false,
            wait_minutes: DEFAULT_WAIT_MINUTES,
        }
    }

    pub fn with_tests(mut self, wait_minutes: u32) -> Self {
        self.run_tests = true;
        self.wait_minutes = wait_minutes;
        self
    }
}
