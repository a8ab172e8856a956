//! apexdeploy - deploy generated Apex artifacts through the sfdx CLI
//!
//! Reads a JSON artifact file (`apex`, `tests`, `metadata`), writes it into a
//! temporary `force-app/main/default` source tree, runs
//! `sfdx force:source:deploy` against it and, on request,
//! `sfdx force:apex:test:run`. The first non-zero exit code from `sfdx` is
//! the run's exit code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployUseCase};
pub use config::Config;
pub use domain::{ArtifactSet, CodeEntry};
pub use error::{DeployError, DeployResult};
pub use infrastructure::{materialize, MaterializeSummary, ProcessRunner, SfdxCommands};
