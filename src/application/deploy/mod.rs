//! Deploy Module
//!
//! Orchestrates one deploy run.
//!
//! ## Structure
//!
//! - `options` - Per-run inputs (`DeployOptions`)
//! - `result` - Run outcome (`DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use apexdeploy::application::deploy::{DeployOptions, DeployUseCase};
//! use apexdeploy::infrastructure::{ProcessRunner, SfdxCommands};
//!
//! let use_case = DeployUseCase::new(ProcessRunner::new(), SfdxCommands::default());
//! let outcome = use_case.execute(&DeployOptions::new("artifacts.json"))?;
//! std::process::exit(outcome.exit_code);
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployOutcome;
pub use use_case::{DeployUseCase, EXIT_INTERRUPTED, SOURCE_ROOT};
