//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (artifacts, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Load, materialize, deploy, and optionally test

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutcome, DeployUseCase, EXIT_INTERRUPTED};
