//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Path resolution and home directory lookup
//! - `repositories/` - Artifact file loading
//! - `materializer` - Writes artifacts into the sfdx source layout
//! - `process` - `CommandRunner` backed by child processes
//! - `sfdx` - `sfdx` argument vectors

pub mod fs;
pub mod materializer;
pub mod process;
pub mod repositories;
pub mod sfdx;

// Re-export for convenience
pub use materializer::{materialize, MaterializeSummary};
pub use process::ProcessRunner;
pub use repositories::load_artifacts;
pub use sfdx::SfdxCommands;
