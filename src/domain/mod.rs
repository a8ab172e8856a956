//! Domain Layer
//!
//! Artifact types and the descriptor template, without I/O.
//!
//! ## Structure
//!
//! - `artifacts` - The parsed artifact collection (`ArtifactSet`, `CodeEntry`)
//! - `descriptor` - The class descriptor template
//! - `ports/` - Interface definitions for infrastructure

pub mod artifacts;
pub mod descriptor;
pub mod ports;

pub use artifacts::{ArtifactSet, CodeEntry};
pub use descriptor::{class_descriptor, API_VERSION};
