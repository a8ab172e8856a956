//! Repository implementations

mod artifact_file;

pub use artifact_file::load_artifacts;
