//! Deploy Event Port
//!
//! Observable progress of a deploy run, used for verbose diagnostics.

use std::fmt;
use std::path::PathBuf;

/// The two external steps of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Deploy,
    Tests,
}

impl fmt::Display for DeployStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deploy => write!(f, "deploy"),
            Self::Tests => write!(f, "tests"),
        }
    }
}

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Artifact file parsed
    Loaded {
        path: PathBuf,
        apex_count: usize,
        test_count: usize,
    },

    /// A file was written into the source tree
    FileWritten { path: PathBuf },

    /// Source tree is ready
    Materialized {
        root: PathBuf,
        classes: usize,
        descriptors: usize,
        skipped: usize,
    },

    /// External command about to run
    CommandStarted { step: DeployStep, argv: Vec<String> },

    /// External command finished
    CommandFinished { step: DeployStep, code: i32 },

    /// Run finished with this exit code
    Completed { exit_code: i32 },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Whether per-file events are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
