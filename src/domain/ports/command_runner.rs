//! CommandRunner port - abstraction over external process execution
//!
//! The deploy flow only needs an exit code and the captured text streams,
//! so anything that can produce those (a real process, a recording mock)
//! can stand behind this trait.

use std::path::Path;

use crate::error::DeployResult;

/// Captured result of one external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code reported by the process
    pub code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs an argument vector synchronously in a working directory
///
/// Implementations must not treat a non-zero exit code as an error;
/// interpreting the code is the caller's job.
pub trait CommandRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> DeployResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, argv: &[String], cwd: &Path) -> DeployResult<CommandOutput> {
        (**self).run(argv, cwd)
    }
}
