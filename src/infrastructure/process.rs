//! Process-backed `CommandRunner`
//!
//! Runs the command to completion with both output streams captured, then
//! echoes them (trimmed) so the user still sees the tool's output. Stdin is
//! inherited, so the tool can still prompt.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{CommandOutput, CommandRunner};
use crate::error::{DeployError, DeployResult};

/// Exit code reported when the process ended without one (killed by a signal)
pub const NO_EXIT_CODE: i32 = 1;

/// Runs commands as child processes and echoes their captured output
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    echo: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self { echo: true }
    }

    /// A runner that captures without echoing
    pub fn quiet() -> Self {
        Self { echo: false }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> DeployResult<CommandOutput> {
        let (program, args) = argv.split_first().ok_or(DeployError::EmptyCommand)?;

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| DeployError::CommandSpawn {
                program: program.clone(),
                source,
            })?;

        let result = to_command_output(output);
        if self.echo {
            echo(&result);
        }
        Ok(result)
    }
}

fn to_command_output(output: Output) -> CommandOutput {
    CommandOutput {
        code: output.status.code().unwrap_or(NO_EXIT_CODE),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Print captured streams, trimmed, skipping empty ones
pub fn echo(output: &CommandOutput) {
    let stdout = output.stdout.trim();
    if !stdout.is_empty() {
        println!("{}", stdout);
    }
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        eprintln!("{}", stderr);
    }
}
