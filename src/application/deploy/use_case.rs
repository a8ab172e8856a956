//! Deploy Use Case
//!
//! 1. Load the artifact file
//! 2. Materialize it into a temporary sfdx source tree
//! 3. Run `sfdx force:source:deploy`
//! 4. Optionally run `sfdx force:apex:test:run`
//!
//! The temporary directory is owned by `execute` and removed when it
//! returns, on success and on every error path. An interrupt flag set
//! by the Ctrl+C handler stops the run between steps so that removal
//! still happens.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use crate::domain::ports::{
    CommandRunner, DeployEvent, DeployEventSink, DeployStep, NoopEventSink,
};
use crate::domain::ArtifactSet;
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::{load_artifacts, materialize, SfdxCommands};

use super::options::DeployOptions;
use super::result::DeployOutcome;

/// Source root inside the temporary directory
pub const SOURCE_ROOT: [&str; 3] = ["force-app", "main", "default"];

/// Exit code of an interrupted run (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// Deploy use case, parameterized by how commands are run
pub struct DeployUseCase<R: CommandRunner> {
    runner: R,
    sfdx: SfdxCommands,
    events: Box<dyn DeployEventSink>,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<R: CommandRunner> DeployUseCase<R> {
    pub fn new(runner: R, sfdx: SfdxCommands) -> Self {
        Self {
            runner,
            sfdx,
            events: Box::new(NoopEventSink),
            interrupted: None,
        }
    }

    pub fn with_events(mut self, events: Box<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Stop before the next step once `flag` is set
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    /// Execute one deploy run.
    ///
    /// A missing artifact file is `DeployError::ArtifactFileNotFound` and is
    /// detected before any temporary directory exists. Non-zero exits from
    /// `sfdx` are not errors; they become `DeployOutcome::exit_code`.
    pub fn execute(&self, options: &DeployOptions) -> DeployResult<DeployOutcome> {
        let artifacts = load_artifacts(&options.artifact_file)?;
        self.events.on_event(DeployEvent::Loaded {
            path: options.artifact_file.clone(),
            apex_count: artifacts.apex.len(),
            test_count: artifacts.tests.len(),
        });

        let tmp = tempfile::Builder::new()
            .prefix("apexdeploy-")
            .tempdir()
            .map_err(|e| DeployError::io(std::env::temp_dir(), e))?;

        self.execute_in(&tmp, &artifacts, options)
    }

    fn execute_in(
        &self,
        tmp: &TempDir,
        artifacts: &ArtifactSet,
        options: &DeployOptions,
    ) -> DeployResult<DeployOutcome> {
        let tmp_root = tmp.path();
        let src_root = source_root(tmp_root);

        let summary = materialize(artifacts, &src_root)?;
        if self.events.wants_detailed_events() {
            for path in &summary.written {
                self.events.on_event(DeployEvent::FileWritten { path: path.clone() });
            }
        }
        self.events.on_event(DeployEvent::Materialized {
            root: src_root.clone(),
            classes: summary.classes,
            descriptors: summary.descriptors,
            skipped: summary.skipped,
        });

        let mut outcome = DeployOutcome {
            materialized: summary,
            ..Default::default()
        };

        if self.is_interrupted() {
            return Ok(self.finish(outcome, EXIT_INTERRUPTED));
        }

        let code = self.run_step(DeployStep::Deploy, &self.sfdx.deploy(&src_root), tmp_root)?;
        outcome.steps.push(DeployStep::Deploy);
        if let Some(code) = self.stop_code(code) {
            return Ok(self.finish(outcome, code));
        }

        if options.run_tests {
            let argv = self.sfdx.run_tests(options.wait_minutes);
            let code = self.run_step(DeployStep::Tests, &argv, tmp_root)?;
            outcome.steps.push(DeployStep::Tests);
            if let Some(code) = self.stop_code(code) {
                return Ok(self.finish(outcome, code));
            }
        }

        Ok(self.finish(outcome, 0))
    }

    fn run_step(&self, step: DeployStep, argv: &[String], cwd: &Path) -> DeployResult<i32> {
        self.events.on_event(DeployEvent::CommandStarted {
            step,
            argv: argv.to_vec(),
        });
        let output = self.runner.run(argv, cwd)?;
        self.events.on_event(DeployEvent::CommandFinished {
            step,
            code: output.code,
        });
        Ok(output.code)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Exit code to stop with after a step, if the run should not continue
    fn stop_code(&self, code: i32) -> Option<i32> {
        if self.is_interrupted() {
            Some(EXIT_INTERRUPTED)
        } else if code != 0 {
            Some(code)
        } else {
            None
        }
    }

    fn finish(&self, mut outcome: DeployOutcome, exit_code: i32) -> DeployOutcome {
        outcome.exit_code = exit_code;
        self.events.on_event(DeployEvent::Completed { exit_code });
        outcome
    }
}

/// `<tmp>/force-app/main/default`
pub fn source_root(tmp_root: &Path) -> PathBuf {
    SOURCE_ROOT.iter().fold(tmp_root.to_path_buf(), |p, part| p.join(part))
}
