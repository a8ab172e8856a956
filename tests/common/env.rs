//! Test environment for isolated apexdeploy runs.
//!
//! Each `TestEnv` owns:
//! - a working directory (cwd for the binary, holds artifact and config files)
//! - a home directory (isolates the user config lookup)
//! - a private `TMPDIR`, so tests can check the run cleaned up after itself
//! - a fake `sfdx` script that logs its arguments and snapshots the source tree

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::io::Write;
use std::process::{Child, Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the apexdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

const FAKE_SFDX: &str = r#"#!/bin/sh
log="$FAKE_SFDX_DIR/calls.log"
echo "$*" >> "$log"
case "$1" in
  force:source:deploy)
    pwd > "$FAKE_SFDX_DIR/deploy.cwd"
    rm -rf "$FAKE_SFDX_DIR/snapshot"
    cp -R "$3" "$FAKE_SFDX_DIR/snapshot"
    if [ "${FAKE_SFDX_READ_STDIN:-0}" = 1 ]; then
      cat > "$FAKE_SFDX_DIR/stdin.log"
    fi
    sleep "${FAKE_SFDX_DEPLOY_SLEEP:-0}"
    echo "  deploy stdout  "
    echo "deploy stderr" >&2
    exit "${FAKE_SFDX_DEPLOY_EXIT:-0}"
    ;;
  force:apex:test:run)
    echo "test stdout"
    exit "${FAKE_SFDX_TEST_EXIT:-0}"
    ;;
esac
exit 0
"#;

/// Isolated environment with a fake `sfdx`
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    pub tmp_dir: TempDir,
    /// Holds the fake script and everything it records
    pub sfdx_dir: TempDir,
    deploy_exit: i32,
    test_exit: i32,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            work_dir: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            tmp_dir: TempDir::new().unwrap(),
            sfdx_dir: TempDir::new().unwrap(),
            deploy_exit: 0,
            test_exit: 0,
        };

        let script = env.sfdx_path();
        std::fs::write(&script, FAKE_SFDX).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        env
    }

    pub fn with_deploy_exit(mut self, code: i32) -> Self {
        self.deploy_exit = code;
        self
    }

    pub fn with_test_exit(mut self, code: i32) -> Self {
        self.test_exit = code;
        self
    }

    pub fn sfdx_path(&self) -> PathBuf {
        self.sfdx_dir.path().join("sfdx")
    }

    /// Write a file into the working directory and return its path
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_artifacts(&self, json: &str) -> PathBuf {
        self.write_file("artifacts.json", json)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .output()
            .expect("Failed to execute apexdeploy");
        to_result(output)
    }

    /// Run with `input` on stdin
    pub fn run_with_stdin(
        &self,
        args: &[&str],
        env_vars: &[(&str, &str)],
        input: &str,
    ) -> TestResult {
        let mut child = self
            .command(args, env_vars)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn apexdeploy");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .unwrap();
        to_result(child.wait_with_output().unwrap())
    }

    /// Start the binary without waiting for it
    pub fn spawn_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Child {
        self.command(args, env_vars)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn apexdeploy")
    }

    /// Wait until `file` exists under the fake sfdx directory
    pub fn wait_for_sfdx_file(&self, file: &str, timeout: std::time::Duration) -> bool {
        let path = self.sfdx_dir.path().join(file);
        let start = std::time::Instant::now();
        while start.elapsed() < timeout {
            if path.exists() {
                return true;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        false
    }

    pub fn read_sfdx_file(&self, file: &str) -> String {
        std::fs::read_to_string(self.sfdx_dir.path().join(file))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", file, e))
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_apexdeploy"));
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env_remove("APEXDEPLOY_TARGET_ORG")
            .env_remove("APEXDEPLOY_WAIT")
            .env_remove("GITHUB_ACTIONS")
            .env("APEXDEPLOY_SFDX_BIN", self.sfdx_path())
            .env("APEXDEPLOY_TEST_HOME", self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TMPDIR", self.tmp_dir.path())
            .env("FAKE_SFDX_DIR", self.sfdx_dir.path())
            .env("FAKE_SFDX_DEPLOY_EXIT", self.deploy_exit.to_string())
            .env("FAKE_SFDX_TEST_EXIT", self.test_exit.to_string());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Argument lines the fake sfdx received, one per invocation
    pub fn sfdx_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.sfdx_dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Directory the deploy command ran in
    pub fn deploy_cwd(&self) -> PathBuf {
        let raw = std::fs::read_to_string(self.sfdx_dir.path().join("deploy.cwd")).unwrap();
        PathBuf::from(raw.trim())
    }

    /// Copy of the source tree as the deploy command saw it
    pub fn snapshot_path(&self, relative: &str) -> PathBuf {
        self.sfdx_dir.path().join("snapshot").join(relative)
    }

    pub fn read_snapshot(&self, relative: &str) -> String {
        std::fs::read_to_string(self.snapshot_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read snapshot {}: {}", relative, e))
    }

    /// Sorted file names under the snapshot's `classes/`
    pub fn snapshot_classes(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.snapshot_path("classes"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Entries left in the private TMPDIR
    pub fn leftover_temp_entries(&self) -> Vec<PathBuf> {
        list(self.tmp_dir.path())
    }
}

fn list(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| entries.flatten().map(|e| e.path()).collect())
        .unwrap_or_default()
}

pub fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
