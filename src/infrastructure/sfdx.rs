//! `sfdx` command lines
//!
//! Builds the two argument vectors the deploy flow runs. Nothing here
//! executes anything.

use std::path::Path;

/// Test level passed to `force:apex:test:run`
pub const TEST_LEVEL: &str = "RunLocalTests";

/// Argument builder for one `sfdx` executable and optional target org
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfdxCommands {
    bin: String,
    target_org: Option<String>,
}

impl SfdxCommands {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            target_org: None,
        }
    }

    pub fn with_target_org(mut self, target_org: Option<String>) -> Self {
        self.target_org = target_org.filter(|alias| !alias.is_empty());
        self
    }

    /// `sfdx force:source:deploy --sourcepath <source_root> --json`
    pub fn deploy(&self, source_root: &Path) -> Vec<String> {
        let mut argv = vec![
            self.bin.clone(),
            "force:source:deploy".to_string(),
            "--sourcepath".to_string(),
            source_root.display().to_string(),
            "--json".to_string(),
        ];
        self.push_target_org(&mut argv);
        argv
    }

    /// `sfdx force:apex:test:run -l RunLocalTests --wait <minutes> --resultformat human`
    pub fn run_tests(&self, wait_minutes: u32) -> Vec<String> {
        let mut argv = vec![
            self.bin.clone(),
            "force:apex:test:run".to_string(),
            "-l".to_string(),
            TEST_LEVEL.to_string(),
            "--wait".to_string(),
            wait_minutes.to_string(),
            "--resultformat".to_string(),
            "human".to_string(),
        ];
        self.push_target_org(&mut argv);
        argv
    }

    fn push_target_org(&self, argv: &mut Vec<String>) {
        if let Some(alias) = &self.target_org {
            argv.push("--targetusername".to_string());
            argv.push(alias.clone());
        }
    }
}

impl Default for SfdxCommands {
    fn default() -> Self {
        Self::new("sfdx")
    }
}
