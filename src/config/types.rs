//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DeployResult;

use super::loader;

/// Executable invoked when nothing else is configured
pub const DEFAULT_SFDX_BIN: &str = "sfdx";
/// Minutes `sfdx` waits for a test run unless `--wait` says otherwise
pub const DEFAULT_WAIT_MINUTES: u32 = 30;

/// `[sfdx]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfdxConfig {
    #[serde(default = "default_bin")]
    pub bin: String,

    /// Org alias passed as `--targetusername`
    #[serde(default)]
    pub target_org: Option<String>,
}

impl Default for SfdxConfig {
    fn default() -> Self {
        Self {
            bin: default_bin(),
            target_org: None,
        }
    }
}

fn default_bin() -> String {
    DEFAULT_SFDX_BIN.to_string()
}

/// `[tests]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsConfig {
    #[serde(default = "default_wait")]
    pub wait: u32,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            wait: default_wait(),
        }
    }
}

fn default_wait() -> u32 {
    DEFAULT_WAIT_MINUTES
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sfdx: SfdxConfig,

    #[serde(default)]
    pub tests: TestsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeployResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }
}
