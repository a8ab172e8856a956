//! Home directory resolution with test isolation support.
//!
//! `dirs::home_dir()` ignores `HOME` on Windows, so tests point
//! `APEXDEPLOY_TEST_HOME` at a temp directory instead.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const APEXDEPLOY_TEST_HOME_VAR: &str = "APEXDEPLOY_TEST_HOME";

/// Home directory, honoring `APEXDEPLOY_TEST_HOME` first.
pub fn apexdeploy_home_dir() -> Option<PathBuf> {
    std::env::var(APEXDEPLOY_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
