//! Configuration module for apexdeploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APEXDEPLOY_*)
//! 3. `--config PATH`, else `./apexdeploy.toml`, else `~/.config/apexdeploy/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, load_with_warnings, user_config_path, with_env_overrides, with_env_overrides_from,
    ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, SfdxConfig, TestsConfig, DEFAULT_SFDX_BIN, DEFAULT_WAIT_MINUTES};
