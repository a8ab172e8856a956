//! Filesystem helpers
//!
//! Path resolution for user-supplied paths and the home directory lookup
//! used for `~` expansion and the user config location.

mod home;
mod paths;

pub use home::{apexdeploy_home_dir, APEXDEPLOY_TEST_HOME_VAR};
pub use paths::{expand_home, resolve_input_path};
