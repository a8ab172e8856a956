use std::path::{Path, PathBuf};

use super::home::apexdeploy_home_dir;

/// Expand a leading `~` to the home directory. Other paths pass through.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match apexdeploy_home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Resolve a CLI path argument: expand `~`, then make it absolute.
///
/// Symlinks are resolved when the path exists; a missing path is still
/// returned (absolute) so the caller can report it.
pub fn resolve_input_path(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    if let Ok(canonical) = expanded.canonicalize() {
        return canonical;
    }
    std::path::absolute(&expanded).unwrap_or(expanded)
}
