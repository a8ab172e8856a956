//! Artifact JSON file loading

use std::path::Path;

use crate::domain::ArtifactSet;
use crate::error::{DeployError, DeployResult};

/// Read and parse the artifact file at `path`.
pub fn load_artifacts(path: &Path) -> DeployResult<ArtifactSet> {
    if !path.exists() {
        return Err(DeployError::ArtifactFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| DeployError::io(path, e))?;
    ArtifactSet::from_json_str(&content).map_err(|source| DeployError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
