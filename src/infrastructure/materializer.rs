//! Artifact materializer
//!
//! Writes an `ArtifactSet` into the source layout `sfdx` deploys from:
//!
//! ```text
//! <target>/
//!   classes/<Name>.cls
//!   classes/<Name>.cls-meta.xml
//!   artifacts-metadata.json
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{class_descriptor, ArtifactSet, API_VERSION};
use crate::error::{DeployError, DeployResult};

/// Subdirectory holding class files
pub const CLASSES_DIR: &str = "classes";
/// Extension of class content files
pub const CLASS_EXTENSION: &str = "cls";
/// Extension of class descriptor files
pub const DESCRIPTOR_EXTENSION: &str = "cls-meta.xml";
/// Aggregate metadata file at the target root
pub const METADATA_FILE: &str = "artifacts-metadata.json";

/// What a materialization run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeSummary {
    /// Content files written (a recurring name counts each time)
    pub classes: usize,
    /// Descriptor files written
    pub descriptors: usize,
    /// Entries skipped for a missing name or content
    pub skipped: usize,
    /// Every path written, in write order
    pub written: Vec<PathBuf>,
}

/// Write `artifacts` under `target_dir`.
///
/// Entries are processed `apex` first, then `tests`; a name seen twice gets
/// its content overwritten but its descriptor written only once.
pub fn materialize(
    artifacts: &ArtifactSet,
    target_dir: &Path,
) -> DeployResult<MaterializeSummary> {
    let classes_dir = target_dir.join(CLASSES_DIR);
    std::fs::create_dir_all(&classes_dir).map_err(|e| DeployError::io(&classes_dir, e))?;

    let descriptor = class_descriptor(API_VERSION);
    let mut summary = MaterializeSummary::default();
    let mut described: HashSet<&str> = HashSet::new();

    for entry in artifacts.entries() {
        let Some((name, content)) = entry.complete() else {
            summary.skipped += 1;
            continue;
        };

        let class_path = classes_dir.join(format!("{name}.{CLASS_EXTENSION}"));
        write_file(&class_path, content)?;
        summary.classes += 1;
        summary.written.push(class_path);

        if described.insert(name) {
            let meta_path = classes_dir.join(format!("{name}.{DESCRIPTOR_EXTENSION}"));
            write_file(&meta_path, &descriptor)?;
            summary.descriptors += 1;
            summary.written.push(meta_path);
        }
    }

    let metadata_path = target_dir.join(METADATA_FILE);
    let metadata = serde_json::to_string_pretty(&artifacts.metadata_or_empty())
        .map_err(|e| DeployError::io(&metadata_path, e.into()))?;
    write_file(&metadata_path, &metadata)?;
    summary.written.push(metadata_path);

    Ok(summary)
}

fn write_file(path: &Path, content: &str) -> DeployResult<()> {
    std::fs::write(path, content).map_err(|e| DeployError::io(path, e))
}
