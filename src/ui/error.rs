use std::path::Path;

use apexdeploy::DeployError;

fn error_file(err: &DeployError) -> Option<&Path> {
    match err {
        DeployError::ArtifactFileNotFound { path }
        | DeployError::InvalidJson { path, .. }
        | DeployError::Io { path, .. } => Some(path.as_path()),
        DeployError::InvalidConfig { file, .. } => Some(file.as_path()),
        DeployError::CommandSpawn { .. } | DeployError::EmptyCommand => None,
    }
}

fn fix_hint(err: &DeployError) -> Option<String> {
    match err {
        DeployError::CommandSpawn { program, .. } => Some(format!(
            "Install the Salesforce CLI or point APEXDEPLOY_SFDX_BIN / [sfdx] bin at it (tried '{}').",
            program
        )),
        DeployError::InvalidJson { .. } => {
            Some("The artifact file must be a JSON object with optional 'apex', 'tests' and 'metadata' keys.".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = err.downcast_ref::<DeployError>().and_then(fix_hint) {
        out.push_str(&format!("  Fix: {}\n", hint));
    }
    out
}

pub fn print_error(err: &anyhow::Error) {
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        let file = err.downcast_ref::<DeployError>().and_then(error_file);
        println!("{}", github_actions_annotation(&err.to_string(), file));
    }

    eprint!("{}", format_error(err));
}

fn github_actions_annotation(message: &str, file: Option<&Path>) -> String {
    let message = message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A");
    match file {
        Some(file) => format!("::error file={},title=apexdeploy::{}", file.display(), message),
        None => format!("::error title=apexdeploy::{}", message),
    }
}
