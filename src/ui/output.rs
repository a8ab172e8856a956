use std::path::Path;

use apexdeploy::config::ConfigWarning;
use apexdeploy::domain::ports::{DeployEvent, DeployEventSink};

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn print_config_source(source: Option<&Path>, verbose: u8) {
    if verbose == 0 {
        return;
    }
    match source {
        Some(path) => eprintln!("[config] {}", path.display()),
        None => eprintln!("[config] built-in defaults"),
    }
}

/// Writes deploy progress to stderr, gated by `-v` count.
///
/// `-v` shows steps and command lines; `-vv` also lists every written file.
pub struct ConsoleEventSink {
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    fn render(event: &DeployEvent) -> String {
        match event {
            DeployEvent::Loaded {
                path,
                apex_count,
                test_count,
            } => format!(
                "[load] {} ({} classes, {} tests)",
                path.display(),
                apex_count,
                test_count
            ),
            DeployEvent::FileWritten { path } => format!("  + {}", path.display()),
            DeployEvent::Materialized {
                root,
                classes,
                descriptors,
                skipped,
            } => {
                let mut line = format!(
                    "[write] {} class files, {} descriptors under {}",
                    classes,
                    descriptors,
                    root.display()
                );
                if *skipped > 0 {
                    line.push_str(&format!(" ({} incomplete entries skipped)", skipped));
                }
                line
            }
            DeployEvent::CommandStarted { step, argv } => {
                format!("[{}] $ {}", step, argv.join(" "))
            }
            DeployEvent::CommandFinished { step, code } => {
                format!("[{}] exit code {}", step, code)
            }
            DeployEvent::Completed { exit_code } => format!("[done] exit code {}", exit_code),
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if self.verbose == 0 {
            return;
        }
        eprintln!("{}", Self::render(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose >= 2
    }
}
