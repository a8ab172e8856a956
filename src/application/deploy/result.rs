//! Deploy Outcome

use crate::domain::ports::DeployStep;
use crate::infrastructure::MaterializeSummary;

/// Result of a deploy run that got as far as materializing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Exit code to report: the first failing step's code, else 0
    pub exit_code: i32,
    /// External steps that ran, in order
    pub steps: Vec<DeployStep>,
    /// What was written before the external steps ran
    pub materialized: MaterializeSummary,
}

impl DeployOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn ran(&self, step: DeployStep) -> bool {
        self.steps.contains(&step)
    }
}
