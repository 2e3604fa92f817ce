//! Install report: one outcome per named step

use std::fmt;
use std::path::{Path, PathBuf};

/// Named sub-steps of a profile installation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    ProfileDir,
    Loader,
    Agent,
    Api,
    Descriptor,
}

impl InstallStep {
    /// Whether a failure of this step is tolerated in non-strict mode
    #[allow(dead_code)]
    pub fn is_auxiliary(self) -> bool {
        matches!(self, InstallStep::Agent | InstallStep::Api)
    }
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstallStep::ProfileDir => "profile directory",
            InstallStep::Loader => "loader",
            InstallStep::Agent => "agent",
            InstallStep::Api => "api",
            InstallStep::Descriptor => "profile descriptor",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Failed { reason: String },
}

impl StepOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, StepOutcome::Done)
    }
}

/// Result of a profile installation that did not abort
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub profile_name: String,
    pub profile_dir: PathBuf,
    steps: Vec<(InstallStep, StepOutcome)>,
}

impl InstallReport {
    pub(crate) fn new(profile_name: impl Into<String>, profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_name: profile_name.into(),
            profile_dir: profile_dir.into(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, step: InstallStep, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    pub fn steps(&self) -> &[(InstallStep, StepOutcome)] {
        &self.steps
    }

    #[allow(dead_code)]
    pub fn outcome(&self, step: InstallStep) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    /// True when every recorded step succeeded
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|(_, outcome)| outcome.is_done())
    }

    pub fn failures(&self) -> impl Iterator<Item = (InstallStep, &str)> {
        self.steps.iter().filter_map(|(step, outcome)| match outcome {
            StepOutcome::Failed { reason } => Some((*step, reason.as_str())),
            StepOutcome::Done => None,
        })
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.profile_file("json")
    }

    pub fn jar_path(&self) -> PathBuf {
        self.profile_file("jar")
    }

    fn profile_file(&self, extension: &str) -> PathBuf {
        self.profile_dir
            .join(format!("{}.{extension}", self.profile_name))
    }
}
