//! Fault-isolated page initialization.
//!
//! Each component initializes independently: a failing step is logged and
//! recorded, and the remaining steps still run.

use crate::error::PageResult;

/// Outcome of one init step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Ready,
    Skipped(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub steps: Vec<(&'static str, StepStatus)>,
}

impl InitReport {
    pub fn ready_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|(_, status)| *status == StepStatus::Ready)
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.steps.iter().filter_map(|(name, status)| match status {
            StepStatus::Skipped(reason) => Some((*name, reason.as_str())),
            StepStatus::Ready => None,
        })
    }

    pub fn status(&self, name: &str) -> Option<&StepStatus> {
        self.steps
            .iter()
            .find(|(step, _)| *step == name)
            .map(|(_, status)| status)
    }
}

/// Named init step
pub type InitStep<'a> = (&'static str, Box<dyn FnOnce() -> PageResult<()> + 'a>);

/// Build a named init step.
pub fn step<'a>(name: &'static str, run: impl FnOnce() -> PageResult<()> + 'a) -> InitStep<'a> {
    (name, Box::new(run))
}

/// Run every step in order, isolating failures.
pub fn init_isolated(steps: Vec<InitStep<'_>>) -> InitReport {
    let mut report = InitReport::default();
    for (name, step) in steps {
        let status = match step() {
            Ok(()) => {
                tracing::debug!(step = name, "Initialized");
                StepStatus::Ready
            }
            Err(e) => {
                tracing::warn!(step = name, "Skipped: {}", e);
                StepStatus::Skipped(e.to_string())
            }
        };
        report.steps.push((name, status));
    }
    tracing::info!(
        ready = report.ready_count(),
        total = report.steps.len(),
        "Page initialized"
    );
    report
}
