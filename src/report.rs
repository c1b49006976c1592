//! Per-driver timing reports.

use crate::timing::StepTiming;
use serde::Serialize;
use std::time::Duration;

/// Collected step timings for one library driver run.
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    /// Library name, e.g. `"serde_json"`.
    pub library: &'static str,
    /// One entry per timed step, in execution order.
    pub steps: Vec<StepTiming>,
}

impl DriverReport {
    pub fn new(library: &'static str, steps: Vec<StepTiming>) -> Self {
        Self { library, steps }
    }

    /// Total elapsed time across all steps.
    pub fn total(&self) -> Duration {
        self.steps.iter().map(|step| step.elapsed).sum()
    }
}
