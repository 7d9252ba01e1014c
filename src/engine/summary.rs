use std::fmt;
use std::time::Duration;

use crate::domain::{Alert, AlertLevel};

/// Tally of one run, logged once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Symbols handed to the evaluator
    pub evaluated: usize,
    pub info_alerts: usize,
    pub error_alerts: usize,
    /// No data, or score within threshold
    pub quiet: usize,
    pub elapsed: Duration,
}

impl SweepSummary {
    pub fn record(&mut self, outcome: Option<&Alert>) {
        self.evaluated += 1;
        match outcome.map(Alert::level) {
            Some(AlertLevel::Info) => self.info_alerts += 1,
            Some(AlertLevel::Error) => self.error_alerts += 1,
            None => self.quiet += 1,
        }
    }

    pub fn alerts(&self) -> usize {
        self.info_alerts + self.error_alerts
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Evaluated {} symbols in {:?}: {} alerts ({} INFO, {} ERROR), {} quiet",
            self.evaluated,
            self.elapsed,
            self.alerts(),
            self.info_alerts,
            self.error_alerts,
            self.quiet
        )
    }
}
