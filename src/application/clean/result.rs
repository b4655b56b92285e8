//! Clean Result

use crate::application::workflow::WorkflowReport;

/// Outcome of every clean phase
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub report: WorkflowReport,
    /// The ledger was reset to its canonical empty shape
    pub ledger_reset: bool,
    /// The local tree was deleted
    pub local_removed: bool,
}

impl CleanReport {
    /// No phase failed
    pub fn is_complete(&self) -> bool {
        self.report.is_success()
    }
}
