//! Deploy Result

use crate::application::workflow::WorkflowReport;

/// Result of a completed deploy
#[derive(Debug, Clone)]
pub struct DeployResult {
    pub report: WorkflowReport,
    /// Region the service now runs in
    pub region: String,
    pub image_url: String,
}
