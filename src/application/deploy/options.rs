//! Deploy Options

/// Options for the deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Target region; the configured default region when `None`
    pub region: Option<String>,
}

impl DeployOptions {
    pub fn with_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
        }
    }
}
