//! Clean Options

/// Options for the clean use case
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Keep the local tree and reset the ledger instead of deleting it
    pub skip_local: bool,
}

impl CleanOptions {
    /// Value recorded in the `cleanup` operation
    pub fn mode(&self) -> &'static str {
        if self.skip_local {
            "skip_local"
        } else {
            "full"
        }
    }
}
