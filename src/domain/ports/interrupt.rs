//! Operator interrupt port
//!
//! The Ctrl+C handler only records the request while somebody is going to
//! poll for it. Workflows open a hold around each step so that cleanup
//! guards (key files, the container runtime) unwind before the process
//! exits.

/// Read side of the operator's Ctrl+C.
pub trait InterruptSignal {
    /// The operator asked to stop.
    fn is_requested(&self) -> bool;

    /// Enter a section that polls [`InterruptSignal::is_requested`] before
    /// it returns. While a hold is open an interrupt does not end the
    /// process directly.
    fn hold(&self);

    /// Leave a section entered with [`InterruptSignal::hold`].
    fn release(&self);
}

/// Signal that never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupted;

impl InterruptSignal for NeverInterrupted {
    fn is_requested(&self) -> bool {
        false
    }

    fn hold(&self) {}

    fn release(&self) {}
}
