//! Operator interrupt flag shared between the Ctrl+C handler and the gateway

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::ports::InterruptSignal;

/// Set by the signal handler, polled while a child process or a workflow
/// step runs.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    requested: Arc<AtomicBool>,
    /// Running children plus open workflow holds
    pollers: Arc<AtomicUsize>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interrupt. Returns `true` when a child or a workflow step
    /// will notice it; `false` means nobody is polling and the caller
    /// should exit directly.
    pub fn request(&self) -> bool {
        self.requested.store(true, Ordering::SeqCst);
        self.pollers.load(Ordering::SeqCst) > 0
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    pub(crate) fn enter_child(&self) -> ChildGuard<'_> {
        self.pollers.fetch_add(1, Ordering::SeqCst);
        ChildGuard { flag: self }
    }

    fn leave(&self) {
        // saturating: an unbalanced release must not wrap around
        let _ = self
            .pollers
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }
}

impl InterruptSignal for InterruptFlag {
    fn is_requested(&self) -> bool {
        InterruptFlag::is_requested(self)
    }

    fn hold(&self) {
        self.pollers.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.leave();
    }
}

/// Clears the running marker when the child has been reaped.
pub(crate) struct ChildGuard<'a> {
    flag: &'a InterruptFlag,
}

impl Drop for ChildGuard<'_> {
    fn drop(&mut self) {
        self.flag.leave();
    }
}
