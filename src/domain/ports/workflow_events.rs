//! Workflow Event Port
//!
//! Observable progress for init, deploy and clean. The binary renders these
//! to the terminal; tests record them.

/// Event emitted while a workflow runs
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    /// Workflow started
    Started { workflow: &'static str, steps: usize },

    /// A named step began
    StepStarted { step: &'static str, label: String },

    /// A step finished successfully
    StepCompleted { step: &'static str },

    /// A step did not run
    StepSkipped { step: &'static str, reason: String },

    /// A step failed (fail-fast workflows stop after this)
    StepFailed { step: &'static str, error: String },

    /// Key/value summary shown before the operator confirms
    Plan {
        title: String,
        entries: Vec<(String, String)>,
    },

    /// Informational line
    Note { message: String },

    /// Something the operator should read before answering a prompt
    Warning { message: String },

    /// Workflow finished
    Finished {
        workflow: &'static str,
        completed: usize,
        failed: usize,
    },
}

/// Trait for receiving workflow events
pub trait WorkflowEventSink {
    fn on_event(&self, event: WorkflowEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WorkflowEventSink for NoopEventSink {
    fn on_event(&self, _event: WorkflowEvent) {}
}
