//! Workflow context - the ports and config a use case borrows

use crate::config::Config;
use crate::domain::ports::{
    CommandGateway, ConfirmationProvider, FileSystem, InterruptSignal, LedgerStore,
    WorkflowEventSink,
};
use crate::domain::value_objects::ProjectDescriptor;

/// Everything a workflow needs, borrowed for one invocation.
///
/// Built once by the presentation factory and passed by reference; nothing
/// here is global.
#[derive(Clone, Copy)]
pub struct WorkflowContext<'a> {
    pub config: &'a Config,
    pub project: &'a ProjectDescriptor,
    pub ledger: &'a dyn LedgerStore,
    pub gateway: &'a dyn CommandGateway,
    pub fs: &'a dyn FileSystem,
    pub confirm: &'a dyn ConfirmationProvider,
    pub events: &'a dyn WorkflowEventSink,
    pub interrupt: &'a dyn InterruptSignal,
}

impl WorkflowContext<'_> {
    pub(crate) fn note(&self, message: impl Into<String>) {
        self.events.on_event(crate::domain::ports::WorkflowEvent::Note {
            message: message.into(),
        });
    }

    pub(crate) fn warn(&self, message: impl Into<String>) {
        self.events.on_event(crate::domain::ports::WorkflowEvent::Warning {
            message: message.into(),
        });
    }
}
