//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The infrastructure layer provides concrete implementations.

pub mod command_gateway;
pub mod confirmation;
pub mod file_system;
pub mod interrupt;
pub mod ledger_store;
pub mod workflow_events;

pub use command_gateway::{CommandGateway, CommandOutput, CommandSpec, GatewayError, OutputMode};
pub use confirmation::{ConfirmationProvider, ConfirmStyle, TypedAnswer};
pub use file_system::{FileSystem, FsError, FsResult};
pub use interrupt::{InterruptSignal, NeverInterrupted};
pub use ledger_store::{LedgerError, LedgerResult, LedgerStore};
pub use workflow_events::{NoopEventSink, WorkflowEvent, WorkflowEventSink};
