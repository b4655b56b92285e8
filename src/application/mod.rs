//! Application Layer
//!
//! Use cases that orchestrate the lifecycle flows.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain text rewriting rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InitUseCase` - Local scaffold (env file, metadata, frontend, backend)
//! - `DeployUseCase` - Pipeline rewrite, image, compute service, principal, secret
//! - `CleanUseCase` - Best-effort teardown of every created resource
//! - `ServiceAccountManager` - Trust principal lifecycle and roles
//!
//! ## Shared pieces
//!
//! - `WorkflowContext` - Borrowed ports and config handed to every use case
//! - `StepRunner` - Emits step events and applies the failure policy
//! - `tools` - Command builders for each external collaborator

pub mod clean;
mod context;
pub mod deploy;
pub mod init;
pub mod inspect;
pub mod service_account;
pub mod tools;
mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use clean::{CleanOptions, CleanReport, CleanUseCase};
pub use context::WorkflowContext;
pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use init::{InitOptions, InitUseCase};
pub use service_account::{CreateOutcome, ServiceAccountManager};
pub use workflow::{FailurePolicy, StepOutcome, StepRecord, StepRunner, WorkflowReport};
