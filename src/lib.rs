//! bffctl - lifecycle manager for bff-template projects
//!
//! bffctl scaffolds a local web-app template, deploys it to a managed
//! container platform and tears every created resource down again. Progress
//! is recorded in a JSON ledger under `manager/.manifest` so partial failures
//! can be diagnosed and re-run safely.
//!
//! ## Layers
//!
//! - `domain` - ledger entities, project identity, text rewrites, ports
//! - `application` - init / deploy / clean workflows and the service-account manager
//! - `infrastructure` - JSON ledger, child-process gateway, prompts, local fs
//! - `presentation` - CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use error::{ErrorKind, ManagerError, ManagerResult};
