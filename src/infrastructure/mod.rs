//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - JSON ledger store
//! - `gateway/` - Child-process command gateway with timeout and interrupt
//! - `confirm/` - Operator prompts (line-based stdin, dialoguer terminal)

pub mod confirm;
pub mod fs;
pub mod gateway;
pub mod repositories;

// Re-export for convenience
pub use confirm::{StdinConfirmer, TerminalConfirmer};
pub use fs::LocalFs;
pub use gateway::{InterruptFlag, ProcessGateway};
pub use repositories::JsonLedgerStore;
