//! Domain Layer
//!
//! Pure lifecycle logic with no I/O of its own.
//!
//! ## Structure
//!
//! - `entities/` - The ledger and its operation records
//! - `value_objects/` - Project descriptor, IAM roles, state flags
//! - `services/` - Template placeholder rewriting
//! - `ports/` - Interfaces the infrastructure layer implements
//!   (ledger store, command gateway, confirmation, events, file system)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
