//! Domain Value Objects
//!
//! Immutable value types derived from the project and platform settings.

mod hash;
mod project;
mod role;
mod state_flag;

pub use hash::ContentHash;
pub use project::{ProjectDescriptor, LEDGER_RELATIVE_PATH};
pub use role::{Role, RoleSet};
pub use state_flag::StateFlag;
