//! Service Account Module
//!
//! Lifecycle and role bindings of the project's trust principal, the
//! service account the CI pipeline deploys with.
//!
//! ## Structure
//!
//! - `manager` - `ServiceAccountManager` and `CreateOutcome`

mod manager;

pub use manager::{CreateOutcome, ServiceAccountManager};
