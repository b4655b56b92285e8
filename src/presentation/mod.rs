//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring concrete infrastructure into a `WorkflowContext`
//!
//! Terminal rendering lives with the binary (`src/ui`).
//!
//! ## Usage
//!
//! ```ignore
//! use bffctl::presentation::factory::Workspace;
//!
//! let ws = Workspace::open(None, &cwd, interrupt)?;
//! let ctx = ws.context(&sink);
//! let report = InitUseCase::new(ctx).execute(InitOptions::default())?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ConfigArgs, ServiceAccountAction};
pub use factory::Workspace;
