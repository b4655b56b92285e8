//! Configuration module for bffctl
//!
//! Precedence, highest first:
//! 1. CLI flags (e.g. `deploy --region`)
//! 2. Environment variables (BFFCTL_*)
//! 3. Project config (manager/config.toml)
//! 4. Built-in defaults
//!
//! The resolved [`Config`] is built once at startup and passed by reference
//! into every workflow.

mod loader;
mod types;

pub use loader::{discover_project_root, ConfigWarning, CONFIG_RELATIVE_PATH};
pub use types::{ColorMode, Config, OutputConfig, PlatformConfig, RuntimeConfig, TemplateConfig};
