//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProjectDescriptor;
use crate::error::ManagerResult;

use super::loader::{self, ConfigWarning};

/// Cloud platform constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,

    #[serde(default = "default_region")]
    pub default_region: String,

    #[serde(default = "default_registry")]
    pub registry: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            default_region: default_region(),
            registry: default_registry(),
        }
    }
}

fn default_project_id() -> String {
    "marketing-innovation-450013".to_string()
}

fn default_region() -> String {
    "europe-west4".to_string()
}

fn default_registry() -> String {
    "gcr.io".to_string()
}

/// Upstream template the project was created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Clone URL used to re-materialize the project after local cleanup
    #[serde(default = "default_template_repository")]
    pub repository: String,

    /// Name baked into the template's metadata files
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repository: default_template_repository(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_template_repository() -> String {
    "https://github.com/achsaf6/bff-template.git".to_string()
}

fn default_placeholder() -> String {
    "bff-template".to_string()
}

/// External process behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Start and stop the container runtime around image builds
    #[serde(default = "default_true")]
    pub manage_container_runtime: bool,

    #[serde(default = "default_runtime_program")]
    pub runtime_program: String,

    /// Upper bound for a single external command; 0 waits forever
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            manage_container_runtime: true,
            runtime_program: default_runtime_program(),
            command_timeout_secs: default_command_timeout(),
        }
    }
}

fn default_runtime_program() -> String {
    "colima".to_string()
}

fn default_command_timeout() -> u64 {
    1800
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ManagerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ManagerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config (if present) with environment overrides applied.
    pub fn load_for_project(project_root: &Path) -> ManagerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root)
    }

    /// Apply environment variable overrides (BFFCTL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Timeout for one external command, `None` when disabled.
    pub fn command_timeout(&self) -> Option<Duration> {
        match self.runtime.command_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Derived names and paths for the project at `root`.
    pub fn descriptor(&self, root: &Path) -> ProjectDescriptor {
        ProjectDescriptor::new(root, &self.platform.project_id, &self.platform.registry)
    }
}
