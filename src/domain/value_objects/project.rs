//! Project descriptor - names and paths derived from the project directory
//!
//! Everything here is a pure function of the project root and two platform
//! constants (cloud project id and image registry host). Nothing is
//! persisted; the descriptor is rebuilt on every run.

use std::path::{Path, PathBuf};

/// Relative location of the ledger file under the project root
pub const LEDGER_RELATIVE_PATH: &str = "manager/.manifest";

/// Derived identity of the project being managed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    root: PathBuf,
    name: String,
    cloud_project_id: String,
    registry: String,
}

impl ProjectDescriptor {
    pub fn new(
        root: impl Into<PathBuf>,
        cloud_project_id: impl Into<String>,
        registry: impl Into<String>,
    ) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self {
            root,
            name,
            cloud_project_id: cloud_project_id.into(),
            registry: registry.into(),
        }
    }

    /// Project name: the root directory's name, lower-cased
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cloud_project_id(&self) -> &str {
        &self.cloud_project_id
    }

    /// Short id of the trust principal (`<name>-sa`)
    pub fn service_account_id(&self) -> String {
        format!("{}-sa", self.name)
    }

    pub fn service_account_email(&self) -> String {
        format!(
            "{}@{}.iam.gserviceaccount.com",
            self.service_account_id(),
            self.cloud_project_id
        )
    }

    /// Repository secret holding the principal's key (`MY_APP_SA`)
    pub fn secret_name(&self) -> String {
        format!("{}_SA", self.name.to_uppercase().replace('-', "_"))
    }

    /// Registry coordinate of the container image
    pub fn image_url(&self) -> String {
        format!("{}/{}/{}", self.registry, self.cloud_project_id, self.name)
    }

    pub fn cicd_file(&self) -> PathBuf {
        self.root.join(".github").join("workflows").join("cicd.yaml")
    }

    pub fn pyproject_file(&self) -> PathBuf {
        self.root.join("pyproject.toml")
    }

    pub fn makefile(&self) -> PathBuf {
        self.root.join("makefile")
    }

    pub fn frontend_dir(&self) -> PathBuf {
        self.root.join("frontend")
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }

    pub fn ledger_file(&self) -> PathBuf {
        self.root.join(LEDGER_RELATIVE_PATH)
    }

    /// Where a fresh template clone lands after local cleanup
    pub fn parent_dir(&self) -> Option<&Path> {
        self.root.parent()
    }
}
