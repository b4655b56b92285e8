//! Managed compute platform and IAM commands

use std::path::Path;

use crate::domain::ports::{CommandGateway, CommandSpec};
use crate::domain::value_objects::Role;
use crate::error::ManagerResult;

pub struct CloudPlatform<'a> {
    gateway: &'a dyn CommandGateway,
    project_id: &'a str,
}

impl<'a> CloudPlatform<'a> {
    pub fn new(gateway: &'a dyn CommandGateway, project_id: &'a str) -> Self {
        Self {
            gateway,
            project_id,
        }
    }

    fn project_flag(&self) -> String {
        format!("--project={}", self.project_id)
    }

    pub fn deploy_service(&self, service: &str, image: &str, region: &str) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["run", "deploy", service])
                .arg(format!("--image={}", image))
                .arg(format!("--region={}", region))
                .arg("--platform=managed")
                .arg(self.project_flag())
                .inherit_output(),
        )?;
        Ok(())
    }

    pub fn delete_service(&self, service: &str, region: &str) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["run", "services", "delete", service])
                .arg(format!("--region={}", region))
                .arg(self.project_flag())
                .arg("--quiet"),
        )?;
        Ok(())
    }

    /// Probe: does the service account exist?
    pub fn service_account_exists(&self, email: &str) -> ManagerResult<bool> {
        Ok(self.gateway.probe(
            &CommandSpec::new("gcloud")
                .args(["iam", "service-accounts", "describe", email])
                .arg(self.project_flag()),
        )?)
    }

    pub fn create_service_account(&self, account_id: &str, display_name: &str) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["iam", "service-accounts", "create", account_id])
                .arg(format!("--display-name={}", display_name))
                .arg(self.project_flag()),
        )?;
        Ok(())
    }

    pub fn delete_service_account(&self, email: &str) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["iam", "service-accounts", "delete", email, "--quiet"])
                .arg(self.project_flag()),
        )?;
        Ok(())
    }

    pub fn add_role_binding(&self, email: &str, role: &Role) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["projects", "add-iam-policy-binding", self.project_id])
                .arg(format!("--member=serviceAccount:{}", email))
                .arg(format!("--role={}", role)),
        )?;
        Ok(())
    }

    pub fn remove_role_binding(&self, email: &str, role: &Role) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["projects", "remove-iam-policy-binding", self.project_id])
                .arg(format!("--member=serviceAccount:{}", email))
                .arg(format!("--role={}", role))
                .arg("--quiet"),
        )?;
        Ok(())
    }

    /// Write a new key for `email` to `destination`.
    pub fn create_key(&self, email: &str, destination: &Path) -> ManagerResult<()> {
        self.gateway.run(
            &CommandSpec::new("gcloud")
                .args(["iam", "service-accounts", "keys", "create"])
                .arg(destination.display().to_string())
                .arg(format!("--iam-account={}", email)),
        )?;
        Ok(())
    }
}
