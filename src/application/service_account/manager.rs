//! Service account manager

use std::path::Path;

use serde_json::json;

use crate::application::tools::CloudPlatform;
use crate::application::WorkflowContext;
use crate::domain::value_objects::{RoleSet, StateFlag};
use crate::error::{ErrorKind, ManagerResult};

/// Result of [`ServiceAccountManager::create`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Creates, binds and deletes the project's service account.
///
/// Every mutating call appends an operation record, including no-op and
/// failed deletions.
pub struct ServiceAccountManager<'a> {
    ctx: WorkflowContext<'a>,
}

impl<'a> ServiceAccountManager<'a> {
    pub fn new(ctx: WorkflowContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn email(&self) -> String {
        self.ctx.project.service_account_email()
    }

    fn cloud(&self) -> CloudPlatform<'a> {
        CloudPlatform::new(self.ctx.gateway, self.ctx.project.cloud_project_id())
    }

    pub fn exists(&self) -> ManagerResult<bool> {
        self.cloud().service_account_exists(&self.email())
    }

    /// Create the account unless the platform already has it.
    pub fn create(&self) -> ManagerResult<CreateOutcome> {
        let email = self.email();
        if self.exists()? {
            tracing::info!(%email, "service account already exists");
            self.ctx.ledger.log_operation(
                "create_service_account",
                json!({ "email": email, "status": "already_exists" }),
            )?;
            return Ok(CreateOutcome::AlreadyExists);
        }

        let display_name = format!("{} Service Account", self.ctx.project.name());
        self.cloud()
            .create_service_account(&self.ctx.project.service_account_id(), &display_name)?;
        self.ctx
            .ledger
            .log_operation("create_service_account", json!({ "email": email }))?;
        Ok(CreateOutcome::Created)
    }

    /// Delete the account. A platform failure is recorded in the ledger
    /// before it is returned.
    pub fn delete(&self) -> ManagerResult<()> {
        self.try_delete()?
    }

    /// Delete the account, handing the platform failure back as the inner
    /// result. The outer result carries interrupts and ledger errors.
    pub fn try_delete(&self) -> ManagerResult<ManagerResult<()>> {
        let email = self.email();
        match self.cloud().delete_service_account(&email) {
            Ok(()) => {
                self.ctx.ledger.log_operation(
                    "delete_service_account",
                    json!({ "email": email, "status": "deleted" }),
                )?;
                Ok(Ok(()))
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => Err(err),
            Err(err) => {
                tracing::warn!(%email, error = %err, "service account deletion failed");
                self.ctx.ledger.log_operation(
                    "delete_service_account",
                    json!({ "email": email, "status": "failed", "error": err.to_string() }),
                )?;
                Ok(Err(err))
            }
        }
    }

    /// Bind `roles` (or the default grant set) to the account.
    pub fn grant_roles(&self, roles: Option<Vec<String>>) -> ManagerResult<RoleSet> {
        let roles = RoleSet::or_default(roles, RoleSet::default_grant());
        let email = self.email();
        let cloud = self.cloud();
        for role in roles.iter() {
            tracing::debug!(%email, %role, "granting role");
            cloud.add_role_binding(&email, role)?;
        }
        self.ctx.ledger.log_operation(
            "add_permissions",
            json!({ "email": email, "roles": roles.names() }),
        )?;
        Ok(roles)
    }

    /// Remove `roles` (or the default revoke set) from the account.
    pub fn revoke_roles(&self, roles: Option<Vec<String>>) -> ManagerResult<RoleSet> {
        let roles = RoleSet::or_default(roles, RoleSet::default_revoke());
        let email = self.email();
        let cloud = self.cloud();
        for role in roles.iter() {
            tracing::debug!(%email, %role, "revoking role");
            cloud.remove_role_binding(&email, role)?;
        }
        self.ctx.ledger.log_operation(
            "remove_permissions",
            json!({ "email": email, "roles": roles.names() }),
        )?;
        Ok(roles)
    }

    /// Write a fresh key for the account to `destination`.
    pub fn issue_credential(&self, destination: &Path) -> ManagerResult<()> {
        let email = self.email();
        self.cloud().create_key(&email, destination)?;
        self.ctx.ledger.log_operation(
            "create_key",
            json!({ "email": email, "key_file": destination.display().to_string() }),
        )?;
        Ok(())
    }

    /// Create (or reuse) the account and grant the default roles. The
    /// `service_account_created` flag is set only after both succeed.
    pub fn setup(&self) -> ManagerResult<CreateOutcome> {
        let outcome = self.create()?;
        self.grant_roles(None)?;
        self.ctx.ledger.set_flag(StateFlag::ServiceAccountCreated)?;
        Ok(outcome)
    }
}
