//! Clean Use Case

use serde_json::json;

use super::options::CleanOptions;
use super::result::CleanReport;
use crate::application::service_account::ServiceAccountManager;
use crate::application::tools::{CloudPlatform, CodeHost, ContainerTool, Toolchain};
use crate::application::workflow::{FailurePolicy, StepRunner};
use crate::application::WorkflowContext;
use crate::domain::ports::{ConfirmStyle, TypedAnswer};
use crate::domain::value_objects::StateFlag;
use crate::error::{ManagerError, ManagerResult};

const STEPS: usize = 6;

/// Tears the project down.
///
/// Once the operator has typed the project name, every phase is attempted
/// regardless of earlier failures. Only an interrupt stops the sequence.
pub struct CleanUseCase<'a> {
    ctx: WorkflowContext<'a>,
}

impl<'a> CleanUseCase<'a> {
    pub fn new(ctx: WorkflowContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn execute(&self, options: CleanOptions) -> ManagerResult<CleanReport> {
        let ctx = self.ctx;
        self.confirm_project_name()?;

        tracing::info!(project = ctx.project.name(), mode = options.mode(), "starting cleanup");
        ctx.ledger
            .log_operation("cleanup", json!({ "type": options.mode() }))?;
        let ledger = ctx.ledger.read_all()?;

        let mut runner = StepRunner::new(
            "clean",
            FailurePolicy::BestEffort,
            STEPS,
            ctx.events,
            ctx.interrupt,
        );

        runner.run("delete_repository", "Deleting GitHub repository", || {
            self.delete_repository()
        })?;
        runner.run("remove_containers", "Removing Docker resources", || {
            self.remove_containers()
        })?;

        if ledger.flag(StateFlag::Deployed) {
            let region = ledger
                .config_str("region")
                .unwrap_or(ctx.config.platform.default_region.as_str())
                .to_string();
            runner.run("delete_cloud_run_service", "Deleting Cloud Run service", || {
                CloudPlatform::new(ctx.gateway, ctx.project.cloud_project_id())
                    .delete_service(ctx.project.name(), &region)
            })?;
        } else {
            runner.skip("delete_cloud_run_service", "not deployed");
        }

        if ledger.flag(StateFlag::ServiceAccountCreated) {
            runner.run("delete_service_account", "Deleting service account", || {
                ServiceAccountManager::new(ctx).try_delete()?
            })?;
        } else {
            runner.skip("delete_service_account", "not created");
        }

        let mut ledger_reset = false;
        let mut local_removed = false;
        if options.skip_local {
            ctx.note("Local cleanup skipped");
            ledger_reset = runner
                .run("reset_ledger", "Resetting ledger", || Ok(ctx.ledger.reset()?))?
                .is_some();
        } else if self.confirm_local_removal() {
            local_removed = runner
                .run("remove_local", "Removing local repository", || {
                    Ok(ctx.fs.remove_dir_all(ctx.project.root())?)
                })?
                .is_some();
            if local_removed {
                runner.run("restore_template", "Cloning fresh template", || {
                    self.restore_template()
                })?;
            } else {
                runner.skip("restore_template", "local tree was not removed");
            }
        } else {
            runner.skip("remove_local", "declined by operator");
        }

        Ok(CleanReport {
            report: runner.finish(),
            ledger_reset,
            local_removed,
        })
    }

    /// Loop until the project name is typed or the abort sentinel is given.
    fn confirm_project_name(&self) -> ManagerResult<()> {
        let name = self.ctx.project.name();
        self.ctx.warn(
            "This will delete the entire project, including:\n  \
             - GitHub repository\n  \
             - Docker images and containers\n  \
             - GCP Service Account\n  \
             - GCP Cloud Run service\n  \
             - Local repository",
        );
        self.ctx.note(format!(
            "To confirm, please type the project name: {}\nType 'q' or 'x' to abort.",
            name
        ));

        loop {
            match self.ctx.confirm.type_to_confirm("Project name", name) {
                TypedAnswer::Matched => return Ok(()),
                TypedAnswer::Abort => return Err(ManagerError::OperatorAbort),
                TypedAnswer::Mismatch(_) => self
                    .ctx
                    .warn("Project name does not match. Try again or type 'q' or 'x' to abort."),
            }
        }
    }

    fn confirm_local_removal(&self) -> bool {
        self.ctx.warn(format!(
            "This will delete: {}\nThis action cannot be undone!",
            self.ctx.project.root().display()
        ));
        self.ctx
            .confirm
            .confirm("Are you absolutely sure?", ConfirmStyle::ExplicitYes)
    }

    fn delete_repository(&self) -> ManagerResult<()> {
        let host = CodeHost::new(self.ctx.gateway, self.ctx.project.root());
        let repository = host.repository_name()?;
        host.delete_repository(&repository)
    }

    fn remove_containers(&self) -> ManagerResult<()> {
        let ctx = self.ctx;
        let container = ContainerTool::new(ctx.gateway, &ctx.config.runtime.runtime_program);
        let image = ctx.project.image_url();
        let ids = container.containers_for(&image)?;
        container.stop_containers(&ids)?;
        container.remove_image(&image)
    }

    fn restore_template(&self) -> ManagerResult<()> {
        let project = self.ctx.project;
        let parent = project.parent_dir().ok_or_else(|| {
            ManagerError::InvalidArgument(format!(
                "{} has no parent directory",
                project.root().display()
            ))
        })?;
        let destination = parent.join(project.name());
        Toolchain::new(self.ctx.gateway).git_clone(
            &self.ctx.config.template.repository,
            &destination,
            parent,
        )?;
        self.ctx
            .note(format!("Template cloned to {}", destination.display()));
        Ok(())
    }
}
