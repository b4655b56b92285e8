//! Deploy Use Case

use std::path::PathBuf;

use serde_json::json;

use super::options::DeployOptions;
use super::result::DeployResult;
use crate::application::service_account::ServiceAccountManager;
use crate::application::tools::{CloudPlatform, CodeHost, ContainerTool, RuntimeGuard};
use crate::application::workflow::{FailurePolicy, StepRunner};
use crate::application::WorkflowContext;
use crate::domain::ports::{ConfirmStyle, FileSystem, FsError, WorkflowEvent};
use crate::domain::services::{rewrite_pipeline, PipelineValues};
use crate::domain::value_objects::{ContentHash, StateFlag};
use crate::error::{ManagerError, ManagerResult};

/// Temporary key file written to the project root during the secret step
pub const KEY_FILE_NAME: &str = "sa-key.json";

const STEPS: usize = 5;

/// Deletes the credential file when dropped, on success and failure alike.
struct KeyFileGuard<'a> {
    fs: &'a dyn FileSystem,
    path: PathBuf,
}

impl Drop for KeyFileGuard<'_> {
    fn drop(&mut self) {
        match self.fs.remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "removed key file"),
            Err(FsError::NotFound(_)) => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove key file")
            }
        }
    }
}

/// Builds, ships and wires up the project on the cloud platform.
///
/// Fail-fast: the first failing step aborts the rest. Flags set by earlier
/// steps stay set; nothing is unwound.
pub struct DeployUseCase<'a> {
    ctx: WorkflowContext<'a>,
}

impl<'a> DeployUseCase<'a> {
    pub fn new(ctx: WorkflowContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn execute(&self, options: &DeployOptions) -> ManagerResult<DeployResult> {
        let ctx = self.ctx;
        let project = ctx.project;
        let region = options
            .region
            .clone()
            .unwrap_or_else(|| ctx.config.platform.default_region.clone());
        let image_url = project.image_url();

        if ctx.ledger.flag(StateFlag::Deployed)? {
            ctx.warn("Project is already deployed");
            if !ctx
                .confirm
                .confirm("Do you want to re-deploy?", ConfirmStyle::YesNo)
            {
                return Err(ManagerError::declined("re-deployment"));
            }
        }

        ctx.events.on_event(WorkflowEvent::Plan {
            title: "Deployment Configuration".to_string(),
            entries: vec![
                ("Project ID".to_string(), project.cloud_project_id().to_string()),
                ("Service Name".to_string(), project.name().to_string()),
                ("Region".to_string(), region.clone()),
                ("Image URL".to_string(), image_url.clone()),
                ("Service Account".to_string(), project.service_account_email()),
            ],
        });
        if !ctx
            .confirm
            .confirm("Do you want to continue?", ConfirmStyle::YesNo)
        {
            return Err(ManagerError::declined("deployment"));
        }

        tracing::info!(project = project.name(), %region, "starting deployment");
        // Declared before the runner so the runtime is stopped on every exit path
        let mut runtime: Option<RuntimeGuard<'a>> = None;
        let mut runner = StepRunner::new(
            "deploy",
            FailurePolicy::FailFast,
            STEPS,
            ctx.events,
            ctx.interrupt,
        );

        runner.run("update_cicd", "Updating CI/CD configuration", || {
            self.update_cicd()
        })?;
        runner.run("docker_build", "Building and pushing container image", || {
            self.build_and_push(&image_url, &mut runtime)
        })?;
        runner.run("deploy_cloud_run", "Deploying to Cloud Run", || {
            self.deploy_service(&image_url, &region)
        })?;
        runner.run("setup_service_account", "Setting up service account", || {
            ServiceAccountManager::new(ctx).setup().map(|_| ())
        })?;
        runner.run("setup_github_secrets", "Setting up GitHub secrets", || {
            self.setup_github_secrets()
        })?;

        Ok(DeployResult {
            report: runner.finish(),
            region,
            image_url,
        })
    }

    fn update_cicd(&self) -> ManagerResult<()> {
        let project = self.ctx.project;
        let path = project.cicd_file();
        if !self.ctx.fs.exists(&path) {
            return Err(ManagerError::MissingFile { path });
        }

        let secret_name = project.secret_name();
        let image_url = project.image_url();
        let content = self.ctx.fs.read(&path)?;
        let rewritten = rewrite_pipeline(
            &content,
            PipelineValues {
                secret_name: &secret_name,
                service_name: project.name(),
                image_url: &image_url,
            },
        );
        self.ctx.fs.write(&path, &rewritten)?;

        self.ctx.ledger.log_operation(
            "update_cicd",
            json!({
                "service_account": secret_name,
                "image_url": image_url,
                "digest": ContentHash::from_content(&rewritten).as_str(),
            }),
        )?;
        Ok(())
    }

    fn build_and_push(
        &self,
        image_url: &str,
        runtime: &mut Option<RuntimeGuard<'a>>,
    ) -> ManagerResult<()> {
        let ctx = self.ctx;
        let container = ContainerTool::new(ctx.gateway, &ctx.config.runtime.runtime_program);
        if ctx.config.runtime.manage_container_runtime {
            *runtime = Some(container.start_runtime()?);
        }

        container.build(image_url, ctx.project.root())?;
        container.push(image_url)?;

        ctx.ledger.set_flag(StateFlag::DockerBuilt)?;
        ctx.ledger
            .log_operation("docker_build", json!({ "image_url": image_url }))?;
        Ok(())
    }

    fn deploy_service(&self, image_url: &str, region: &str) -> ManagerResult<()> {
        let project = self.ctx.project;
        CloudPlatform::new(self.ctx.gateway, project.cloud_project_id())
            .deploy_service(project.name(), image_url, region)?;

        self.ctx.ledger.set_flag(StateFlag::Deployed)?;
        self.ctx.ledger.set_config("region", json!(region))?;
        self.ctx.ledger.log_operation(
            "deploy_cloud_run",
            json!({ "region": region, "service_name": project.name() }),
        )?;
        Ok(())
    }

    fn setup_github_secrets(&self) -> ManagerResult<()> {
        let project = self.ctx.project;
        let secret_name = project.secret_name();
        let key = KeyFileGuard {
            fs: self.ctx.fs,
            path: project.root().join(KEY_FILE_NAME),
        };

        ServiceAccountManager::new(self.ctx).issue_credential(&key.path)?;
        let credential = self.ctx.fs.read(&key.path)?;
        CodeHost::new(self.ctx.gateway, project.root())
            .set_secret(&secret_name, credential.into_bytes())?;
        drop(key);

        self.ctx.ledger.set_flag(StateFlag::GithubSecretsConfigured)?;
        self.ctx
            .ledger
            .log_operation("setup_github_secrets", json!({ "secret_name": secret_name }))?;
        Ok(())
    }
}
