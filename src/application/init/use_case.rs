//! Init Use Case

use serde_json::json;

use super::options::InitOptions;
use super::scaffold;
use crate::application::tools::Toolchain;
use crate::application::workflow::{FailurePolicy, StepRunner, WorkflowReport};
use crate::application::WorkflowContext;
use crate::domain::ports::ConfirmStyle;
use crate::domain::services::rewrite_metadata_name;
use crate::domain::value_objects::StateFlag;
use crate::error::{ManagerError, ManagerResult};

const STEPS: usize = 4;

/// What the front-end step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontendOutcome {
    scaffolded: bool,
    built: bool,
}

/// Prepares a cloned template for local development.
///
/// Steps run fail-fast; each successful step appends its own record, and
/// `initialized` is set only after all of them complete.
pub struct InitUseCase<'a> {
    ctx: WorkflowContext<'a>,
}

impl<'a> InitUseCase<'a> {
    pub fn new(ctx: WorkflowContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn execute(&self, options: InitOptions) -> ManagerResult<WorkflowReport> {
        let ctx = self.ctx;
        if ctx.ledger.flag(StateFlag::Initialized)? {
            ctx.warn("Project is already initialized");
            if !ctx
                .confirm
                .confirm("Do you want to re-initialize?", ConfirmStyle::YesNo)
            {
                return Err(ManagerError::declined("re-initialization"));
            }
        }

        tracing::info!(project = ctx.project.name(), "initializing project");
        let mut runner = StepRunner::new(
            "init",
            FailurePolicy::FailFast,
            STEPS,
            ctx.events,
            ctx.interrupt,
        );

        runner.run("ensure_env_file", "Creating .env file", || self.ensure_env_file())?;
        runner.run("update_project_files", "Updating project metadata", || {
            self.update_project_files()
        })?;
        runner.run("setup_frontend", "Setting up frontend", || {
            self.setup_frontend(options.skip_frontend_build)
        })?;
        runner.run("setup_backend", "Syncing backend dependencies", || {
            self.setup_backend()
        })?;

        ctx.ledger.set_flag(StateFlag::Initialized)?;
        ctx.ledger
            .set_config("project_name", json!(ctx.project.name()))?;
        ctx.ledger.log_operation("init", json!({ "type": "local" }))?;

        Ok(runner.finish())
    }

    fn ensure_env_file(&self) -> ManagerResult<()> {
        let path = self.ctx.project.env_file();
        let created = !self.ctx.fs.exists(&path);
        self.ctx.fs.touch(&path)?;
        self.ctx.ledger.log_operation(
            "ensure_env_file",
            json!({ "path": path.display().to_string(), "created": created }),
        )?;
        Ok(())
    }

    fn update_project_files(&self) -> ManagerResult<()> {
        let project = self.ctx.project;
        let placeholder = &self.ctx.config.template.placeholder;
        let mut updated = Vec::new();

        for path in [project.pyproject_file(), project.makefile()] {
            if !self.ctx.fs.exists(&path) {
                tracing::debug!(path = %path.display(), "metadata file absent, skipping");
                continue;
            }
            let content = self.ctx.fs.read(&path)?;
            if let Some(rewritten) = rewrite_metadata_name(&content, placeholder, project.name()) {
                self.ctx.fs.write(&path, &rewritten)?;
                updated.push(path.display().to_string());
            }
        }

        self.ctx
            .ledger
            .log_operation("update_project_files", json!({ "files": updated }))?;
        Ok(())
    }

    fn setup_frontend(&self, skip_build: bool) -> ManagerResult<()> {
        let outcome = self.prepare_frontend(skip_build)?;
        self.ctx.ledger.log_operation(
            "setup_frontend",
            json!({ "scaffolded": outcome.scaffolded, "built": outcome.built }),
        )?;
        Ok(())
    }

    fn prepare_frontend(&self, skip_build: bool) -> ManagerResult<FrontendOutcome> {
        let fs = self.ctx.fs;
        let dir = self.ctx.project.frontend_dir();
        let toolchain = Toolchain::new(self.ctx.gateway);
        fs.create_dir_all(&dir)?;

        let scaffolded = !fs.exists(&dir.join("package.json"));
        if scaffolded {
            self.ctx.note("Creating Vite React app");
            for (relative, content) in scaffold::FILES {
                fs.write(&dir.join(relative), content)?;
            }

            let index = dir.join("index.html");
            if !fs.exists(&index) {
                let public_index = dir.join("public").join("index.html");
                let content = if fs.exists(&public_index) {
                    fs.read(&public_index)?
                } else {
                    scaffold::DEFAULT_INDEX_HTML.to_string()
                };
                fs.write(&index, &content)?;
            }

            self.ctx
                .note("Installing dependencies (this may take a few minutes)");
            toolchain.npm_install(&dir)?;
        } else {
            self.ctx.note("Frontend already initialized");
        }

        if !skip_build {
            toolchain.npm_build(&dir)?;
        }
        Ok(FrontendOutcome {
            scaffolded,
            built: !skip_build,
        })
    }

    fn setup_backend(&self) -> ManagerResult<()> {
        Toolchain::new(self.ctx.gateway).uv_sync(self.ctx.project.root())?;
        self.ctx.ledger.log_operation("setup_backend", json!({}))?;
        Ok(())
    }
}
