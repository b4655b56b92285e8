//! Dependency wiring
//!
//! Builds the concrete ports once per invocation. This is the dependency
//! injection point for the application: use cases only ever see the
//! borrowed [`WorkflowContext`].

use std::path::Path;

use is_terminal::IsTerminal;

use crate::application::WorkflowContext;
use crate::config::{discover_project_root, Config, ConfigWarning};
use crate::domain::ports::{ConfirmationProvider, WorkflowEventSink};
use crate::domain::value_objects::ProjectDescriptor;
use crate::error::{ManagerError, ManagerResult};
use crate::infrastructure::{
    InterruptFlag, JsonLedgerStore, LocalFs, ProcessGateway, StdinConfirmer, TerminalConfirmer,
};

/// Concrete collaborators for one project
pub struct Workspace {
    pub config: Config,
    pub project: ProjectDescriptor,
    pub ledger: JsonLedgerStore,
    pub gateway: ProcessGateway,
    pub fs: LocalFs,
    pub confirm: Box<dyn ConfirmationProvider>,
    pub interrupt: InterruptFlag,
    pub warnings: Vec<ConfigWarning>,
}

impl Workspace {
    /// Resolve the project root and load its configuration.
    ///
    /// `project_dir` is taken relative to `cwd`; otherwise the root is
    /// discovered from `cwd`. The root is canonicalized so that `.` and `..`
    /// name the real directory, and it must yield a non-empty project name.
    pub fn open(
        project_dir: Option<&Path>,
        cwd: &Path,
        interrupt: InterruptFlag,
    ) -> ManagerResult<Self> {
        let root = match project_dir {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => cwd.join(dir),
            None => discover_project_root(cwd),
        };
        let root = std::fs::canonicalize(&root).map_err(|e| {
            ManagerError::InvalidArgument(format!(
                "cannot open project directory {}: {}",
                root.display(),
                e
            ))
        })?;
        if project_name_of(&root).is_empty() {
            return Err(ManagerError::InvalidArgument(format!(
                "cannot derive a project name from {}",
                root.display()
            )));
        }
        let (config, warnings) = Config::load_for_project(&root)?;
        Ok(Self::with_config(&root, config, warnings, interrupt))
    }

    pub fn with_config(
        root: &Path,
        config: Config,
        warnings: Vec<ConfigWarning>,
        interrupt: InterruptFlag,
    ) -> Self {
        let project = config.descriptor(root);
        tracing::debug!(
            root = %project.root().display(),
            name = project.name(),
            "opened project"
        );
        Self {
            ledger: JsonLedgerStore::new(project.ledger_file()),
            gateway: ProcessGateway::new(config.command_timeout(), interrupt.clone()),
            interrupt,
            fs: LocalFs::new(),
            confirm: create_confirmer(),
            project,
            config,
            warnings,
        }
    }

    pub fn context<'a>(&'a self, events: &'a dyn WorkflowEventSink) -> WorkflowContext<'a> {
        WorkflowContext {
            config: &self.config,
            project: &self.project,
            ledger: &self.ledger,
            gateway: &self.gateway,
            fs: &self.fs,
            confirm: self.confirm.as_ref(),
            events,
            interrupt: &self.interrupt,
        }
    }
}

fn project_name_of(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().trim().to_string())
        .unwrap_or_default()
}

/// dialoguer prompts on a TTY, plain line reads otherwise (pipes, scripts).
pub fn create_confirmer() -> Box<dyn ConfirmationProvider> {
    if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
        Box::new(TerminalConfirmer::new())
    } else {
        Box::new(StdinConfirmer::stdio())
    }
}
