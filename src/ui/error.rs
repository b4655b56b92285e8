//! Top-level error rendering for the binary

use bffctl::config::CONFIG_RELATIVE_PATH;
use bffctl::domain::value_objects::LEDGER_RELATIVE_PATH;
use bffctl::{ErrorKind, ManagerError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Message printed when the operator presses Ctrl+C
pub const INTERRUPTED_MESSAGE: &str = "Operation cancelled by user";

/// Exit status for an error that reached `main`
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ManagerError>()
        .map(ManagerError::exit_code)
        .unwrap_or(1)
}

fn install_hint(program: &str) -> String {
    match program {
        "gcloud" => "Install the Google Cloud SDK and run 'gcloud auth login'".to_string(),
        "gh" => "Install the GitHub CLI and run 'gh auth login'".to_string(),
        "docker" => "Install Docker and make sure the daemon is reachable".to_string(),
        "colima" => format!(
            "Install colima, or set runtime.manage_container_runtime = false in {}",
            CONFIG_RELATIVE_PATH
        ),
        "npm" => "Install Node.js (npm ships with it)".to_string(),
        "uv" => "Install uv: https://docs.astral.sh/uv/".to_string(),
        other => format!("Install '{}' and make sure it is on PATH", other),
    }
}

fn format_manager_error(err: &ManagerError, ui: &UiContext) -> String {
    let block = match err {
        ManagerError::PreconditionDeclined { .. } | ManagerError::OperatorAbort => {
            return format!("{} Aborted: {}\n", Icon::Warning.colored(ui.color, ui.unicode), err);
        }
        ManagerError::Interrupted => return format!("\n{}\n", INTERRUPTED_MESSAGE),
        ManagerError::ConfigKeyNotFound { .. } => return format!("{}\n", err),
        ManagerError::ToolNotFound { program } => {
            ErrorBlock::new(err.to_string()).with_fix(install_hint(program))
        }
        ManagerError::ExternalCommandFailed {
            program,
            code,
            output,
        } => {
            let status = match code {
                Some(code) => format!("exit code {}", code),
                None => "a signal".to_string(),
            };
            ErrorBlock::new(format!("'{}' failed with {}", program, status))
                .with_output(output)
                .with_fix(format!(
                    "Fix the problem above and re-run; completed steps are recorded in {}",
                    LEDGER_RELATIVE_PATH
                ))
        }
        ManagerError::Timeout { .. } => ErrorBlock::new(err.to_string()).with_fix(format!(
            "Raise runtime.command_timeout_secs in {} or set BFFCTL_COMMAND_TIMEOUT (0 disables)",
            CONFIG_RELATIVE_PATH
        )),
        ManagerError::CorruptLedger { path, .. } => ErrorBlock::new(err.to_string())
            .with_fix(format!("Repair or delete {} and re-run", path.display())),
        ManagerError::InvalidConfig { .. } => {
            ErrorBlock::new(err.to_string()).with_fix("Fix the TOML syntax and re-run")
        }
        ManagerError::MissingFile { .. } => ErrorBlock::new(err.to_string())
            .with_fix("Make sure the project was created from the bff-template repository"),
        ManagerError::InvalidArgument(_) | ManagerError::Io(_) => {
            ErrorBlock::new(err.to_string())
        }
    };
    block.render(ui.color, ui.unicode)
}

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    if let Some(manager) = err.downcast_ref::<ManagerError>() {
        return format_manager_error(manager, ui);
    }
    ErrorBlock::new(format!("{:#}", err)).render(ui.color, ui.unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if let Some(manager) = err.downcast_ref::<ManagerError>() {
        tracing::debug!(kind = ?manager.kind(), "command failed");
        if manager.kind() == ErrorKind::Interrupted {
            // plain stdout line, matching the Ctrl+C handler
            print!("{}", format_manager_error(manager, ui));
            return;
        }
    }
    eprint!("{}", format_error(err, ui));
}
