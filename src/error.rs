//! Error types for bffctl
//!
//! One `thiserror` enum covers every failure a workflow can surface. Callers
//! branch on [`ManagerError::kind`] rather than on message text.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::ports::command_gateway::GatewayError;
use crate::domain::ports::ledger_store::LedgerError;

/// Result type alias for bffctl operations
pub type ManagerResult<T> = Result<T, ManagerError>;

/// Coarse classification of a [`ManagerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ToolNotFound,
    ExternalCommandFailed,
    Timeout,
    CorruptLedger,
    PreconditionDeclined,
    OperatorAbort,
    Interrupted,
    Local,
}

/// Main error type for bffctl operations
#[derive(Error, Debug)]
pub enum ManagerError {
    /// External executable is not installed or not on PATH
    #[error("'{program}' is not installed or not available in PATH")]
    ToolNotFound { program: String },

    /// External command exited non-zero
    #[error("'{program}' failed{}{}", exit_suffix(.code), output_suffix(.output))]
    ExternalCommandFailed {
        program: String,
        code: Option<i32>,
        output: String,
    },

    /// External command exceeded the configured wait
    #[error("'{program}' did not finish within {}s", .after.as_secs())]
    Timeout { program: String, after: Duration },

    /// Ledger file exists but cannot be read or parsed
    #[error("ledger at {path} is corrupt: {message}")]
    CorruptLedger { path: PathBuf, message: String },

    /// Operator declined a confirmation prompt
    #[error("{what} cancelled")]
    PreconditionDeclined { what: String },

    /// Operator typed the abort sentinel
    #[error("aborted by user")]
    OperatorAbort,

    /// Ctrl+C while a workflow was running
    #[error("operation cancelled by user")]
    Interrupted,

    /// A file the step depends on is missing
    #[error("file not found: {path}")]
    MissingFile { path: PathBuf },

    /// Tool configuration could not be parsed
    #[error("invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Bad command-line value
    #[error("{0}")]
    InvalidArgument(String),

    /// `config --get` for a key the ledger does not hold
    #[error("Config key '{key}' not found")]
    ConfigKeyNotFound { key: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

fn output_suffix(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl ManagerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManagerError::ToolNotFound { .. } => ErrorKind::ToolNotFound,
            ManagerError::ExternalCommandFailed { .. } => ErrorKind::ExternalCommandFailed,
            ManagerError::Timeout { .. } => ErrorKind::Timeout,
            ManagerError::CorruptLedger { .. } => ErrorKind::CorruptLedger,
            ManagerError::PreconditionDeclined { .. } => ErrorKind::PreconditionDeclined,
            ManagerError::OperatorAbort => ErrorKind::OperatorAbort,
            ManagerError::Interrupted => ErrorKind::Interrupted,
            ManagerError::MissingFile { .. }
            | ManagerError::InvalidConfig { .. }
            | ManagerError::InvalidArgument(_)
            | ManagerError::ConfigKeyNotFound { .. }
            | ManagerError::Io(_) => ErrorKind::Local,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Interrupted => 130,
            _ => 1,
        }
    }

    pub fn declined(what: impl Into<String>) -> Self {
        ManagerError::PreconditionDeclined { what: what.into() }
    }
}

impl From<GatewayError> for ManagerError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::ToolNotFound { program } => ManagerError::ToolNotFound { program },
            GatewayError::Failed {
                program,
                code,
                output,
            } => ManagerError::ExternalCommandFailed {
                program,
                code,
                output,
            },
            GatewayError::Timeout { program, after } => ManagerError::Timeout { program, after },
            GatewayError::Interrupted { .. } => ManagerError::Interrupted,
            GatewayError::Io { program, source } => ManagerError::Io(std::io::Error::new(
                source.kind(),
                format!("{}: {}", program, source),
            )),
        }
    }
}

impl From<LedgerError> for ManagerError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Corrupt { path, message } => ManagerError::CorruptLedger { path, message },
            LedgerError::Io(e) => ManagerError::Io(e),
        }
    }
}
