//! CommandGateway port - uniform invocation of external tools
//!
//! Every cloud, container and code-host call goes through this trait. The
//! gateway distinguishes success (exit 0), failure with captured output,
//! tool-not-found and timeout. Whether a failure aborts the workflow is the
//! caller's policy, not the gateway's.

use std::path::PathBuf;
use std::time::Duration;

/// How the child's stdout/stderr are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Capture both streams for the caller
    #[default]
    Capture,
    /// Stream directly to the operator's terminal
    Inherit,
}

/// A fully-specified external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Bytes piped to the child's stdin (stdin is closed when `None`)
    pub stdin: Option<Vec<u8>>,
    /// Per-call override of the gateway's default timeout
    pub timeout: Option<Duration>,
    pub output: OutputMode,
    /// Still runs, and is not killed, after an operator interrupt
    pub cleanup: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdin: None,
            timeout: None,
            output: OutputMode::Capture,
            cleanup: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn timeout(mut self, after: Duration) -> Self {
        self.timeout = Some(after);
        self
    }

    pub fn inherit_output(mut self) -> Self {
        self.output = OutputMode::Inherit;
        self
    }

    /// Mark a teardown command that must run even once Ctrl+C was pressed.
    pub fn cleanup(mut self) -> Self {
        self.cleanup = true;
        self
    }

    /// `program arg1 arg2` for logs and error messages
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Output of a successful invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Gateway failure
#[derive(Debug)]
pub enum GatewayError {
    /// Executable is missing from PATH
    ToolNotFound { program: String },
    /// Non-zero exit (code is `None` when killed by a signal)
    Failed {
        program: String,
        code: Option<i32>,
        output: String,
    },
    /// Did not exit within the allowed time and was killed
    Timeout { program: String, after: Duration },
    /// Operator interrupt arrived while waiting; the child was killed
    Interrupted { program: String },
    /// Could not spawn or talk to the child
    Io {
        program: String,
        source: std::io::Error,
    },
}

impl GatewayError {
    pub fn program(&self) -> &str {
        match self {
            GatewayError::ToolNotFound { program }
            | GatewayError::Failed { program, .. }
            | GatewayError::Timeout { program, .. }
            | GatewayError::Interrupted { program }
            | GatewayError::Io { program, .. } => program,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::ToolNotFound { program } => write!(f, "'{}' not found", program),
            GatewayError::Failed {
                program,
                code: Some(code),
                ..
            } => write!(f, "'{}' exited with code {}", program, code),
            GatewayError::Failed { program, .. } => {
                write!(f, "'{}' terminated by signal", program)
            }
            GatewayError::Timeout { program, after } => {
                write!(f, "'{}' timed out after {}s", program, after.as_secs())
            }
            GatewayError::Interrupted { program } => write!(f, "'{}' interrupted", program),
            GatewayError::Io { program, source } => write!(f, "'{}': {}", program, source),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Executes external commands synchronously.
pub trait CommandGateway {
    /// Run to completion. `Ok` only on exit status 0.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, GatewayError>;

    /// Run as a yes/no probe: exit 0 is `true`, any non-zero exit is `false`.
    /// Missing tools and timeouts still surface as errors.
    fn probe(&self, spec: &CommandSpec) -> Result<bool, GatewayError> {
        match self.run(spec) {
            Ok(_) => Ok(true),
            Err(GatewayError::Failed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
