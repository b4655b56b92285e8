//! Child-process gateway
//!
//! Spawns the program, feeds stdin from a writer thread, drains stdout and
//! stderr on reader threads and polls for exit so that a timeout or an
//! operator interrupt can kill the child.

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::domain::ports::command_gateway::{
    CommandGateway, CommandOutput, CommandSpec, GatewayError, OutputMode,
};

use super::interrupt::InterruptFlag;

const POLL_INTERVAL: Duration = Duration::from_millis(25);
#[cfg(unix)]
const SIGINT: i32 = 2;

/// Runs external commands as child processes.
#[derive(Debug, Clone, Default)]
pub struct ProcessGateway {
    default_timeout: Option<Duration>,
    interrupt: InterruptFlag,
}

impl ProcessGateway {
    pub fn new(default_timeout: Option<Duration>, interrupt: InterruptFlag) -> Self {
        Self {
            default_timeout,
            interrupt,
        }
    }

    fn spawn(&self, spec: &CommandSpec) -> Result<Child, GatewayError> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }

        let capture = spec.output == OutputMode::Capture;
        cmd.stdin(match (&spec.stdin, capture) {
            (Some(_), _) => Stdio::piped(),
            (None, true) => Stdio::null(),
            (None, false) => Stdio::inherit(),
        });
        if capture {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GatewayError::ToolNotFound {
                program: spec.program.clone(),
            },
            _ => GatewayError::Io {
                program: spec.program.clone(),
                source: e,
            },
        })
    }

    /// Poll until exit, timeout or interrupt. Kills the child on the latter two.
    fn wait(
        &self,
        child: &mut Child,
        spec: &CommandSpec,
        timeout: Option<Duration>,
    ) -> Result<ExitStatus, GatewayError> {
        let started = Instant::now();
        let io_err = |source| GatewayError::Io {
            program: spec.program.clone(),
            source,
        };

        loop {
            if let Some(status) = child.try_wait().map_err(io_err)? {
                // Ctrl+C on a terminal reaches the child too; it may exit
                // before the handler thread has set the flag
                let interrupted = self.interrupt.is_requested() && !spec.cleanup;
                if interrupted || killed_by_interrupt(&status) {
                    self.interrupt.request();
                    tracing::warn!(command = %spec.display(), "child stopped by interrupt");
                    return Err(GatewayError::Interrupted {
                        program: spec.program.clone(),
                    });
                }
                return Ok(status);
            }
            if self.interrupt.is_requested() && !spec.cleanup {
                tracing::warn!(command = %spec.display(), "interrupt received, stopping child");
                kill(child);
                return Err(GatewayError::Interrupted {
                    program: spec.program.clone(),
                });
            }
            if let Some(limit) = timeout {
                if started.elapsed() >= limit {
                    tracing::warn!(command = %spec.display(), secs = limit.as_secs(), "command timed out");
                    kill(child);
                    return Err(GatewayError::Timeout {
                        program: spec.program.clone(),
                        after: limit,
                    });
                }
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(source: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    source.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            buf
        })
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

impl CommandGateway for ProcessGateway {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, GatewayError> {
        tracing::debug!(command = %spec.display(), cwd = ?spec.cwd, "running command");

        if self.interrupt.is_requested() && !spec.cleanup {
            return Err(GatewayError::Interrupted {
                program: spec.program.clone(),
            });
        }
        let _running = self.interrupt.enter_child();
        let mut child = self.spawn(spec)?;

        let feeder = match (child.stdin.take(), spec.stdin.clone()) {
            (Some(mut pipe), Some(input)) => Some(thread::spawn(move || {
                // A child that exits without reading closes the pipe early
                let _ = pipe.write_all(&input);
            })),
            _ => None,
        };
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let timeout = spec.timeout.or(self.default_timeout);
        // On timeout or interrupt the helper threads are left detached: a
        // grandchild may still hold the pipes open.
        let status = self.wait(&mut child, spec, timeout)?;

        if let Some(feeder) = feeder {
            let _ = feeder.join();
        }
        let output = CommandOutput {
            stdout: collect(stdout),
            stderr: collect(stderr),
        };

        tracing::debug!(program = %spec.program, code = ?status.code(), "command finished");
        if status.success() {
            Ok(output)
        } else {
            let combined = if output.stderr.trim().is_empty() {
                output.stdout
            } else {
                output.stderr
            };
            tracing::warn!(command = %spec.display(), code = ?status.code(), "command failed");
            Err(GatewayError::Failed {
                program: spec.program.clone(),
                code: status.code(),
                output: combined,
            })
        }
    }
}
