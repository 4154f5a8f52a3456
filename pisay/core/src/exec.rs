//! Process Execution
//!
//! The host's `exec` service behind a trait, plus a tokio-backed default.
//! Callers need to tell "the tool is not installed" apart from "the tool ran
//! and failed", so spawn failures with `NotFound` get their own variant.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Result of a process that ran to completion
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code (`None` when killed by a signal)
    pub code: Option<i32>,
    /// Captured stdout, lossily decoded
    pub stdout: String,
    /// Captured stderr, lossily decoded
    pub stderr: String,
}

impl ExecOutput {
    /// Whether the process exited with code 0
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Errors from running an external process
#[derive(Debug, Error)]
pub enum ExecError {
    /// The program is not installed or not on `PATH`
    #[error("{command} not found")]
    NotFound {
        /// Program that was looked up
        command: String,
    },

    /// The program exists but could not be started
    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        /// Program that failed to start
        command: String,
        /// The underlying IO error
        source: io::Error,
    },

    /// The program did not finish in time and was killed
    #[error("{command} timed out after {timeout:?}")]
    TimedOut {
        /// Program that timed out
        command: String,
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// Reading the program's output failed
    #[error("I/O error while running {command}: {source}")]
    Io {
        /// Program being run
        command: String,
        /// The underlying IO error
        source: io::Error,
    },
}

impl ExecError {
    /// Whether the failure means the tool is absent
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Host process execution service
///
/// Implement this trait to route `exec` through the host (sandboxing,
/// remote execution) or to script results in tests.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runner name for logs
    fn name(&self) -> &str;

    /// Run `command` with `args`, killing it once `timeout` elapses
    async fn exec(
        &self,
        command: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<ExecOutput, ExecError>;
}

/// Runs processes with `tokio::process`
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    /// Create a runner
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    fn name(&self) -> &str {
        "tokio"
    }

    async fn exec(
        &self,
        command: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<ExecOutput, ExecError> {
        let child = tokio::process::Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    ExecError::NotFound {
                        command: command.to_string(),
                    }
                } else {
                    ExecError::Spawn {
                        command: command.to_string(),
                        source: e,
                    }
                }
            })?;

        let waiting = child.wait_with_output();
        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, waiting).await.map_err(|_| {
                ExecError::TimedOut {
                    command: command.to_string(),
                    timeout: limit,
                }
            })?,
            None => waiting.await,
        }
        .map_err(|e| ExecError::Io {
            command: command.to_string(),
            source: e,
        })?;

        tracing::debug!(
            command = %command,
            code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "Process finished"
        );

        Ok(ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
