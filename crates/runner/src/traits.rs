//! The `SubprocessRunner` trait — the one capability the renderer needs from
//! the operating system.

use std::ffi::OsString;

use async_trait::async_trait;

use crate::RunnerError;

/// What a finished child process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured stdout (lossy UTF-8).
    pub stdout: String,
    /// Captured stderr (lossy UTF-8).
    pub stderr: String,
}

impl ProcessOutput {
    /// `true` when the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs an external program to completion.
#[async_trait]
pub trait SubprocessRunner: Send + Sync {
    /// Run `program` with `args`, wait for it to exit and return its status
    /// and captured streams.
    async fn run(&self, program: &str, args: &[OsString]) -> Result<ProcessOutput, RunnerError>;
}
