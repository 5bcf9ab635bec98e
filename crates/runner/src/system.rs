//! `SystemRunner` — spawns real child processes via `tokio::process`.

use std::ffi::OsString;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::debug;

use crate::{ProcessOutput, RunnerError, SubprocessRunner};

/// Runner backed by the operating system.
///
/// There is no timeout: a hung child blocks the caller until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl SubprocessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[OsString]) -> Result<ProcessOutput, RunnerError> {
        debug!("spawning {program} {args:?}");

        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| RunnerError::Spawn {
                program: program.to_owned(),
                source,
            })?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[tokio::test]
    async fn captures_stdout_and_exit_code() {
        let out = SystemRunner
            .run("sh", &args(&["-c", "printf hello"]))
            .await
            .expect("sh should spawn");

        assert!(out.success());
        assert_eq!(out.stdout, "hello");
        assert!(out.stderr.is_empty());
    }

    #[tokio::test]
    async fn non_zero_exit_is_not_an_error() {
        let out = SystemRunner
            .run("sh", &args(&["-c", "echo oops >&2; exit 3"]))
            .await
            .expect("sh should spawn");

        assert!(!out.success());
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let err = SystemRunner
            .run("definitely-not-a-real-program-7f3a", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, RunnerError::Spawn { ref program, .. } if program == "definitely-not-a-real-program-7f3a"));
    }
}
