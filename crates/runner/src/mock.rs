//! `MockRunner` — a test double for `SubprocessRunner`.
//!
//! Records every invocation it receives and answers with a
//! programmer-specified result instead of spawning anything.

use std::ffi::OsString;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{ProcessOutput, RunnerError, SubprocessRunner};

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

/// Behaviour injected into `MockRunner` at construction time.
#[derive(Debug, Clone)]
pub enum MockBehaviour {
    /// Exit 0 every time.
    Succeed,
    /// Exit with this code every time.
    ExitWith(i32),
    /// Fail to spawn every time (as if the program were not installed).
    SpawnError,
    /// Exit 1 when any argument contains this text, 0 otherwise.
    FailWhenArgContains(String),
}

/// A mock runner that records calls in order.
#[derive(Debug, Clone)]
pub struct MockRunner {
    /// What the runner will do when `run` is called.
    pub behaviour: MockBehaviour,
    /// All invocations seen so far (in call order).
    pub calls: Arc<Mutex<Vec<Invocation>>>,
}

impl MockRunner {
    pub fn new(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock whose every invocation succeeds.
    pub fn succeeding() -> Self {
        Self::new(MockBehaviour::Succeed)
    }

    /// Create a mock whose every invocation exits with `code`.
    pub fn exiting(code: i32) -> Self {
        Self::new(MockBehaviour::ExitWith(code))
    }

    /// Create a mock that behaves as if the program does not exist.
    pub fn unspawnable() -> Self {
        Self::new(MockBehaviour::SpawnError)
    }

    /// Create a mock that fails only for invocations mentioning `needle`.
    pub fn failing_on(needle: impl Into<String>) -> Self {
        Self::new(MockBehaviour::FailWhenArgContains(needle.into()))
    }

    /// Snapshot of the recorded invocations.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times `run` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SubprocessRunner for MockRunner {
    async fn run(&self, program: &str, args: &[OsString]) -> Result<ProcessOutput, RunnerError> {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_owned(),
            args: args.to_vec(),
        });

        let exit = |code: i32| ProcessOutput {
            exit_code: Some(code),
            stdout: String::new(),
            stderr: if code == 0 { String::new() } else { format!("mock exit {code}") },
        };

        match &self.behaviour {
            MockBehaviour::Succeed => Ok(exit(0)),
            MockBehaviour::ExitWith(code) => Ok(exit(*code)),
            MockBehaviour::SpawnError => Err(RunnerError::Spawn {
                program: program.to_owned(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock: program not found"),
            }),
            MockBehaviour::FailWhenArgContains(needle) => {
                let hit = args
                    .iter()
                    .any(|a| a.to_string_lossy().contains(needle.as_str()));
                Ok(exit(if hit { 1 } else { 0 }))
            }
        }
    }
}
