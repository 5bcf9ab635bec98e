//! Result types for a batch run.
//!
//! A [`BatchReport`] is informational only: the renderer records what
//! happened to each invocation but never acts on it.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// What happened to a single tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The tool exited with code 0.
    Succeeded,
    /// The tool ran but exited non-zero (or was killed by a signal).
    Failed {
        exit_code: Option<i32>,
        stderr: String,
    },
    /// The tool could not be started.
    SpawnFailed { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

/// One candidate file and the invocation made for it.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    #[serde(serialize_with = "lossy_path")]
    pub input: PathBuf,
    #[serde(serialize_with = "lossy_path")]
    pub output: PathBuf,
    pub outcome: Outcome,
}

/// Summary of a completed pass over a directory.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Directory that was scanned.
    #[serde(serialize_with = "lossy_path")]
    pub directory: PathBuf,
    /// One entry per candidate, in listing order.
    pub conversions: Vec<Conversion>,
    /// Entries that were not candidates.
    pub skipped: usize,
}

impl BatchReport {
    /// Number of tool invocations made.
    pub fn invoked(&self) -> usize {
        self.conversions.len()
    }

    pub fn succeeded(&self) -> usize {
        self.conversions.iter().filter(|c| c.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.invoked() - self.succeeded()
    }
}

/// Entry names are not guaranteed to be UTF-8; the report is.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
