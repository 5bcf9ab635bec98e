//! Runner-level error type.

use thiserror::Error;

/// Errors returned by [`SubprocessRunner::run`](crate::SubprocessRunner::run).
///
/// A process that starts and then exits non-zero is *not* an error; that is
/// reported through [`ProcessOutput`](crate::ProcessOutput).
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The program could not be started at all (missing, not executable, …).
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
