//! Renderer-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a batch run.
///
/// Failures of individual tool invocations never surface here; they are
/// recorded in the [`BatchReport`](crate::BatchReport) instead.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The directory could not be opened or its listing could not be read.
    #[error("cannot list directory '{}': {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
