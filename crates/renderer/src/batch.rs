//! The batch renderer.
//!
//! `BatchRenderer` makes a single pass over one directory:
//! 1. Reads the full listing (failure here aborts the run).
//! 2. Keeps entries whose name ends with the input suffix.
//! 3. Runs the rendering tool once per candidate, strictly one at a time.
//! 4. Records each outcome without acting on it.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use runner::SubprocessRunner;

use crate::command::RenderCommand;
use crate::models::{BatchReport, Conversion, Outcome};
use crate::naming::{output_os_name, ReplacePolicy};
use crate::RenderError;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Everything a run needs to know; there is no ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Directory to scan. Outputs are written next to their inputs.
    pub directory: PathBuf,
    /// Suffix that marks a candidate file.
    pub input_suffix: String,
    /// Suffix substituted into the output name.
    pub output_suffix: String,
    pub replace_policy: ReplacePolicy,
    pub command: RenderCommand,
    /// Leave directories out of the candidate set. Off by default: entries
    /// are not filtered by type and a directory named `x.dot` is handed to
    /// the tool like any file.
    pub skip_directories: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            input_suffix: ".dot".to_owned(),
            output_suffix: ".svg".to_owned(),
            replace_policy: ReplacePolicy::default(),
            command: RenderCommand::default(),
            skip_directories: false,
        }
    }
}

impl RenderConfig {
    /// Default configuration rooted at `directory`.
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// BatchRenderer
// ---------------------------------------------------------------------------

pub struct BatchRenderer<R> {
    runner: R,
    config: RenderConfig,
}

impl<R: SubprocessRunner> BatchRenderer<R> {
    pub fn new(runner: R, config: RenderConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render every candidate in the configured directory.
    ///
    /// # Errors
    /// Only [`RenderError::ListDirectory`]; it is returned before any
    /// invocation is made.
    #[instrument(skip(self), fields(directory = %self.config.directory.display()))]
    pub async fn run(&self) -> Result<BatchReport, RenderError> {
        let entries = self.list_directory().await?;
        let dir = &self.config.directory;

        let mut conversions = Vec::new();
        let mut skipped = 0usize;

        for entry in entries {
            if entry.is_dir {
                debug!("skipping directory {:?}", entry.name);
                skipped += 1;
                continue;
            }
            let in_name = entry.name;
            let Some(out_name) = output_os_name(
                &in_name,
                &self.config.input_suffix,
                &self.config.output_suffix,
                self.config.replace_policy,
            ) else {
                skipped += 1;
                continue;
            };

            let input = dir.join(&in_name);
            let output = dir.join(&out_name);
            let args = self.config.command.args(&input, &output);

            let outcome = match self.runner.run(&self.config.command.program, &args).await {
                Ok(out) if out.success() => Outcome::Succeeded,
                Ok(out) => Outcome::Failed {
                    exit_code: out.exit_code,
                    stderr: out.stderr,
                },
                Err(e) => Outcome::SpawnFailed { message: e.to_string() },
            };
            debug!("{in_name:?} -> {out_name:?}: {outcome:?}");

            conversions.push(Conversion { input, output, outcome });
        }

        let report = BatchReport {
            directory: dir.clone(),
            conversions,
            skipped,
        };
        info!(
            "rendered {} of {} candidates ({} entries skipped)",
            report.succeeded(),
            report.invoked(),
            report.skipped
        );
        Ok(report)
    }

    /// Read the whole listing up front so an unreadable directory fails the
    /// run before the first invocation.
    async fn list_directory(&self) -> Result<Vec<ListedEntry>, RenderError> {
        let dir = &self.config.directory;
        let list_err = |source| RenderError::ListDirectory {
            path: dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;
        let mut listed = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            // Type lookups only happen when they can change the result; an
            // entry whose type cannot be read counts as a file.
            let is_dir = self.config.skip_directories
                && entry.file_type().await.map(|t| t.is_dir()).unwrap_or(false);
            listed.push(ListedEntry {
                name: entry.file_name(),
                is_dir,
            });
        }
        Ok(listed)
    }
}

/// One directory entry as seen by the listing pass.
struct ListedEntry {
    name: OsString,
    is_dir: bool,
}
