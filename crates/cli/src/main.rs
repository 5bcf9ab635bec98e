//! `dot-render` CLI entry-point.
//!
//! Renders every `*.dot` file in one directory to a sibling `*.svg` file
//! (gzip-compressed SVG by default) using Graphviz.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use renderer::{BatchReport, BatchRenderer, Outcome, RenderCommand, RenderConfig, ReplacePolicy};
use runner::{SubprocessRunner, SystemRunner};

#[derive(Parser)]
#[command(
    name = "dot-render",
    about = "Render every .dot file in a directory to compressed SVG",
    version
)]
struct Cli {
    /// Directory to scan (not recursive).
    #[arg(env = "DOT_RENDER_DIR", default_value = ".")]
    dir: PathBuf,

    /// Rendering program to invoke.
    #[arg(long, env = "DOT_RENDER_TOOL", default_value = "dot")]
    tool: String,

    /// Output format passed as `-T<format>`.
    #[arg(long, env = "DOT_RENDER_FORMAT", default_value = "svgz")]
    format: String,

    /// How `.dot` is swapped for `.svg` in names like `a.dot.dot`.
    #[arg(long, value_enum, default_value_t = ReplacePolicy::Trailing)]
    replace: ReplacePolicy,

    /// Do not hand directories named `*.dot` to the tool.
    #[arg(long)]
    skip_dirs: bool,

    /// Print one line per failed invocation on stderr.
    #[arg(long)]
    print_errors: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Log every invocation.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            replace_policy: self.replace,
            command: RenderCommand {
                program: self.tool.clone(),
                format: self.format.clone(),
            },
            skip_directories: self.skip_dirs,
            ..RenderConfig::for_directory(&self.dir)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One line per invocation that did not succeed.
fn failure_lines(report: &BatchReport) -> Vec<String> {
    report
        .conversions
        .iter()
        .filter_map(|c| {
            let input = c.input.display();
            match &c.outcome {
                Outcome::Succeeded => None,
                Outcome::Failed { exit_code: Some(code), stderr } => {
                    Some(format!("{input}: exit status {code}: {}", stderr.trim()))
                }
                Outcome::Failed { exit_code: None, stderr } => {
                    Some(format!("{input}: terminated by signal: {}", stderr.trim()))
                }
                Outcome::SpawnFailed { message } => Some(format!("{input}: {message}")),
            }
        })
        .collect()
}

/// Run one pass. Only an unlistable directory is an error; failed
/// invocations still produce `Ok`.
async fn execute<R: SubprocessRunner>(cli: &Cli, runner: R) -> anyhow::Result<BatchReport> {
    let config = cli.render_config();
    info!("scanning {}", config.directory.display());

    BatchRenderer::new(runner, config)
        .run()
        .await
        .context("batch render aborted")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = execute(&cli, SystemRunner).await?;

    if cli.print_errors {
        for line in failure_lines(&report) {
            eprintln!("{line}");
        }
    }
    if cli.json {
        let out = serde_json::to_string_pretty(&report).context("cannot serialise report")?;
        println!("{out}");
    }

    Ok(())
}
