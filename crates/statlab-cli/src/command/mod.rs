use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use statlab_stats::summary::{SummaryReport, compute_summary};
use tracing_subscriber::EnvFilter;

use crate::{
    input::SampleSource,
    output::{Output, OutputFormat},
};

use self::{box_plot::BoxPlotArg, histogram::HistogramArg, summary::SummaryArg};

mod box_plot;
mod histogram;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the descriptive summary of a sample
    Summary(#[clap(flatten)] SummaryArg),
    /// Print box plot geometry and outlier severity
    BoxPlot(#[clap(flatten)] BoxPlotArg),
    /// Print an equal-width histogram
    Histogram(#[clap(flatten)] HistogramArg),
}

/// Input and output options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct SampleArgs {
    /// Sample file (JSON array or whitespace/comma separated numbers); stdin if omitted or `-`
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this path instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl SampleArgs {
    /// Reads the sample and summarizes it.
    pub(crate) fn load_report(&self) -> anyhow::Result<SummaryReport> {
        let source = SampleSource::from_arg(self.input.as_deref());
        let sample = source.read_sample()?;
        let report = compute_summary(&sample)
            .with_context(|| format!("Cannot summarize sample from {}", source.display_name()))?;
        tracing::info!(
            source = %source.display_name(),
            count = report.count,
            outliers = report.outliers.len(),
            "sample summarized"
        );
        Ok(report)
    }

    pub(crate) fn open_output(&self) -> anyhow::Result<Output> {
        Output::from_output_path(self.output.clone())
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::BoxPlot(arg) => box_plot::run(&arg)?,
        Mode::Histogram(arg) => histogram::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
