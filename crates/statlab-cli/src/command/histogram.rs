use std::io;

use clap::Args;
use statlab_stats::histogram::{Histogram, sturges_bin_count};

use crate::{command::SampleArgs, output::format_value};

/// Widest bar drawn in the text layout.
const BAR_WIDTH: u64 = 40;

#[derive(Debug, Clone, Args)]
pub(crate) struct HistogramArg {
    #[command(flatten)]
    pub sample: SampleArgs,

    /// Number of bins (default: Sturges' rule)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub bins: Option<u16>,
}

pub(crate) fn run(arg: &HistogramArg) -> anyhow::Result<()> {
    let report = arg.sample.load_report()?;
    let num_bins = arg
        .bins
        .map_or_else(|| sturges_bin_count(report.count), usize::from);
    tracing::debug!(num_bins, "building histogram");
    let histogram = Histogram::from_report(&report, num_bins);
    let mut output = arg.sample.open_output()?;
    output.write_report(arg.sample.format, &histogram, write_histogram)
}

fn write_histogram(w: &mut dyn io::Write, histogram: &Histogram) -> io::Result<()> {
    let max_count = histogram.max_count().max(1);
    for bin in &histogram.bins {
        let bar_len = bin.count * BAR_WIDTH / max_count;
        let bar = "#".repeat(usize::try_from(bar_len).unwrap_or(usize::MAX));
        writeln!(
            w,
            "[{:>10}, {:>10})  {:>5}  {bar}",
            format_value(bin.range.start),
            format_value(bin.range.end),
            bin.count
        )?;
    }
    Ok(())
}
