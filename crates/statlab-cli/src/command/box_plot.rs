use std::io;

use clap::Args;
use statlab_stats::box_plot::{BoxPlot, OutlierSeverity, OutlierSide};

use crate::{command::SampleArgs, output::format_value};

#[derive(Debug, Clone, Args)]
pub(crate) struct BoxPlotArg {
    #[command(flatten)]
    pub sample: SampleArgs,
}

pub(crate) fn run(arg: &BoxPlotArg) -> anyhow::Result<()> {
    let report = arg.sample.load_report()?;
    let plot = BoxPlot::from_report(&report);
    let mut output = arg.sample.open_output()?;
    output.write_report(arg.sample.format, &plot, write_box_plot)
}

fn write_box_plot(w: &mut dyn io::Write, plot: &BoxPlot) -> io::Result<()> {
    writeln!(
        w,
        "whiskers  {} .. {}",
        format_value(plot.lower_whisker),
        format_value(plot.upper_whisker)
    )?;
    writeln!(
        w,
        "box       {} | {} | {}",
        format_value(plot.q1),
        format_value(plot.median),
        format_value(plot.q3)
    )?;
    writeln!(
        w,
        "fences    {} .. {}",
        format_value(plot.lower_fence),
        format_value(plot.upper_fence)
    )?;
    writeln!(
        w,
        "outliers  {} mild, {} severe",
        plot.count_by_severity(OutlierSeverity::Mild),
        plot.count_by_severity(OutlierSeverity::Severe)
    )?;
    for outlier in &plot.outliers {
        let side = match outlier.side {
            OutlierSide::Low => "low",
            OutlierSide::High => "high",
        };
        let severity = match outlier.severity {
            OutlierSeverity::Mild => "mild",
            OutlierSeverity::Severe => "severe",
        };
        writeln!(w, "  {:>10}  {side} {severity}", format_value(outlier.value))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use statlab_stats::summary::compute_summary;

    use super::*;

    #[test]
    fn test_box_plot_text() {
        let sample = [-5.0, -2.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 8.0, 11.0];
        let report = compute_summary(&sample).unwrap();
        let plot = BoxPlot::from_report(&report);
        let mut buf = vec![];
        write_box_plot(&mut buf, &plot).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("whiskers  2 .. 4\nbox       2 | 3 | 4\n"));
        assert!(text.contains("outliers  2 mild, 2 severe\n"));
        assert!(text.contains("          -5  low severe\n"));
        assert!(text.contains("          11  high severe\n"));
    }
}
