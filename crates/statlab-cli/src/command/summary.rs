use std::io;

use clap::Args;
use statlab_stats::{
    percentiles::Percentiles,
    summary::{CoefficientOfVariation, SummaryReport},
};

use crate::{
    command::SampleArgs,
    output::{format_value, format_values},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    #[command(flatten)]
    pub sample: SampleArgs,

    /// Extra percentile ranks (0-100) to report, e.g. `--percentile 10,90`
    #[arg(long = "percentile", value_delimiter = ',', value_parser = parse_percentile_rank)]
    pub percentiles: Vec<f64>,
}

/// The report plus any requested percentiles.
#[derive(Debug, serde::Serialize)]
struct SummaryOutput<'a> {
    #[serde(flatten)]
    report: &'a SummaryReport,
    #[serde(skip_serializing_if = "Percentiles::is_empty")]
    percentiles: Percentiles,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let report = arg.sample.load_report()?;
    let summary = SummaryOutput {
        report: &report,
        percentiles: Percentiles::from_report(&report, &arg.percentiles),
    };
    let mut output = arg.sample.open_output()?;
    output.write_report(arg.sample.format, &summary, write_summary_table)
}

fn parse_percentile_rank(s: &str) -> Result<f64, String> {
    let rank = s
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("'{s}' is not a number: {err}"))?;
    if (0.0..=100.0).contains(&rank) {
        Ok(rank)
    } else {
        Err(format!("percentile rank {rank} is outside 0-100"))
    }
}

fn write_summary_table(w: &mut dyn io::Write, summary: &SummaryOutput<'_>) -> io::Result<()> {
    let report = summary.report;
    let spread = |value: Option<f64>| value.map_or_else(|| "n/a (n < 2)".to_string(), format_value);
    let cv = match report.cv {
        CoefficientOfVariation::Percent(percent) => format!("{percent:.2}%"),
        CoefficientOfVariation::NotApplicable => "n/a".to_string(),
    };

    let mut rows = vec![
        ("count".to_string(), report.count.to_string()),
        ("mean".to_string(), format_value(report.mean)),
        ("median".to_string(), format_value(report.median)),
        ("modes".to_string(), format_values(&report.modes)),
        ("min".to_string(), format_value(report.min)),
        ("q1".to_string(), format_value(report.q1)),
        ("q3".to_string(), format_value(report.q3)),
        ("max".to_string(), format_value(report.max)),
        ("range".to_string(), format_value(report.range)),
        ("iqr".to_string(), format_value(report.iqr)),
        ("lower fence".to_string(), format_value(report.lower_fence)),
        ("upper fence".to_string(), format_value(report.upper_fence)),
        ("outliers".to_string(), format_values(&report.outliers)),
        ("variance".to_string(), spread(report.variance().ok())),
        ("std dev".to_string(), spread(report.std_dev().ok())),
        ("cv".to_string(), cv),
    ];
    rows.extend(
        summary
            .percentiles
            .iter()
            .map(|point| (format!("p{}", point.rank), format_value(point.value))),
    );
    for (label, value) in rows {
        writeln!(w, "{label:<12} {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use statlab_stats::summary::compute_summary;

    use super::*;

    fn render(sample: &[f64], ranks: &[f64]) -> String {
        let report = compute_summary(sample).unwrap();
        let summary = SummaryOutput {
            report: &report,
            percentiles: Percentiles::from_report(&report, ranks),
        };
        let mut buf = vec![];
        write_summary_table(&mut buf, &summary).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_summary_table() {
        let sample = [2.0, 3.0, 3.0, 5.0, 8.0, 9.0, 15.0, 18.0, 25.0, 35.0, 42.0];
        let text = render(&sample, &[]);
        assert!(text.contains("count        11\n"));
        assert!(text.contains("median       9\n"));
        assert!(text.contains("modes        3\n"));
        assert!(text.contains("lower fence  -19.5000\n"));
        assert!(text.contains("outliers     42\n"));
        assert!(!text.contains("\np"));
    }

    #[test]
    fn test_requested_percentiles_are_listed() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let text = render(&sample, &[10.0, 92.5]);
        assert!(text.ends_with("cv           55.05%\np10          2\np92.5        10\n"));
    }

    #[test]
    fn test_single_value_marks_spread_unavailable() {
        let text = render(&[5.0], &[]);
        assert!(text.contains("variance     n/a (n < 2)\n"));
        assert!(text.contains("std dev      n/a (n < 2)\n"));
        assert!(text.contains("cv           n/a\n"));
    }

    #[test]
    fn test_json_flattens_report_and_percentiles() {
        let report = compute_summary(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let summary = SummaryOutput {
            report: &report,
            percentiles: Percentiles::from_report(&report, &[50.0]),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["count"], 4);
        assert_eq!(json["percentiles"]["points"][0]["value"], 3.0);

        let summary = SummaryOutput {
            report: &report,
            percentiles: Percentiles::from_report(&report, &[]),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("percentiles").is_none());
    }

    #[test]
    fn test_percentile_rank_parser() {
        assert_eq!(parse_percentile_rank("90"), Ok(90.0));
        assert_eq!(parse_percentile_rank(" 2.5 "), Ok(2.5));
        assert!(parse_percentile_rank("101").is_err());
        assert!(parse_percentile_rank("-1").is_err());
        assert!(parse_percentile_rank("ninety").is_err());
    }
}
