use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::PathBuf,
};

use anyhow::Context;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    /// Writes `value` in `format`, using `render_text` for the text layout.
    pub fn write_report<T, F>(
        &mut self,
        format: OutputFormat,
        value: &T,
        render_text: F,
    ) -> anyhow::Result<()>
    where
        T: serde::Serialize,
        F: FnOnce(&mut dyn io::Write, &T) -> io::Result<()>,
    {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *self, value)
                    .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
                writeln!(&mut *self).with_context(|| {
                    format!(
                        "Failed to write newline after JSON to {}",
                        self.display_path()
                    )
                })?;
            }
            OutputFormat::Text => {
                render_text(&mut *self, value)
                    .with_context(|| format!("Failed to write report to {}", self.display_path()))?;
            }
        }
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        tracing::debug!(output = %self.display_path(), ?format, "report written");
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Formats a statistic for the text tables: integers without a fraction,
/// everything else with four decimals.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}

pub fn format_values(values: &[f64]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>()
        .join(", ")
}
