//! Reading samples from files or stdin.
//!
//! Two layouts are accepted: a JSON array of numbers, or plain text with
//! numbers separated by whitespace and/or commas. In plain text, `#` starts
//! a comment that runs to the end of the line.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParseSampleError {
    #[display("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },
    #[display("invalid JSON sample: {message}")]
    InvalidJson { message: String },
}

/// Where a sample is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSource {
    Stdin,
    File(PathBuf),
}

impl SampleSource {
    /// `None` and `-` mean stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn read_sample(&self) -> anyhow::Result<Vec<f64>> {
        let text = match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read sample from stdin")?;
                text
            }
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read sample file: {}", path.display()))?,
        };
        let sample = parse_sample(&text)
            .with_context(|| format!("Failed to parse sample from {}", self.display_name()))?;
        tracing::debug!(source = %self.display_name(), count = sample.len(), "sample loaded");
        Ok(sample)
    }
}

pub fn parse_sample(text: &str) -> Result<Vec<f64>, ParseSampleError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|err| ParseSampleError::InvalidJson {
            message: err.to_string(),
        });
    }

    let mut sample = vec![];
    for (line_idx, line) in text.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(content, _)| content);
        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let value = token
                .parse::<f64>()
                .map_err(|_| ParseSampleError::InvalidNumber {
                    line: line_idx + 1,
                    token: token.to_string(),
                })?;
            sample.push(value);
        }
    }
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_sample() {
        let text = "2 3 3, 5\n8,9\t15  # week one\n# comment only\n18\n";
        assert_eq!(
            parse_sample(text).unwrap(),
            vec![2.0, 3.0, 3.0, 5.0, 8.0, 9.0, 15.0, 18.0]
        );
    }

    #[test]
    fn test_json_sample() {
        assert_eq!(
            parse_sample("  [4, 6.5, -1e2]").unwrap(),
            vec![4.0, 6.5, -100.0]
        );
        assert!(matches!(
            parse_sample("[1, \"two\"]"),
            Err(ParseSampleError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_invalid_token_reports_line() {
        let err = parse_sample("1 2\n3 four\n").unwrap_err();
        assert_eq!(
            err,
            ParseSampleError::InvalidNumber {
                line: 2,
                token: "four".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 2: 'four' is not a number");
    }

    #[test]
    fn test_non_finite_tokens_parse() {
        let sample = parse_sample("1 NaN inf").unwrap();
        assert_eq!(sample.len(), 3);
        assert!(sample[1].is_nan());
        assert!(sample[2].is_infinite());
    }

    #[test]
    fn test_empty_text_is_empty_sample() {
        assert!(parse_sample("  \n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn test_source_from_arg() {
        assert_eq!(SampleSource::from_arg(None), SampleSource::Stdin);
        assert_eq!(
            SampleSource::from_arg(Some(Path::new("-"))),
            SampleSource::Stdin
        );
        assert_eq!(
            SampleSource::from_arg(Some(Path::new("data.txt"))),
            SampleSource::File(PathBuf::from("data.txt"))
        );
    }
}
