use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::analyzer::Outcome;
use crate::errors::{single_line, EntropyError, Result};

/// Entropy (bits) above which an image counts as SAFE
pub const SAFE_THRESHOLD: f64 = 4.5;

/// Field separator of the report line
pub const DELIMITER: char = '|';

/// Message for an invocation without an image path
pub const NO_PATH_MESSAGE: &str = "No path provided";

/// Classification of a computed entropy score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Unsafe,
}

impl Verdict {
    /// Strictly greater than the threshold is SAFE; 4.5 itself is UNSAFE
    pub fn from_score(score: f64) -> Self {
        if score > SAFE_THRESHOLD {
            Verdict::Safe
        } else {
            Verdict::Unsafe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Unsafe => "UNSAFE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `SAFE|6.23` / `UNSAFE|1.00`
pub fn verdict_line(score: f64) -> String {
    format!("{}{}{:.2}", Verdict::from_score(score), DELIMITER, score)
}

/// `ERROR|<message>`, with the message forced onto one line
pub fn error_line(message: &str) -> String {
    format!("ERROR{}{}", DELIMITER, single_line(message))
}

/// The report line for an outcome, if one is due
///
/// A missing file produces no line unless `report_not_found` is set.
pub fn format_outcome(outcome: &Outcome, path: &Path, report_not_found: bool) -> Option<String> {
    match outcome {
        Outcome::Computed(score) => Some(verdict_line(*score)),
        Outcome::Failed(message) => Some(error_line(message)),
        Outcome::NotFound if report_not_found => {
            Some(error_line(&format!("File not found: {}", path.display())))
        }
        Outcome::NotFound => None,
    }
}

/// Write the report line for an outcome and flush
pub fn write_outcome<W: Write>(
    writer: &mut W,
    outcome: &Outcome,
    path: &Path,
    report_not_found: bool,
) -> Result<()> {
    if let Some(line) = format_outcome(outcome, path, report_not_found) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// One parsed report line, as seen by the calling process
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Safe(f64),
    Unsafe(f64),
    Error(String),
}

impl Report {
    pub fn is_safe(&self) -> bool {
        matches!(self, Report::Safe(_))
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Report::Safe(score) | Report::Unsafe(score) => Some(*score),
            Report::Error(_) => None,
        }
    }
}

/// Parse a line produced by `format_outcome`
pub fn parse_report_line(line: &str) -> Result<Report> {
    let line = line.trim_end_matches(['\r', '\n']);
    let malformed = || EntropyError::MalformedReport(line.to_string());

    let (tag, rest) = line.split_once(DELIMITER).ok_or_else(malformed)?;
    match tag {
        "ERROR" => Ok(Report::Error(rest.to_string())),
        "SAFE" | "UNSAFE" => {
            let score: f64 = rest.trim().parse().map_err(|_| malformed())?;
            if tag == "SAFE" {
                Ok(Report::Safe(score))
            } else {
                Ok(Report::Unsafe(score))
            }
        }
        _ => Err(malformed()),
    }
}
