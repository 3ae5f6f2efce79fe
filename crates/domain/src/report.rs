//! Report — the flat text file produced by a poll run, and its parsed form.
//!
//! The file holds one `"<name> = <value>"` line per configured sensor, each
//! terminated by `\n`. [`parse_report`] reads such a file back into
//! structured [`Reading`]s for the HTTP front.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::line::DisplayLine;

/// Name used for a parsed line whose left-hand side is empty.
pub const DEFAULT_READING_NAME: &str = "Sensor";

static NUMERIC_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+(?:[.,][0-9]+)?)(?:\s*(.*))?$").expect("numeric value pattern is valid")
});

/// Ordered report lines, one per configured endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<DisplayLine>,
}

impl Report {
    #[must_use]
    pub fn new(lines: Vec<DisplayLine>) -> Self {
        Self { lines }
    }

    pub fn push(&mut self, line: DisplayLine) {
        self.lines.push(line);
    }

    #[must_use]
    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the file content: every line followed by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.iter().fold(String::new(), |mut out, line| {
            out.push_str(&line.to_string());
            out.push('\n');
            out
        })
    }
}

impl FromIterator<DisplayLine> for Report {
    fn from_iter<I: IntoIterator<Item = DisplayLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A report line read back from disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub name: String,
    /// Numeric part of the value, when the value starts with a number.
    pub value: Option<f64>,
    pub unit: String,
    /// Everything right of the `=`, trimmed.
    pub raw: String,
}

impl Reading {
    /// Parse a single non-empty report line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let (left, right) = line.split_once('=').unwrap_or((line, ""));
        let name = match left.trim() {
            "" => DEFAULT_READING_NAME.to_string(),
            name => name.to_string(),
        };
        let raw = right.trim().to_string();

        let (value, unit) = NUMERIC_VALUE
            .captures(&raw)
            .map_or((None, String::new()), |caps| {
                let value = caps[1].replace(',', ".").parse::<f64>().ok();
                let unit = caps
                    .get(2)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                (value, unit)
            });

        Self {
            name,
            value,
            unit,
            raw,
        }
    }
}

/// Parse report content into readings, skipping blank lines.
#[must_use]
pub fn parse_report(content: &str) -> Vec<Reading> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Reading::parse)
        .collect()
}
