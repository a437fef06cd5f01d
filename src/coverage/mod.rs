//! Coverage module
//!
//! Provides:
//! - rcov text report splitting
//! - Line classification
//! - Per-file and global run percentages
//! - Method coverage through an external resolver

mod aggregate;
mod line;
mod methods;
mod report;
mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::*;
pub use line::*;
pub use methods::*;
pub use report::*;
pub use summary::*;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::CoverageError;

/// A significant source line and whether it ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub content: String,
    pub was_run: bool,
}

/// Coverage for a single file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCoverage {
    pub path: String,
    /// Significant lines, in source order
    pub lines: Vec<Line>,
    pub percent_run: u32,
    /// Uncovered percentage per method
    pub methods: BTreeMap<String, f64>,
    /// Set when the file had no significant lines; `percent_run` is then 0
    #[serde(default)]
    pub no_data: bool,
}

impl FileCoverage {
    pub fn totals(&self) -> Totals {
        Totals::of(&self.lines)
    }

    pub fn lines_run(&self) -> usize {
        self.totals().lines_run
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No significant lines; reported as 0% with `no_data` set
    NoSignificantLines,
    /// The resolver could not parse the file; no method data
    MethodDataUnavailable,
}

/// A recoverable per-file problem met during analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Read the raw report text
pub fn load_report(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read coverage report: {}", path.display()))
}

/// Analyze a report file
pub fn analyze_file<R: MethodResolver + ?Sized>(path: &Path, resolver: &R) -> Result<ResultSet> {
    let text = load_report(path)?;
    let results = analyze(&text, resolver)
        .with_context(|| format!("Failed to analyze coverage report: {}", path.display()))?;
    Ok(results)
}

/// Analyze raw report text into a [`ResultSet`].
///
/// Files are processed one at a time in report order. Only a malformed
/// report or a non-parse resolver failure aborts the run.
pub fn analyze<R: MethodResolver + ?Sized>(text: &str, resolver: &R) -> Result<ResultSet, CoverageError> {
    let blocks = split_report(text)?;

    let mut files = Vec::with_capacity(blocks.len());
    let mut diagnostics = Vec::new();
    let mut totals = Totals::default();

    for block in blocks {
        let (file, file_totals) = cover_file(block, resolver, &mut diagnostics)?;
        totals = totals + file_totals;
        files.push(file);
    }

    Ok(ResultSet::assemble(files, totals, diagnostics))
}

fn cover_file<R: MethodResolver + ?Sized>(
    block: RawBlock<'_>,
    resolver: &R,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(FileCoverage, Totals), CoverageError> {
    let path = block.path;
    let lines = classify_lines(&block.lines);
    let totals = Totals::of(&lines);

    let percent_run = match file_percent_run(path, &totals) {
        Ok(percent) => percent,
        Err(e) => {
            warn!(file = path, "{}", e);
            diagnostics.push(Diagnostic {
                file: path.to_string(),
                kind: DiagnosticKind::NoSignificantLines,
                message: e.to_string(),
            });
            let file = FileCoverage {
                path: path.to_string(),
                lines,
                percent_run: 0,
                methods: BTreeMap::new(),
                no_data: true,
            };
            return Ok((file, totals));
        }
    };

    debug!(
        file = path,
        lines_run = totals.lines_run,
        total_lines = totals.total_lines,
        percent_run,
        "covered file"
    );

    let methods = match correlate(path, &lines, resolver)? {
        MethodData::Resolved(methods) => methods,
        MethodData::Unavailable { reason } => {
            diagnostics.push(Diagnostic {
                file: path.to_string(),
                kind: DiagnosticKind::MethodDataUnavailable,
                message: format!(
                    "Could not parse {}, method level coverage is unavailable: {}",
                    path, reason
                ),
            });
            BTreeMap::new()
        }
    };

    let file = FileCoverage {
        path: path.to_string(),
        lines,
        percent_run,
        methods,
        no_data: false,
    };
    Ok((file, totals))
}
