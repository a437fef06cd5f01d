//! Run/total aggregation

use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::Line;
use crate::error::CoverageError;

/// Run and total significant line counts.
///
/// Used both per file and as the fold state summed across files, so the
/// global percentage comes from summed counts rather than averaged
/// per-file percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub lines_run: usize,
    pub total_lines: usize,
}

impl Totals {
    pub fn of(lines: &[Line]) -> Self {
        Totals {
            lines_run: lines.iter().filter(|l| l.was_run).count(),
            total_lines: lines.len(),
        }
    }

    /// Percentage of lines run, rounded half-up to an integer.
    ///
    /// `None` when there are no lines.
    pub fn percent_run(&self) -> Option<u32> {
        if self.total_lines == 0 {
            return None;
        }
        let run = self.lines_run as u64;
        let total = self.total_lines as u64;
        // round(100 * run / total) without going through floats
        Some(((200 * run + total) / (2 * total)) as u32)
    }

    /// Percentage of lines run, rounded to one decimal; 0.0 when empty
    pub fn percent_run_tenths(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        let percent = (self.lines_run as f64 / self.total_lines as f64) * 100.0;
        round_to_tenths(percent)
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            lines_run: self.lines_run + other.lines_run,
            total_lines: self.total_lines + other.total_lines,
        }
    }
}

pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Integer run percentage for one file
pub fn file_percent_run(path: &str, totals: &Totals) -> Result<u32, CoverageError> {
    totals
        .percent_run()
        .ok_or_else(|| CoverageError::DivisionByZero {
            file: path.to_string(),
        })
}
