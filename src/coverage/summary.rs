//! Assembled analysis result

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{Diagnostic, FileCoverage, Totals};

/// Coverage summed across every file in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSummary {
    pub global_total_lines: usize,
    pub global_total_lines_run: usize,
    /// Rounded to one decimal; 0.0 when there are no lines at all
    pub global_percent_run: f64,
}

impl GlobalSummary {
    pub fn from_totals(totals: Totals) -> Self {
        GlobalSummary {
            global_total_lines: totals.total_lines,
            global_total_lines_run: totals.lines_run,
            global_percent_run: totals.percent_run_tenths(),
        }
    }
}

/// Per-file coverage plus the global summary for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// In report order
    pub files: Vec<FileCoverage>,
    pub global: GlobalSummary,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ResultSet {
    /// Build the result once every file is processed
    pub(crate) fn assemble(files: Vec<FileCoverage>, totals: Totals, diagnostics: Vec<Diagnostic>) -> Self {
        ResultSet {
            files,
            global: GlobalSummary::from_totals(totals),
            diagnostics,
        }
    }

    pub fn get(&self, path: &str) -> Option<&FileCoverage> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn global_percent_run(&self) -> f64 {
        self.global.global_percent_run
    }

    /// Nested mapping: `{"rcov": {<path>: {percent_run, lines, methods}, "global_percent_run": f}}`
    pub fn to_value(&self) -> Value {
        let mut rcov = Map::new();
        for file in &self.files {
            rcov.insert(
                file.path.clone(),
                json!({
                    "percent_run": file.percent_run,
                    "lines": file.lines,
                    "methods": file.methods,
                }),
            );
        }
        rcov.insert(
            "global_percent_run".to_string(),
            json!(self.global.global_percent_run),
        );

        json!({ "rcov": rcov })
    }
}
