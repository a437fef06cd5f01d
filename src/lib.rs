//! rcov-digest - rcov report summarizer
//!
//! Reads the flat text report written by rcov and produces:
//! - Per-file significant lines with their run/not-run flag
//! - Per-file and global run percentages
//! - Per-method uncovered percentages, using an injected method resolver
//!
//! Method boundaries are never derived from the source here; callers supply
//! a [`MethodResolver`] for the language being measured.

pub mod config;
pub mod coverage;
pub mod error;

pub use config::RcovConfig;
pub use coverage::{
    analyze, analyze_file, load_report, Diagnostic, DiagnosticKind, FileCoverage, GlobalSummary,
    Line, MethodMap, MethodResolver, ResultSet, Totals,
};
pub use error::{CoverageError, ResolverError};
