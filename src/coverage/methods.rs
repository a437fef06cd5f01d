//! Method-level coverage
//!
//! Method boundaries come from an external resolver; this module only
//! rebuilds the file's source text, asks the resolver which method each
//! line belongs to, and tallies uncovered lines per method.

use std::collections::BTreeMap;

use tracing::warn;

use super::Line;
use crate::error::{CoverageError, ResolverError};

/// Line-to-method answers for one analyzed source text.
///
/// Line numbers are 1-indexed.
pub trait MethodMap {
    fn in_method(&self, line_number: usize) -> bool;
    fn method_at(&self, line_number: usize) -> Option<&str>;
}

/// Capability that analyzes source text into a [`MethodMap`].
pub trait MethodResolver {
    type Map: MethodMap;

    fn analyze(&self, source: &str) -> Result<Self::Map, ResolverError>;
}

/// In-method line counts for one method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodTally {
    pub total: usize,
    pub uncovered: usize,
}

impl MethodTally {
    /// Share of the method's lines that never ran, 0.0 to 100.0
    pub fn uncovered_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.uncovered as f64 / self.total as f64
    }
}

/// Method data for one file
#[derive(Debug, Clone, PartialEq)]
pub enum MethodData {
    /// Uncovered percentage keyed by method name
    Resolved(BTreeMap<String, f64>),
    /// The resolver could not parse the file
    Unavailable { reason: String },
}

/// Rebuild the file's source text, one line per significant line
pub fn reconstruct_source(lines: &[Line]) -> String {
    let mut source = String::with_capacity(lines.iter().map(|l| l.content.len() + 1).sum());
    for line in lines {
        source.push_str(&line.content);
        source.push('\n');
    }
    source
}

/// Tally in-method lines per method. Lines outside any method are skipped.
pub fn tally_methods<M: MethodMap + ?Sized>(map: &M, lines: &[Line]) -> BTreeMap<String, MethodTally> {
    let mut tallies: BTreeMap<String, MethodTally> = BTreeMap::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        if !map.in_method(line_number) {
            continue;
        }
        let Some(name) = map.method_at(line_number) else {
            continue;
        };

        let tally = tallies.entry(name.to_string()).or_default();
        tally.total += 1;
        if !line.was_run {
            tally.uncovered += 1;
        }
    }

    tallies
}

/// Correlate one file's lines with its method boundaries.
///
/// An unparsable file degrades to [`MethodData::Unavailable`]; any other
/// resolver failure is returned as an error naming the file.
pub fn correlate<R: MethodResolver + ?Sized>(
    path: &str,
    lines: &[Line],
    resolver: &R,
) -> Result<MethodData, CoverageError> {
    let source = reconstruct_source(lines);

    let map = match resolver.analyze(&source) {
        Ok(map) => map,
        Err(ResolverError::Unparsable(reason)) => {
            warn!(
                file = path,
                %reason,
                "Could not parse {}, method level coverage is unavailable for it",
                path
            );
            return Ok(MethodData::Unavailable { reason });
        }
        Err(source) => {
            return Err(CoverageError::Resolver {
                file: path.to_string(),
                source,
            })
        }
    };

    let methods = tally_methods(&map, lines)
        .into_iter()
        .map(|(name, tally)| (name, tally.uncovered_percent()))
        .collect();

    Ok(MethodData::Resolved(methods))
}
