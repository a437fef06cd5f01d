//! Stub resolvers for tests

use std::cell::RefCell;

use super::{MethodMap, MethodResolver};
use crate::error::ResolverError;

/// Fixed inclusive line ranges, one per method
#[derive(Debug, Clone)]
pub(crate) struct TableMap {
    ranges: Vec<(usize, usize, String)>,
}

impl TableMap {
    fn lookup(&self, line_number: usize) -> Option<&str> {
        self.ranges
            .iter()
            .find(|(first, last, _)| (*first..=*last).contains(&line_number))
            .map(|(_, _, name)| name.as_str())
    }
}

impl MethodMap for TableMap {
    fn in_method(&self, line_number: usize) -> bool {
        self.lookup(line_number).is_some()
    }

    fn method_at(&self, line_number: usize) -> Option<&str> {
        self.lookup(line_number)
    }
}

/// Answers every file with the same table and records what it was asked
pub(crate) struct TableResolver {
    ranges: Vec<(usize, usize, String)>,
    unparsable_marker: Option<&'static str>,
    seen: RefCell<Vec<String>>,
}

impl TableResolver {
    pub(crate) fn new(ranges: &[(usize, usize, &str)]) -> Self {
        Self {
            ranges: ranges
                .iter()
                .map(|(first, last, name)| (*first, *last, name.to_string()))
                .collect(),
            unparsable_marker: None,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Fail with `Unparsable` for any source containing `marker`
    pub(crate) fn unparsable_when(mut self, marker: &'static str) -> Self {
        self.unparsable_marker = Some(marker);
        self
    }

    pub(crate) fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl MethodResolver for TableResolver {
    type Map = TableMap;

    fn analyze(&self, source: &str) -> Result<TableMap, ResolverError> {
        self.seen.borrow_mut().push(source.to_string());

        if let Some(marker) = self.unparsable_marker {
            if source.contains(marker) {
                return Err(ResolverError::Unparsable(format!("unexpected {}", marker)));
            }
        }

        Ok(TableMap {
            ranges: self.ranges.clone(),
        })
    }
}

pub(crate) struct FailingResolver(ResolverError);

pub(crate) fn failing(error: ResolverError) -> FailingResolver {
    FailingResolver(error)
}

impl MethodResolver for FailingResolver {
    type Map = TableMap;

    fn analyze(&self, _source: &str) -> Result<TableMap, ResolverError> {
        Err(self.0.clone())
    }
}
