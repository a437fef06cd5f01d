//! Error types for report analysis

use thiserror::Error;

/// Failure reported by a method resolver.
///
/// Resolvers must tell apart source they cannot parse from every other
/// failure; only the former is recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("source could not be parsed: {0}")]
    Unparsable(String),
    #[error("resolver failure: {0}")]
    Other(String),
}

impl ResolverError {
    pub fn is_unparsable(&self) -> bool {
        matches!(self, ResolverError::Unparsable(_))
    }
}

#[derive(Debug, Error)]
pub enum CoverageError {
    /// Header and body segments do not pair up after the preamble.
    #[error("Malformed report: expected header/body pairs after the preamble, found {segments} segment(s)")]
    MalformedReport { segments: usize },

    /// The file has no significant lines, so no run percentage exists.
    #[error("{file}: no significant lines, cannot compute percent run")]
    DivisionByZero { file: String },

    #[error("{file}: method resolver failed: {source}")]
    Resolver {
        file: String,
        #[source]
        source: ResolverError,
    },
}
