//! Error types shared across the crate

use thiserror::Error;

/// Errors raised when the search machinery is used without its minimum
/// required configuration. These indicate a programming or deployment
/// mistake, not a transient condition: callers propagate them rather than
/// retry, and the presentation layer turns them into an operator-visible
/// failure.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A category or combined search is missing required configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A regex lookup was given query text that does not compile as a
    /// pattern.
    #[error("invalid lookup pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SearchError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
