//! Error types for graph parsing and construction.

use thiserror::Error;

/// Errors produced while turning edge records into a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A record did not parse as three valid fields (strict mode only).
    #[error("malformed edge record at line {line}: {content:?}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, as read.
        content: String,
    },
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
