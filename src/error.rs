//! Error types for the cliquer library.

use thiserror::Error;

/// Errors that can occur in the cliquer library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliqueError {
    /// A file could not be read.
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A DIMACS line could not be parsed.
    #[error("line {line}: unparseable DIMACS line: {content:?}")]
    Parse { line: usize, content: String },

    /// The instance is missing its `p edge <n> <m>` problem line.
    #[error("missing DIMACS problem line (expected `p edge <n> <m>`)")]
    MissingProblemLine,

    /// The number of `e` lines does not match the declared edge count.
    #[error("edge count mismatch: header declares {declared}, found {found} edge lines")]
    EdgeCountMismatch { declared: usize, found: usize },

    /// An edge is a self-loop or references a vertex outside the declared range.
    #[error("line {line}: edge ({u}, {v}) is invalid for a simple graph on 1..={num_vertices}")]
    InvalidEdge {
        line: usize,
        u: usize,
        v: usize,
        num_vertices: usize,
    },

    /// The LP backend failed to solve the current relaxation.
    #[error("LP solver failure: {0}")]
    LpSolver(String),

    /// A report could not be serialized or written.
    #[error("serialization failure: {0}")]
    Serialization(String),
}

/// Result type alias for cliquer operations.
pub type Result<T> = std::result::Result<T, CliqueError>;
