use thiserror::Error;

use crate::graph::GraphError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph file loading operations.
/// This error type is used to represent the various ways an adjacency list
/// file can fail to become a graph.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a line is not of the form `vertex: neighbours`.
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Error when the same vertex is declared on two lines.
    #[error("Vertex '{vertex}' on line {line} was already declared")]
    DuplicateVertex { line: usize, vertex: String },

    /// Error when the parsed adjacency does not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
