use thiserror::Error;

// Error type for Hamiltonian path search operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when the graph has no vertices, so there is nothing to path through.
    #[error("Graph is empty, a Hamiltonian path is undefined without vertices.")]
    EmptyGraph,

    /// Error when a search is rooted at a vertex the graph does not contain.
    #[error("Start vertex {0} is not part of the graph.")]
    UnknownStart(String),
}

// Reasons a candidate path fails re-validation against its graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    /// The path does not contain exactly one entry per vertex.
    #[error("Path has {found} vertices, expected {expected}")]
    WrongLength { expected: usize, found: usize },

    /// The path names a vertex outside the graph.
    #[error("Path visits unknown vertex {0}")]
    UnknownVertex(String),

    /// The path visits a vertex twice.
    #[error("Path visits vertex {0} more than once")]
    RepeatedVertex(String),

    /// Two consecutive path vertices are not joined by an edge.
    #[error("Path steps from {from} to {to} but the graph has no such edge")]
    MissingEdge { from: String, to: String },
}
