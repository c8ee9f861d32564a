use thiserror::Error;

/// Error type for graph construction.
///
/// Every variant means the caller handed in an invalid graph; nothing is
/// partially built when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An adjacency entry (source or neighbour) names a vertex that is not
    /// part of the vertex set.
    #[error("Invalid graph: adjacency references unknown vertex {0}")]
    UnknownVertex(String),

    /// The same identifier appears more than once in the vertex set.
    #[error("Invalid graph: vertex {0} is declared more than once")]
    DuplicateVertex(String),
}
