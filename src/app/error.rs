use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph loading error: {0}")]
    GraphLoad(#[from] hampath::graph_loader::LoaderError),
    #[error("{0}")]
    Graph(#[from] hampath::graph::GraphError),
    #[error("Path search error: {0}")]
    Path(#[from] hampath::path::PathError),
    #[error("Search returned an invalid path for '{title}': {violation}")]
    Verification {
        title: String,
        violation: hampath::path::PathViolation,
    },
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
