pub mod error;
mod loader;

pub use error::LoaderError;
pub use loader::{load_graph_from_file, parse_graph};
