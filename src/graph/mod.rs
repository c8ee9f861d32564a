// error module
mod error;
// graph module
#[allow(clippy::module_inception)]
mod graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GraphError;
pub use graph::{Direction, Graph, VertexIndex};
