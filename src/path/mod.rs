// error module
mod error;
// explorer module
mod explorer;
// report module
mod report;
// verify module
mod verify;
// witness module
mod witness;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path module.
//─────────────────────────────────────────────────────────────────────────────
pub use error::{PathError, PathViolation};
pub use explorer::HamiltonianSearch;
pub use report::print_result_to_writer;
pub use verify::verify_path;
pub use witness::HamiltonianPath;
