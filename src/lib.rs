//! Hamiltonian path search by backtracking.
//!
//! Build a [`graph::Graph`] from ordered vertices and adjacency lists, then ask
//! [`path::HamiltonianSearch::find_path`] for a path that visits every vertex
//! exactly once. `Ok(None)` means no such path exists; an empty graph is an
//! error.

pub mod graph;
pub mod graph_loader;
pub mod path;
