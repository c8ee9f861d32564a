use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;

use super::error::PathViolation;

/// Checks that `path` is a Hamiltonian path of `graph`.
///
/// The path must have exactly one entry per vertex, use only known vertices,
/// never repeat one, and follow an existing edge at every step.
pub fn verify_path<V>(graph: &Graph<V>, path: &[V]) -> Result<(), PathViolation>
where
    V: Eq + Hash + Clone + Debug,
{
    if path.len() != graph.vertex_count() {
        return Err(PathViolation::WrongLength {
            expected: graph.vertex_count(),
            found: path.len(),
        });
    }

    let mut seen = vec![false; graph.vertex_count()];
    for vertex in path {
        let position = graph
            .index_of(vertex)
            .ok_or_else(|| PathViolation::UnknownVertex(format!("{:?}", vertex)))?;
        if std::mem::replace(&mut seen[position], true) {
            return Err(PathViolation::RepeatedVertex(format!("{:?}", vertex)));
        }
    }

    for pair in path.windows(2) {
        if !graph.has_edge(&pair[0], &pair[1]) {
            return Err(PathViolation::MissingEdge {
                from: format!("{:?}", pair[0]),
                to: format!("{:?}", pair[1]),
            });
        }
    }
    Ok(())
}
