use std::fmt;

use crate::graph::{Graph, VertexIndex};

/// A complete Hamiltonian path: every graph vertex exactly once, in visiting order.
///
/// Only the search produces these, so a value of this type is never partial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HamiltonianPath<V> {
    vertices: Vec<V>,
}

impl<V: Clone> HamiltonianPath<V> {
    /// Resolves a sequence of vertex positions against the graph they came from.
    pub(crate) fn from_indices(graph: &Graph<V>, indices: &[VertexIndex]) -> Self {
        let vertices = indices
            .iter()
            .filter_map(|&position| graph.vertex(position).cloned())
            .collect();
        Self { vertices }
    }
}

impl<V> HamiltonianPath<V> {
    /// Vertices in visiting order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Consecutive `(from, to)` pairs; these are the edges a renderer would highlight.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }
}

impl<V: fmt::Display> fmt::Display for HamiltonianPath<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, vertex) in self.vertices.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::HamiltonianSearch;

    fn chain() -> Graph<u32> {
        Graph::from_adjacency(vec![(0, vec![1]), (1, vec![2]), (2, vec![])]).unwrap()
    }

    #[test]
    fn test_endpoints_and_edges() {
        let path = HamiltonianSearch::find_path(&chain()).unwrap().unwrap();
        assert!(!path.is_empty());
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&2));
        let edges: Vec<(u32, u32)> = path.edges().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
        assert_eq!(path.to_string(), "0 -> 1 -> 2");
    }

    #[test]
    fn test_single_vertex_path_has_no_edges() {
        let graph = Graph::new(vec![5u32], Vec::new()).unwrap();
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.first(), path.last());
        assert_eq!(path.edges().count(), 0);
        assert_eq!(path.to_string(), "5");
    }
}
