use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Graph, VertexIndex};

use super::error::PathError;
use super::witness::HamiltonianPath;

/// Partial path owned by a single start-vertex attempt.
///
/// `visited[v]` is true exactly when `v` is on `path`.
struct SearchState {
    path: Vec<VertexIndex>,
    visited: Vec<bool>,
}

impl SearchState {
    fn new(vertex_count: usize, start: VertexIndex) -> Self {
        let mut state = Self {
            path: Vec::with_capacity(vertex_count),
            visited: vec![false; vertex_count],
        };
        state.push(start);
        state
    }

    fn push(&mut self, vertex: VertexIndex) {
        self.path.push(vertex);
        self.visited[vertex] = true;
    }

    fn pop(&mut self) {
        if let Some(vertex) = self.path.pop() {
            self.visited[vertex] = false;
        }
    }
}

/// `HamiltonianSearch` decides whether a graph has a Hamiltonian path and
/// returns the first one found.
///
/// Start vertices are tried in vertex order and neighbours in adjacency order,
/// so the same graph always yields the same path. The search is exhaustive
/// backtracking with no pruning beyond the visited set; its worst case is
/// `O(n * n!)`, and callers that need a deadline must impose one themselves.
pub struct HamiltonianSearch;

impl HamiltonianSearch {
    /// Returns a Hamiltonian path of `graph`, or `None` if there is none.
    ///
    /// # Errors
    /// Returns `PathError::EmptyGraph` when the graph has no vertices.
    pub fn find_path<V>(graph: &Graph<V>) -> Result<Option<HamiltonianPath<V>>, PathError>
    where
        V: Clone,
    {
        if graph.is_empty() {
            return Err(PathError::EmptyGraph);
        }

        let found = (0..graph.vertex_count()).find_map(|start| Self::extend_from(graph, start));
        Ok(found.map(|indices| HamiltonianPath::from_indices(graph, &indices)))
    }

    /// Returns a Hamiltonian path that begins at `start`, or `None` if no such path exists.
    ///
    /// # Errors
    /// Returns `PathError::EmptyGraph` for a graph without vertices and
    /// `PathError::UnknownStart` when `start` is not one of its vertices.
    pub fn find_path_from<V>(
        graph: &Graph<V>,
        start: &V,
    ) -> Result<Option<HamiltonianPath<V>>, PathError>
    where
        V: Eq + Hash + Clone + Debug,
    {
        if graph.is_empty() {
            return Err(PathError::EmptyGraph);
        }
        let start = graph
            .index_of(start)
            .ok_or_else(|| PathError::UnknownStart(format!("{:?}", start)))?;

        Ok(Self::extend_from(graph, start)
            .map(|indices| HamiltonianPath::from_indices(graph, &indices)))
    }

    /// Same contract and result as [`HamiltonianSearch::find_path`], with the
    /// per-start attempts spread over the rayon pool.
    ///
    /// `find_map_first` keeps the lowest-indexed success and abandons attempts
    /// for later starts once one is known, so the returned path is the one the
    /// sequential search would return.
    #[cfg(feature = "parallel")]
    pub fn find_path_parallel<V>(
        graph: &Graph<V>,
    ) -> Result<Option<HamiltonianPath<V>>, PathError>
    where
        V: Clone + Sync,
    {
        use rayon::prelude::*;

        if graph.is_empty() {
            return Err(PathError::EmptyGraph);
        }

        let found = (0..graph.vertex_count())
            .into_par_iter()
            .find_map_first(|start| Self::extend_from(graph, start));
        Ok(found.map(|indices| HamiltonianPath::from_indices(graph, &indices)))
    }

    /// Depth-first backtracking rooted at `start`.
    ///
    /// Each frame is `(vertex, next neighbour slot to try)`; frames and
    /// `state.path` grow and shrink together.
    fn extend_from<V>(graph: &Graph<V>, start: VertexIndex) -> Option<Vec<VertexIndex>> {
        let target = graph.vertex_count();
        let mut state = SearchState::new(target, start);
        let mut frames: Vec<(VertexIndex, usize)> = vec![(start, 0)];

        while let Some(frame) = frames.last_mut() {
            if state.path.len() == target {
                return Some(state.path);
            }

            let (vertex, cursor) = *frame;
            let neighbors = graph.neighbor_indices(vertex);
            let next = neighbors
                .iter()
                .enumerate()
                .skip(cursor)
                .find(|&(_, &candidate)| !state.visited[candidate]);

            match next {
                Some((slot, &candidate)) => {
                    frame.1 = slot + 1;
                    state.push(candidate);
                    frames.push((candidate, 0));
                }
                None => {
                    // Dead end: undo this vertex and resume its parent.
                    frames.pop();
                    state.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;
    use crate::path::verify_path;

    fn adjacency(entries: &[(u32, &[u32])]) -> Graph<u32> {
        Graph::from_adjacency(
            entries
                .iter()
                .map(|(vertex, neighbors)| (*vertex, neighbors.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn two_triangles() -> Graph<u32> {
        adjacency(&[
            (0, &[1, 2]),
            (1, &[0, 2]),
            (2, &[0, 1]),
            (3, &[4, 5]),
            (4, &[3, 5]),
            (5, &[3, 4]),
        ])
    }

    #[test]
    fn test_empty_graph_is_an_error() {
        let graph = Graph::<u32>::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(HamiltonianSearch::find_path(&graph), Err(PathError::EmptyGraph));
    }

    #[test]
    fn test_single_vertex_is_its_own_path() {
        let graph = Graph::new(vec![7u32], Vec::new()).unwrap();
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.vertices(), &[7]);
    }

    #[test]
    fn test_square_returns_first_path_in_adjacency_order() {
        let graph = adjacency(&[(0, &[1, 3]), (1, &[0, 2]), (2, &[1, 3]), (3, &[0, 2])]);
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.vertices(), &[0, 1, 2, 3]);
        assert_eq!(verify_path(&graph, path.vertices()), Ok(()));
    }

    #[test]
    fn test_disjoint_triangles_have_no_path() {
        assert_eq!(HamiltonianSearch::find_path(&two_triangles()), Ok(None));
    }

    #[test]
    fn test_directed_chain_has_exactly_one_path() {
        let graph = adjacency(&[(0, &[1]), (1, &[2]), (2, &[3]), (3, &[])]);
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.into_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_chain_end_cannot_start_a_path() {
        let graph = adjacency(&[(0, &[1]), (1, &[2]), (2, &[3]), (3, &[])]);
        assert_eq!(HamiltonianSearch::find_path_from(&graph, &3), Ok(None));
        assert!(HamiltonianSearch::find_path_from(&graph, &0).unwrap().is_some());
    }

    #[test]
    fn test_unknown_start_is_an_error() {
        let graph = adjacency(&[(0, &[1]), (1, &[])]);
        assert!(matches!(
            HamiltonianSearch::find_path_from(&graph, &9),
            Err(PathError::UnknownStart(_))
        ));
    }

    #[test]
    fn test_later_start_vertex_is_tried_after_failures() {
        // Only 2 -> 0 -> 1 covers everything.
        let graph = adjacency(&[(0, &[1]), (1, &[]), (2, &[0])]);
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.vertices(), &[2, 0, 1]);
    }

    #[test]
    fn test_backtracks_out_of_dead_ends() {
        // From 0 the first choice 1 is a dead end; the path must go 0 -> 2 -> 1 -> 3.
        let graph = adjacency(&[(0, &[1, 2]), (1, &[3]), (2, &[1]), (3, &[])]);
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.vertices(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_diamond_dag_has_no_path() {
        let graph = adjacency(&[(0, &[1, 2]), (1, &[3]), (2, &[3]), (3, &[])]);
        assert_eq!(HamiltonianSearch::find_path(&graph), Ok(None));
    }

    #[test]
    fn test_search_is_repeatable() {
        let graph = adjacency(&[
            (0, &[1, 2]),
            (1, &[0, 2, 3]),
            (2, &[0, 1, 3]),
            (3, &[1, 2]),
        ]);
        let first = HamiltonianSearch::find_path(&graph).unwrap();
        let second = HamiltonianSearch::find_path(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_result_verifies_on_complete_graphs() {
        for n in 1..=6u32 {
            let vertices: Vec<u32> = (0..n).collect();
            let edges = vertices
                .iter()
                .flat_map(|&a| vertices.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
                .collect::<Vec<_>>();
            let graph = Graph::from_edges(vertices, edges, Direction::Undirected).unwrap();
            let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
            assert_eq!(path.len(), n as usize);
            assert_eq!(verify_path(&graph, path.vertices()), Ok(()));
        }
    }

    #[test]
    fn test_star_graph_has_no_path() {
        let graph = Graph::from_edges(
            vec!["hub", "a", "b", "c"],
            vec![("hub", "a"), ("hub", "b"), ("hub", "c")],
            Direction::Undirected,
        )
        .unwrap();
        assert_eq!(HamiltonianSearch::find_path(&graph), Ok(None));
    }

    #[test]
    fn test_string_vertices() {
        let graph = Graph::from_edges(
            vec!["x".to_string(), "y".to_string()],
            vec![("y".to_string(), "x".to_string())],
            Direction::Directed,
        )
        .unwrap();
        let path = HamiltonianSearch::find_path(&graph).unwrap().unwrap();
        assert_eq!(path.to_string(), "y -> x");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_search_matches_sequential() {
        let graphs = vec![
            adjacency(&[(0, &[1]), (1, &[]), (2, &[0])]),
            adjacency(&[(0, &[1, 2]), (1, &[3]), (2, &[1]), (3, &[])]),
            two_triangles(),
        ];
        for graph in &graphs {
            assert_eq!(
                HamiltonianSearch::find_path_parallel(graph),
                HamiltonianSearch::find_path(graph)
            );
        }
        let empty = Graph::<u32>::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(HamiltonianSearch::find_path_parallel(&empty), Err(PathError::EmptyGraph));
    }
}
