//! Built-in demonstration graphs, run when no graph file is given.

use hampath::graph::{Direction, Graph, GraphError};

/// A named adjacency list with the direction it should be read in.
pub struct DemoGraph {
    pub name: &'static str,
    pub direction: Direction,
    pub adjacency: &'static [(u32, &'static [u32])],
}

impl DemoGraph {
    /// Builds the graph with vertex identifiers rendered as strings.
    pub fn build(&self) -> Result<Graph<String>, GraphError> {
        Graph::from_adjacency(
            self.adjacency
                .iter()
                .map(|(vertex, neighbors)| {
                    (
                        vertex.to_string(),
                        neighbors.iter().map(u32::to_string).collect(),
                    )
                })
                .collect(),
        )
    }
}

pub const DEMO_GRAPHS: &[DemoGraph] = &[
    DemoGraph {
        name: "Undirected graph 1",
        direction: Direction::Undirected,
        adjacency: &[(0, &[1, 2]), (1, &[0, 2, 3]), (2, &[0, 1, 3]), (3, &[1, 2])],
    },
    DemoGraph {
        name: "Directed graph 2",
        direction: Direction::Directed,
        adjacency: &[(0, &[1]), (1, &[2]), (2, &[3]), (3, &[])],
    },
    DemoGraph {
        name: "Undirected graph 3",
        direction: Direction::Undirected,
        adjacency: &[(0, &[1, 2]), (1, &[0, 2]), (2, &[0, 1, 3]), (3, &[2])],
    },
    DemoGraph {
        name: "Directed graph 4",
        direction: Direction::Directed,
        adjacency: &[(0, &[1, 2]), (1, &[3]), (2, &[3]), (3, &[])],
    },
    DemoGraph {
        name: "Undirected graph 5",
        direction: Direction::Undirected,
        adjacency: &[(0, &[1]), (1, &[0, 2, 3]), (2, &[1, 3]), (3, &[1, 2])],
    },
];
