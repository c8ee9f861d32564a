// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Immutable directed adjacency graph used by the Hamiltonian path search.
//
// Vertices are kept in the order the caller supplied them and every adjacency
// list keeps its insertion order, so a search over the same graph always
// explores candidates in the same order.  Undirected graphs are stored as two
// directed entries per edge; the graph itself carries no direction flag.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use super::error::GraphError;

/// Position of a vertex in the graph's vertex order.
pub type VertexIndex = usize;

/// How an edge list handed to [`Graph::from_edges`] should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// `(u, v)` only adds `u -> v`.
    #[default]
    Directed,
    /// `(u, v)` adds `u -> v` and `v -> u`.
    Undirected,
}

impl Direction {
    pub fn is_directed(self) -> bool {
        matches!(self, Direction::Directed)
    }
}

/// A graph over vertices of type `V`, built once and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    vertices: Vec<V>,
    index: HashMap<V, VertexIndex>,
    adjacency: Vec<Vec<VertexIndex>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Builds a graph from an ordered vertex set and an adjacency mapping.
    ///
    /// Vertices without an adjacency entry simply have no outgoing edges.
    /// An entry whose source or neighbour is not in `vertices` fails the whole
    /// construction with [`GraphError::UnknownVertex`].
    pub fn new(vertices: Vec<V>, adjacency: Vec<(V, Vec<V>)>) -> Result<Self, GraphError> {
        let index = Self::index_vertices(&vertices)?;
        let mut lists: Vec<Vec<VertexIndex>> = vec![Vec::new(); vertices.len()];

        for (source, neighbors) in adjacency {
            let from = Self::lookup(&index, &source)?;
            for neighbor in &neighbors {
                let to = Self::lookup(&index, neighbor)?;
                lists[from].push(to);
            }
        }

        Ok(Self {
            vertices,
            index,
            adjacency: lists,
        })
    }

    /// Builds a graph whose vertex set is exactly the adjacency keys, in order.
    pub fn from_adjacency(adjacency: Vec<(V, Vec<V>)>) -> Result<Self, GraphError> {
        let vertices = adjacency.iter().map(|(vertex, _)| vertex.clone()).collect();
        Self::new(vertices, adjacency)
    }

    /// Builds a graph from an ordered edge list.
    ///
    /// For [`Direction::Undirected`] the reversed entries are appended after
    /// all explicit ones, so an already symmetric edge list keeps its declared
    /// neighbour order. Repeated entries are dropped.
    pub fn from_edges<I>(vertices: Vec<V>, edges: I, direction: Direction) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let index = Self::index_vertices(&vertices)?;
        let mut pairs = Vec::new();
        for (from, to) in edges {
            pairs.push((Self::lookup(&index, &from)?, Self::lookup(&index, &to)?));
        }

        let mut lists: Vec<Vec<VertexIndex>> = vec![Vec::new(); vertices.len()];
        let mut insert = |from: VertexIndex, to: VertexIndex| {
            if !lists[from].contains(&to) {
                lists[from].push(to);
            }
        };
        for &(from, to) in &pairs {
            insert(from, to);
        }
        if !direction.is_directed() {
            for &(from, to) in &pairs {
                insert(to, from);
            }
        }

        Ok(Self {
            vertices,
            index,
            adjacency: lists,
        })
    }

    fn index_vertices(vertices: &[V]) -> Result<HashMap<V, VertexIndex>, GraphError> {
        let mut index = HashMap::with_capacity(vertices.len());
        for (position, vertex) in vertices.iter().enumerate() {
            if index.insert(vertex.clone(), position).is_some() {
                return Err(GraphError::DuplicateVertex(format!("{:?}", vertex)));
            }
        }
        Ok(index)
    }

    fn lookup(index: &HashMap<V, VertexIndex>, vertex: &V) -> Result<VertexIndex, GraphError> {
        index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(format!("{:?}", vertex)))
    }

    /// Returns the position of `vertex` in the vertex order.
    pub fn index_of(&self, vertex: &V) -> Option<VertexIndex> {
        self.index.get(vertex).copied()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the out-neighbours of `vertex` in insertion order.
    ///
    /// A vertex without outgoing edges, or one that is not in the graph,
    /// yields nothing.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        let list: &'a [VertexIndex] = match self.index.get(vertex) {
            Some(&position) => &self.adjacency[position],
            None => &[],
        };
        list.iter().map(move |&to| &self.vertices[to])
    }

    /// Returns true if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => self.adjacency[from].contains(&to),
            _ => false,
        }
    }
}

impl<V> Graph<V> {
    /// Number of vertices, fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in construction order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Returns the vertex stored at `position`.
    pub fn vertex(&self, position: VertexIndex) -> Option<&V> {
        self.vertices.get(position)
    }

    /// Out-neighbours of the vertex at `position`, as positions.
    pub fn neighbor_indices(&self, position: VertexIndex) -> &[VertexIndex] {
        self.adjacency
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of directed adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// All directed edges, grouped by source in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(from, list)| {
            list.iter()
                .map(move |&to| (&self.vertices[from], &self.vertices[to]))
        })
    }

    /// Edges with each unordered pair listed once; the first orientation seen wins.
    pub fn undirected_edges(&self) -> Vec<(&V, &V)> {
        let mut seen: HashSet<(VertexIndex, VertexIndex)> = HashSet::new();
        let mut edges = Vec::new();
        for (from, list) in self.adjacency.iter().enumerate() {
            for &to in list {
                let key = (from.min(to), from.max(to));
                if seen.insert(key) {
                    edges.push((&self.vertices[from], &self.vertices[to]));
                }
            }
        }
        edges
    }
}
