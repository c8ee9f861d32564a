use std::collections::HashSet;
use std::fs;

use super::error::LoaderError;
use crate::graph::{Direction, Graph};

//─────────────────────────────────────────────────────────────────────────────

/// Loads an adjacency list file and builds a graph from it.
pub fn load_graph_from_file(
    file_path: &str,
    direction: Direction,
) -> Result<Graph<String>, LoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| LoaderError::ReadFile(file_path.into(), e))?;

    parse_graph(&file_content, direction)
}

/// Parses adjacency list text of the form `vertex: neighbour neighbour ...`.
///
/// Vertices are ordered by the line that declares them. Neighbours may be
/// separated by whitespace or commas; `#` starts a comment.
pub fn parse_graph(source: &str, direction: Direction) -> Result<Graph<String>, LoaderError> {
    let mut declared: HashSet<String> = HashSet::new();
    let mut vertices: Vec<String> = Vec::new();
    let mut edges: Vec<(String, String)> = Vec::new();

    for (offset, raw_line) in source.lines().enumerate() {
        let line_number = offset + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (vertex, neighbors) = parse_line(line, line_number)?;
        if !declared.insert(vertex.clone()) {
            return Err(LoaderError::DuplicateVertex {
                line: line_number,
                vertex,
            });
        }
        edges.extend(neighbors.into_iter().map(|n| (vertex.clone(), n)));
        vertices.push(vertex);
    }

    Ok(Graph::from_edges(vertices, edges, direction)?)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Splits one non-empty line into its vertex and neighbour tokens.
fn parse_line(line: &str, line_number: usize) -> Result<(String, Vec<String>), LoaderError> {
    let syntax = |message: &str| LoaderError::Syntax {
        line: line_number,
        message: message.to_string(),
    };

    let (head, tail) = line
        .split_once(':')
        .ok_or_else(|| syntax("expected 'vertex: neighbours'"))?;

    let vertex = head.trim();
    if vertex.is_empty() {
        return Err(syntax("missing vertex identifier before ':'"));
    }
    if vertex.chars().any(is_separator) {
        return Err(syntax("vertex identifier must be a single token"));
    }
    if tail.contains(':') {
        return Err(syntax("only one ':' is allowed per line"));
    }

    let neighbors = tail
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    Ok((vertex.to_string(), neighbors))
}
