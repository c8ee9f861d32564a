use std::fmt::Display;
use std::io::Write;

use crate::graph::{Direction, Graph};

use super::witness::HamiltonianPath;

fn format_vertices<V: Display>(vertices: &[V]) -> String {
    let items: Vec<String> = vertices.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn format_edges<V: Display>(edges: &[(&V, &V)]) -> String {
    let items: Vec<String> = edges
        .iter()
        .map(|(from, to)| format!("({}, {})", from, to))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Writes a graph and its search outcome to the given writer.
///
/// Undirected graphs list each edge once. `None` is reported as "no path",
/// which is a normal outcome rather than a failure.
pub fn print_result_to_writer<V: Display>(
    title: &str,
    graph: &Graph<V>,
    direction: Direction,
    result: Option<&HamiltonianPath<V>>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let edges: Vec<(&V, &V)> = match direction {
        Direction::Directed => graph.edges().collect(),
        Direction::Undirected => graph.undirected_edges(),
    };

    writeln!(writer, "=== {} ===", title)?;
    writeln!(
        writer,
        "Kind: {}",
        if direction.is_directed() { "directed" } else { "undirected" }
    )?;
    writeln!(
        writer,
        "Vertices ({}): {}",
        graph.vertex_count(),
        format_vertices(graph.vertices())
    )?;
    writeln!(writer, "Edges ({}): {}", edges.len(), format_edges(&edges))?;

    match result {
        Some(path) => {
            writeln!(writer, "Hamiltonian path: {}", path)?;
            let steps: Vec<(&V, &V)> = path.edges().collect();
            writeln!(writer, "Path edges: {}", format_edges(&steps))?;
        }
        None => writeln!(writer, "Hamiltonian path: none")?,
    }
    writeln!(writer)?;
    Ok(())
}
