//! Handles the core logic of processing graphs for the path search.
//!
//! This module includes loading graphs from files or the built-in demos,
//! running the Hamiltonian path search, re-verifying its result, and writing
//! the per-graph detail report.

use super::demos::DEMO_GRAPHS;
use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use hampath::graph::{Direction, Graph};
use hampath::graph_loader;
use hampath::path::{self, HamiltonianPath, HamiltonianSearch};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// A graph waiting to be searched, with the title and direction used to report it.
pub struct GraphJob {
    pub title: String,
    pub direction: Direction,
    pub graph: Graph<String>,
}

/// Loads a graph from an adjacency list file.
///
/// # Errors
/// Returns `AppError::InvalidPath` for a non UTF-8 path and
/// `AppError::GraphLoad` when the file cannot be read or parsed.
pub fn load_graph_file(
    graph_file_path: &Path,
    direction: Direction,
    quiet_mode: bool,
) -> Result<Graph<String>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading graph from file...");
    let graph_file_str = graph_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(graph_file_path.display().to_string()))?;

    let graph = graph_loader::load_graph_from_file(graph_file_str, direction)?;
    verbose_println!(
        quiet_mode,
        "   => Loaded {} vertices and {} directed edges.",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Builds every built-in demonstration graph, in order.
pub fn load_demo_graphs(quiet_mode: bool) -> Result<Vec<GraphJob>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Building demonstration graphs...");
    let mut jobs = Vec::with_capacity(DEMO_GRAPHS.len());
    for (i, demo) in DEMO_GRAPHS.iter().enumerate() {
        jobs.push(GraphJob {
            title: format!("Example {}: {}", i + 1, demo.name),
            direction: demo.direction,
            graph: demo.build()?,
        });
    }
    verbose_println!(quiet_mode, "   => Built {} graph(s).", jobs.len());
    Ok(jobs)
}

/// Searches one graph for a Hamiltonian path.
///
/// This involves:
/// 1. Running the backtracking search and timing it.
/// 2. Re-verifying any path it returns against the graph.
/// 3. Writing the graph and outcome to `report_writer`.
///
/// # Returns
/// `Ok(Some(path))` when a path exists and `Ok(None)` when none does.
///
/// # Errors
/// `AppError::Path` for an empty graph and `AppError::Verification` if the
/// search produced a path that fails re-validation. A failed report write is
/// logged and otherwise ignored.
pub fn process_graph(
    job: &GraphJob,
    quiet_mode: bool,
    report_writer: &mut dyn Write,
) -> Result<Option<HamiltonianPath<String>>, AppError> {
    verbose_println!(
        quiet_mode,
        "\n------------------------------------------------------------"
    );
    verbose_println!(quiet_mode, "Graph: {}", job.title);
    verbose_println!(
        quiet_mode,
        "------------------------------------------------------------"
    );
    verbose_println!(
        quiet_mode,
        "   {} vertices, {} directed edges, {}",
        job.graph.vertex_count(),
        job.graph.edge_count(),
        if job.direction.is_directed() { "directed" } else { "undirected" }
    );

    verbose_println!(quiet_mode, "[STEP 2] Searching for a Hamiltonian path...");
    let started = Instant::now();
    let result = HamiltonianSearch::find_path(&job.graph);
    let elapsed = started.elapsed();
    let found = result.map_err(|e| {
        verbose_eprintln!(quiet_mode, "   Search failed for {}: {}", job.title, e);
        AppError::Path(e)
    })?;
    verbose_println!(quiet_mode, "   => Search finished in {:?}.", elapsed);

    verbose_println!(quiet_mode, "[STEP 3] Verifying the result...");
    match &found {
        Some(found_path) => {
            path::verify_path(&job.graph, found_path.vertices()).map_err(|violation| {
                AppError::Verification {
                    title: job.title.clone(),
                    violation,
                }
            })?;
            verbose_println!(quiet_mode, "   => Path verified: {}", found_path);
        }
        None => verbose_println!(quiet_mode, "   => No Hamiltonian path exists."),
    }

    if let Err(e) = path::print_result_to_writer(
        &job.title,
        &job.graph,
        job.direction,
        found.as_ref(),
        report_writer,
    ) {
        verbose_eprintln!(
            quiet_mode,
            "   [ERROR] Failed to write report for {}: {}",
            job.title,
            e
        );
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_jobs_are_titled_in_order() {
        let jobs = load_demo_graphs(true).unwrap();
        assert_eq!(jobs.len(), DEMO_GRAPHS.len());
        assert_eq!(jobs[0].title, "Example 1: Undirected graph 1");
        assert_eq!(jobs[3].direction, Direction::Directed);
    }

    #[test]
    fn test_process_graph_writes_report() {
        let jobs = load_demo_graphs(true).unwrap();
        let mut report = Vec::new();
        let found = process_graph(&jobs[1], true, &mut report).unwrap();
        assert_eq!(found.unwrap().to_string(), "0 -> 1 -> 2 -> 3");

        let text = String::from_utf8(report).unwrap();
        assert!(text.contains("=== Example 2: Directed graph 2 ==="));
        assert!(text.contains("Hamiltonian path: 0 -> 1 -> 2 -> 3"));
    }

    #[test]
    fn test_process_graph_without_path() {
        let jobs = load_demo_graphs(true).unwrap();
        let mut report = Vec::new();
        assert!(process_graph(&jobs[3], true, &mut report).unwrap().is_none());
        assert!(String::from_utf8(report).unwrap().contains("Hamiltonian path: none"));
    }

    #[test]
    fn test_process_empty_graph_is_an_error() {
        let job = GraphJob {
            title: "empty".to_string(),
            direction: Direction::Directed,
            graph: Graph::new(Vec::new(), Vec::new()).unwrap(),
        };
        let mut report = Vec::new();
        assert!(matches!(
            process_graph(&job, true, &mut report),
            Err(AppError::Path(path::PathError::EmptyGraph))
        ));
        assert!(report.is_empty());
    }

    #[test]
    fn test_load_graph_file() {
        let file_path = std::env::temp_dir().join("hampath_processing_test.txt");
        std::fs::write(&file_path, "a: b\nb: c\nc:\n").expect("Unable to write test file");
        let graph = load_graph_file(&file_path, Direction::Undirected, true).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        std::fs::remove_file(&file_path).ok();
    }
}
