//! Main application orchestrator.
//!
//! Coordinates a run:
//! 1. Initializes logging.
//! 2. Loads the graph file given on the command line, or the built-in demo graphs.
//! 3. Opens the detail report writer.
//! 4. Searches each graph via `processing::process_graph` and prints its result.
//!    The verbose log is flushed after each graph if not in quiet mode.
//! 5. Prints a closing summary.
//!
//! With a graph file, a failed search is returned as an error. In demo mode a
//! failing graph is reported and the remaining graphs still run.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing::{self, GraphJob};
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use hampath::graph::Direction;
use std::io::Write; // For BufWriter::flush
use std::path::Path;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the graph file cannot be loaded, the report file
/// cannot be created, or the search of a graph file fails.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let direction = if cli.undirected {
        Direction::Undirected
    } else {
        Direction::Directed
    };

    // Initialize global logger if not in quiet mode.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without a verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let jobs = match &cli.graph_file {
        Some(graph_file_path) => {
            let title = file_handler::validate_graph_file_and_get_title(graph_file_path, quiet_mode)?;
            verbose_println!(
                quiet_mode,
                "\n============================================================"
            );
            verbose_println!(quiet_mode, "Processing File: {}", graph_file_path.display());
            verbose_println!(
                quiet_mode,
                "============================================================"
            );
            let graph = processing::load_graph_file(graph_file_path, direction, quiet_mode)?;
            vec![GraphJob {
                title,
                direction,
                graph,
            }]
        }
        None => processing::load_demo_graphs(quiet_mode)?,
    };

    let mut report_writer = file_handler::init_report_writer(&cli.report).map_err(|e| {
        verbose_eprintln!(
            quiet_mode,
            "[ERROR] Failed to open report file ({}): {}",
            cli.report.display(),
            e
        );
        AppError::Io(e)
    })?;

    let (paths_found, first_error) =
        search_jobs(&jobs, quiet_mode, &mut report_writer, &cli.log_file);

    if let Err(e) = report_writer.flush() {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Failed to flush report file ({}): {}",
            cli.report.display(),
            e
        );
    }

    verbose_println!(
        quiet_mode,
        "\n[INFO] Hamiltonian paths found in {} of {} graph(s).",
        paths_found,
        jobs.len()
    );
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of {}: {}", cli.log_file.display(), e);
        }
    }

    if cli.graph_file.is_some() {
        if let Some(e) = first_error {
            return Err(e);
        }
    }

    if quiet_mode {
        println!("Done.");
    } else {
        println!(
            "\nSearch finished. See '{}' for verbose output and '{}' for graph details.",
            cli.log_file.display(),
            cli.report.display()
        );
    }

    Ok(())
}


/// Searches every job in order and prints one result line per graph.
///
/// A failing graph is reported and the remaining graphs still run. Returns
/// the number of graphs with a path and the first error seen.
fn search_jobs(
    jobs: &[GraphJob],
    quiet_mode: bool,
    report_writer: &mut dyn Write,
    log_file: &Path,
) -> (usize, Option<AppError>) {
    let mut first_error: Option<AppError> = None;
    let mut paths_found = 0usize;

    for job in jobs {
        if !quiet_mode {
            println!("\n--- {} ---", job.title);
        }
        match processing::process_graph(job, quiet_mode, report_writer) {
            Ok(Some(path)) => {
                paths_found += 1;
                println!("Hamiltonian path found: {}", path);
            }
            Ok(None) => println!("No Hamiltonian path exists in this graph."),
            Err(e) => {
                verbose_eprintln!(quiet_mode, "[ERROR] During processing of '{}': {}", job.title, e);
                eprintln!("Error in '{}': {}", job.title, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        // Flush the verbose log after each graph so a long search leaves a readable trail.
        if !quiet_mode {
            if let Err(e) = logger::flush_global_logger() {
                eprintln!(
                    "[WARNING] Failed to flush {} after processing '{}': {}",
                    log_file.display(),
                    job.title,
                    e
                );
            }
        }
    }
    (paths_found, first_error)
}
