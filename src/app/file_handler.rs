//! Provides utility functions for file system operations used by the application.
//!
//! This includes validating the graph file path, deriving a title for it, and
//! initializing the report writer. It uses macros from the parent `app` module
//! for verbose logging.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Validates the given graph file path and derives a display title from it.
///
/// Checks that the path exists and points to a file. The title is the file
/// stem, so `graphs/square.txt` is reported as `square`.
///
/// # Errors
/// Returns `AppError::General` if the path is missing or not a file, and
/// `AppError::InvalidPath` if no title can be derived from it.
pub fn validate_graph_file_and_get_title(
    graph_file_path: &Path,
    quiet_mode: bool,
) -> Result<String, AppError> {
    if !graph_file_path.exists() {
        let error_msg = format!("File not found: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !graph_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    graph_file_path
        .file_stem()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            verbose_eprintln!(
                quiet_mode,
                "Input Error: could not derive a title from {}",
                graph_file_path.display()
            );
            AppError::InvalidPath(graph_file_path.display().to_string())
        })
}

/// Initializes and returns a `BufWriter<File>` for the detail report.
///
/// The file is truncated so it only describes the current run. The writer is
/// not flushed here; the orchestrator flushes it once every graph is done.
pub fn init_report_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_title_is_file_stem() {
        let file_path = std::env::temp_dir().join("hampath_title_square.txt");
        std::fs::write(&file_path, "0:\n").expect("Unable to write test file");
        let title = validate_graph_file_and_get_title(&file_path, true).unwrap();
        assert_eq!(title, "hampath_title_square");
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = validate_graph_file_and_get_title(Path::new("/no/such/graph.txt"), true);
        assert!(matches!(result, Err(AppError::General(_))));
    }

    #[test]
    fn test_directory_is_rejected() {
        let result = validate_graph_file_and_get_title(&std::env::temp_dir(), true);
        assert!(matches!(result, Err(AppError::General(_))));
    }

    #[test]
    fn test_report_writer_truncates() {
        let file_path = std::env::temp_dir().join("hampath_report_writer.log");
        std::fs::write(&file_path, "stale content").expect("Unable to write test file");
        {
            let mut writer = init_report_writer(&file_path).unwrap();
            writer.write_all(b"fresh").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "fresh");
        std::fs::remove_file(&file_path).ok();
    }
}
