use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a Hamiltonian path in a graph by backtracking search.", long_about = None)]
pub struct Cli {
    /// Adjacency list file (`vertex: neighbours` per line). Runs the built-in demo graphs when omitted.
    pub graph_file: Option<PathBuf>,

    /// Treat every listed edge as undirected.
    #[clap(short, long)]
    pub undirected: bool,

    /// Suppress verbose output, only printing results and 'Done.'.
    #[clap(short, long)]
    pub quiet: bool,

    /// File that receives the verbose step log.
    #[clap(long, default_value = "hampath.log")]
    pub log_file: PathBuf,

    /// File that receives the per-graph detail report.
    #[clap(long, default_value = "path_details.log")]
    pub report: PathBuf,
}
