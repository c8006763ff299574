//! CLI entry point for the `ugraph` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use undirected_graph::cli::commands;
use undirected_graph::{CliError, GraphError};

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph CLI: inspect and traverse undirected graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list of a graph file
    Show {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
        /// Starting vertex
        start: String,
        /// Group the output by distance from the start
        #[arg(long)]
        levels: bool,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
        /// Starting vertex
        start: String,
    },
    /// List connected components
    Components {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
    },
    /// Check whether two vertices share an edge
    HasEdge {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
        /// First vertex
        a: String,
        /// Second vertex
        b: String,
    },
    /// Remove a vertex and print the resulting graph
    RemoveVertex {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
        /// Vertex to remove
        vertex: String,
    },
    /// Remove an edge and print the resulting graph
    RemoveEdge {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
        /// First vertex
        a: String,
        /// Second vertex
        b: String,
    },
    /// Print the adjacency-matrix form of a graph file
    Matrix {
        /// Edge-list file, or .json adjacency object
        file: PathBuf,
    },
    /// Run the built-in seven-vertex walkthrough
    Demo,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Show { file } => commands::cmd_show(&file, json, &mut out),
        Commands::Bfs {
            file,
            start,
            levels,
        } => commands::cmd_bfs(&file, &start, levels, json, &mut out),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, &start, json, &mut out),
        Commands::Components { file } => commands::cmd_components(&file, json, &mut out),
        Commands::HasEdge { file, a, b } => commands::cmd_has_edge(&file, &a, &b, json, &mut out),
        Commands::RemoveVertex { file, vertex } => {
            commands::cmd_remove_vertex(&file, &vertex, json, &mut out)
        }
        Commands::RemoveEdge { file, a, b } => {
            commands::cmd_remove_edge(&file, &a, &b, json, &mut out)
        }
        Commands::Matrix { file } => commands::cmd_matrix(&file, json, &mut out),
        Commands::Demo => commands::cmd_demo(json, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            CliError::Io(_) => 1,
            CliError::Parse { .. } | CliError::Json(_) => 2,
            CliError::Graph(GraphError::VertexNotFound(_)) => 4,
        };
        process::exit(code);
    }
}
