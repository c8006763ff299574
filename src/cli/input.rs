//! Loading graphs from edge-list and JSON input files.

use std::path::Path;

use crate::graph::UndirectedGraph;
use crate::types::{CliError, CliResult};

/// Load a graph from a file.
///
/// `.json` files hold an adjacency object (`{"A": ["B"], "B": ["A", "C"]}`);
/// anything else is read as an edge list.
pub fn load_graph(path: &Path) -> CliResult<UndirectedGraph<String>> {
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let graph = if is_json {
        parse_adjacency_json(&text)?
    } else {
        parse_edge_list(&text)?
    };

    log::debug!(
        "Loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Parse an edge list.
///
/// One entry per line: `a b` adds an edge, a lone `v` adds an isolated
/// vertex. Blank lines and text after `#` are ignored.
pub fn parse_edge_list(text: &str) -> CliResult<UndirectedGraph<String>> {
    let mut graph = UndirectedGraph::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [vertex] => {
                graph.add_vertex(vertex.to_string());
            }
            [a, b] => graph.add_edge(a.to_string(), b.to_string()),
            _ => {
                return Err(CliError::Parse {
                    line: index + 1,
                    message: format!("expected `a b` or `v`, found {} fields", tokens.len()),
                });
            }
        }
    }

    Ok(graph)
}

/// Parse a JSON adjacency object. One-sided entries are mirrored.
pub fn parse_adjacency_json(text: &str) -> CliResult<UndirectedGraph<String>> {
    Ok(serde_json::from_str(text)?)
}
