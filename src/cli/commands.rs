//! CLI command implementations.
//!
//! Each command loads its input graph, applies the requested operation in
//! memory and writes the result to `out`. Nothing is written back to the
//! input file.

use std::io::Write;
use std::path::Path;

use crate::cli::input::load_graph;
use crate::graph::{
    bfs, bfs_levels, dfs, dfs_forest, AdjacencyMatrix, GraphBuilder, UndirectedGraph,
};
use crate::types::CliResult;

/// The seven-vertex sample graph used by `ugraph demo`.
///
/// Vertices 1 through 6 are added first; 0 appears implicitly with the
/// edge (1, 0).
pub fn demo_graph() -> UndirectedGraph<String> {
    let edges = [
        ("3", "1"),
        ("3", "4"),
        ("4", "2"),
        ("4", "5"),
        ("1", "2"),
        ("1", "0"),
        ("0", "2"),
        ("6", "5"),
    ];
    GraphBuilder::new()
        .vertices((1..=6).map(|v| v.to_string()))
        .edges(edges.iter().map(|(a, b)| (a.to_string(), b.to_string())))
        .build()
}

fn write_graph(out: &mut impl Write, graph: &UndirectedGraph<String>, json: bool) -> CliResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(graph)?)?;
    } else {
        write!(out, "{}", graph)?;
    }
    Ok(())
}

fn write_order(
    out: &mut impl Write,
    label: &str,
    start: &str,
    order: &[String],
    json: bool,
) -> CliResult<()> {
    if json {
        let value = serde_json::json!({
            "traversal": label,
            "start": start,
            "order": order,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "{} from {}: {}", label, start, order.join(" "))?;
    }
    Ok(())
}

/// Print the adjacency list.
pub fn cmd_show(path: &Path, json: bool, out: &mut impl Write) -> CliResult<()> {
    let graph = load_graph(path)?;
    write_graph(out, &graph, json)
}

/// Breadth-first traversal, optionally grouped by level.
pub fn cmd_bfs(
    path: &Path,
    start: &str,
    levels: bool,
    json: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let graph = load_graph(path)?;
    let start = start.to_string();

    if !levels {
        let order = bfs(&graph, &start)?;
        return write_order(out, "BFS", &start, &order, json);
    }

    let levels = bfs_levels(&graph, &start)?;
    if json {
        let value = serde_json::json!({
            "traversal": "BFS",
            "start": start,
            "levels": levels,
        });
        writeln!(out, "{}", value)?;
    } else {
        for (depth, level) in levels.iter().enumerate() {
            writeln!(out, "Level {}: {}", depth, level.join(" "))?;
        }
    }
    Ok(())
}

/// Depth-first traversal.
pub fn cmd_dfs(path: &Path, start: &str, json: bool, out: &mut impl Write) -> CliResult<()> {
    let graph = load_graph(path)?;
    let start = start.to_string();
    let order = dfs(&graph, &start)?;
    write_order(out, "DFS", &start, &order, json)
}

/// List connected components.
pub fn cmd_components(path: &Path, json: bool, out: &mut impl Write) -> CliResult<()> {
    let graph = load_graph(path)?;
    let forest = dfs_forest(&graph);

    if json {
        let value = serde_json::json!({
            "count": forest.len(),
            "components": forest,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Components: {}", forest.len())?;
        for (i, component) in forest.iter().enumerate() {
            writeln!(out, "  {}: {}", i, component.join(" "))?;
        }
    }
    Ok(())
}

/// Check whether two vertices share an edge.
pub fn cmd_has_edge(
    path: &Path,
    a: &str,
    b: &str,
    json: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let graph = load_graph(path)?;
    let present = graph.has_edge(&a.to_string(), &b.to_string())?;

    if json {
        writeln!(out, "{}", serde_json::json!({"a": a, "b": b, "edge": present}))?;
    } else {
        writeln!(out, "{}", present)?;
    }
    Ok(())
}

/// Remove a vertex and print the resulting graph.
pub fn cmd_remove_vertex(
    path: &Path,
    vertex: &str,
    json: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut graph = load_graph(path)?;
    let detached = graph.remove_vertex(&vertex.to_string())?;

    if !json {
        writeln!(out, "Removed {} ({} edges)", vertex, detached.len())?;
    }
    write_graph(out, &graph, json)
}

/// Remove an edge and print the resulting graph.
pub fn cmd_remove_edge(
    path: &Path,
    a: &str,
    b: &str,
    json: bool,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut graph = load_graph(path)?;
    let removed = graph.remove_edge(&a.to_string(), &b.to_string())?;

    if !json {
        if removed {
            writeln!(out, "Removed edge {} - {}", a, b)?;
        } else {
            writeln!(out, "No edge between {} and {}", a, b)?;
        }
    }
    write_graph(out, &graph, json)
}

/// Print the adjacency-matrix form.
pub fn cmd_matrix(path: &Path, json: bool, out: &mut impl Write) -> CliResult<()> {
    let graph = load_graph(path)?;
    let matrix = AdjacencyMatrix::from_graph(&graph);

    if json {
        let value = serde_json::json!({
            "labels": matrix.labels(),
            "rows": matrix.rows(),
        });
        writeln!(out, "{}", value)?;
    } else {
        write!(out, "{}", matrix)?;
    }
    Ok(())
}

/// Walk through the sample graph: edge check, both traversals from 5,
/// then removal of vertex 3.
pub fn cmd_demo(json: bool, out: &mut impl Write) -> CliResult<()> {
    let mut graph = demo_graph();
    let start = "5".to_string();

    let has_edge = graph.has_edge(&"1".to_string(), &"2".to_string())?;
    let bfs_order = bfs(&graph, &start)?;
    let dfs_order = dfs(&graph, &start)?;
    graph.remove_vertex(&"3".to_string())?;

    if json {
        let value = serde_json::json!({
            "has_edge_1_2": has_edge,
            "bfs": bfs_order,
            "dfs": dfs_order,
            "after_remove_3": graph,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "has_edge(1, 2): {}", has_edge)?;
        write_order(out, "BFS", &start, &bfs_order, false)?;
        write_order(out, "DFS", &start, &dfs_order, false)?;
        writeln!(out, "After removing 3:")?;
        write!(out, "{}", graph)?;
    }
    Ok(())
}
