//! Phase 3 tests: adjacency-matrix view and CLI commands.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use undirected_graph::cli::commands;
use undirected_graph::graph::{AdjacencyMatrix, GraphBuilder};
use undirected_graph::types::{CliError, GraphError};

fn write_input(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> undirected_graph::CliResult<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

const SAMPLE_EDGES: &str = "\
# seven-vertex sample
1
2
3
4
5
6
3 1
3 4
4 2
4 5
1 2
1 0
0 2
6 5
";

// ==================== Matrix Tests ====================

#[test]
fn test_matrix_from_graph_is_symmetric() {
    let graph = GraphBuilder::new()
        .edges([("B", "A"), ("B", "C")])
        .build();
    let matrix = AdjacencyMatrix::from_graph(&graph);

    assert_eq!(matrix.labels(), &["B", "A", "C"]);
    for i in 0..matrix.len() {
        for j in 0..matrix.len() {
            assert_eq!(matrix.is_adjacent(i, j), matrix.is_adjacent(j, i));
        }
    }
    let b = matrix.index_of(&"B").unwrap();
    let c = matrix.index_of(&"C").unwrap();
    assert_eq!(matrix.is_adjacent(b, c), Some(true));
}

#[test]
fn test_matrix_to_graph_keeps_edges() {
    let matrix = AdjacencyMatrix::from_rows(
        vec!['A', 'B', 'C'],
        vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 1]],
    )
    .unwrap();
    let graph = matrix.to_graph();

    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(&'A', &'B').unwrap());
    assert!(graph.has_edge(&'C', &'C').unwrap());
    assert!(!graph.has_edge(&'A', &'C').unwrap());
    assert_eq!(AdjacencyMatrix::from_graph(&graph), matrix);
}

#[test]
fn test_empty_matrix() {
    let graph = GraphBuilder::<u8>::new().build();
    let matrix = AdjacencyMatrix::from_graph(&graph);
    assert!(matrix.is_empty());
    assert!(matrix.to_graph().is_empty());
}

// ==================== CLI Command Tests ====================

#[test]
fn test_cmd_show_edge_list() {
    let input = write_input(".txt", SAMPLE_EDGES);
    let text = run(|out| commands::cmd_show(input.path(), false, out));
    assert!(text.starts_with("1 -> 3,2,0\n"));
    assert!(text.ends_with("0 -> 1,2\n"));
}

#[test]
fn test_cmd_bfs_and_dfs() {
    let input = write_input(".txt", SAMPLE_EDGES);
    let bfs = run(|out| commands::cmd_bfs(input.path(), "5", false, false, out));
    assert_eq!(bfs, "BFS from 5: 5 4 6 3 2 1 0\n");

    let levels = run(|out| commands::cmd_bfs(input.path(), "5", true, false, out));
    assert_eq!(levels, "Level 0: 5\nLevel 1: 4 6\nLevel 2: 3 2\nLevel 3: 1 0\n");

    let dfs = run(|out| commands::cmd_dfs(input.path(), "5", true, out));
    let value: serde_json::Value = serde_json::from_str(&dfs).unwrap();
    assert_eq!(value["order"], serde_json::json!(["5", "4", "3", "1", "2", "0", "6"]));
}

#[test]
fn test_cmd_json_input() {
    let input = write_input(".json", r#"{"A": ["B"], "B": ["A", "C"], "C": ["B"]}"#);
    let text = run(|out| commands::cmd_matrix(input.path(), false, out));
    assert_eq!(text, "    A B C\nA | 0 1 0\nB | 1 0 1\nC | 0 1 0\n");

    let has = run(|out| commands::cmd_has_edge(input.path(), "C", "B", false, out));
    assert_eq!(has, "true\n");
}

#[test]
fn test_cmd_remove_vertex_json() {
    let input = write_input(".txt", SAMPLE_EDGES);
    let text = run(|out| commands::cmd_remove_vertex(input.path(), "3", true, out));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(value.get("3").is_none());
    assert_eq!(value["1"], serde_json::json!(["2", "0"]));
    assert_eq!(value["4"], serde_json::json!(["2", "5"]));
}

#[test]
fn test_cmd_remove_vertex_counts_self_loop() {
    let input = write_input(".txt", "a a\na b\n");
    let text = run(|out| commands::cmd_remove_vertex(input.path(), "a", false, out));
    assert_eq!(text, "Removed a (2 edges)\nb -> \n");
}

#[test]
fn test_cmd_matrix_empty_input() {
    let input = write_input(".txt", "# nothing here\n");
    let text = run(|out| commands::cmd_matrix(input.path(), false, out));
    assert_eq!(text, "");
}

#[test]
fn test_matrix_after_removal_uses_current_positions() {
    let mut graph = GraphBuilder::new()
        .edges([("A", "B"), ("B", "C"), ("C", "D")])
        .build();
    graph.remove_vertex(&"B").unwrap();

    let matrix = AdjacencyMatrix::from_graph(&graph);
    assert_eq!(matrix.labels(), &["A", "C", "D"]);
    assert_eq!(
        matrix.rows(),
        &[vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 0]]
    );
}

#[test]
fn test_cmd_remove_edge_text() {
    let input = write_input(".txt", "A B\nB C\n");
    let text = run(|out| commands::cmd_remove_edge(input.path(), "A", "B", false, out));
    assert_eq!(text, "Removed edge A - B\nA -> \nB -> C\nC -> B\n");
}

#[test]
fn test_cmd_components() {
    let input = write_input(".txt", "A B\nC D\nE\n");
    let text = run(|out| commands::cmd_components(input.path(), false, out));
    assert_eq!(text, "Components: 3\n  0: A B\n  1: C D\n  2: E\n");
}

#[test]
fn test_cmd_missing_vertex() {
    let input = write_input(".txt", SAMPLE_EDGES);
    let mut out = Vec::new();
    let err = commands::cmd_dfs(input.path(), "9", false, &mut out).unwrap_err();
    match err {
        CliError::Graph(GraphError::VertexNotFound(v)) => assert_eq!(v, "9"),
        e => panic!("Expected VertexNotFound, got {:?}", e),
    }
}

#[test]
fn test_cmd_malformed_inputs() {
    let bad_edges = write_input(".txt", "A B\nA B C D\n");
    let mut out = Vec::new();
    match commands::cmd_show(bad_edges.path(), false, &mut out).unwrap_err() {
        CliError::Parse { line, .. } => assert_eq!(line, 2),
        e => panic!("Expected Parse error, got {:?}", e),
    }

    let bad_json = write_input(".json", "[1, 2]");
    match commands::cmd_show(bad_json.path(), false, &mut out).unwrap_err() {
        CliError::Json(_) => {}
        e => panic!("Expected Json error, got {:?}", e),
    }

    match commands::cmd_show(Path::new("/nonexistent/graph.txt"), false, &mut out).unwrap_err() {
        CliError::Io(_) => {}
        e => panic!("Expected Io error, got {:?}", e),
    }
}

#[test]
fn test_cmd_demo_json() {
    let text = run(|out| commands::cmd_demo(true, out));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["has_edge_1_2"], serde_json::json!(true));
    assert_eq!(value["bfs"].as_array().unwrap().len(), 7);
    assert!(value["after_remove_3"].get("3").is_none());
}
