//! Graph traversal algorithms (BFS, DFS).
//!
//! Every traversal keeps its visited set and frontier local to one call.
//! Neighbors are explored in the graph's neighbor insertion order, so the
//! visitation order is deterministic for a given sequence of mutations.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::types::GraphResult;

use super::UndirectedGraph;

/// Breadth-first traversal from `start`.
///
/// Returns every vertex reachable from `start` exactly once, in
/// level-by-level order. Fails if `start` is not in the graph.
pub fn bfs<V>(graph: &UndirectedGraph<V>, start: &V) -> GraphResult<Vec<V>, V>
where
    V: Eq + Hash + Clone,
{
    Ok(bfs_levels(graph, start)?.into_iter().flatten().collect())
}

/// Breadth-first traversal grouped by distance from `start`.
///
/// Level 0 holds only `start`; level k holds the vertices whose shortest
/// path from `start` has k edges.
pub fn bfs_levels<V>(graph: &UndirectedGraph<V>, start: &V) -> GraphResult<Vec<Vec<V>>, V>
where
    V: Eq + Hash + Clone,
{
    graph.neighbor_set(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut queue: VecDeque<(&V, usize)> = VecDeque::new();
    let mut levels: Vec<Vec<V>> = Vec::new();

    // Mark at enqueue time so no vertex enters the queue twice.
    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if levels.len() <= depth {
            levels.push(Vec::new());
        }
        levels[depth].push(current.clone());

        for neighbor in graph.neighbor_set(current)? {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    log::trace!(
        "BFS visited {} vertices over {} levels",
        visited.len(),
        levels.len()
    );
    Ok(levels)
}

/// Depth-first pre-order traversal from `start`.
///
/// Visits the same order as the recursive formulation (descend into each
/// unvisited neighbor before moving on to the next) but keeps an explicit
/// stack, so long paths cannot overflow the call stack.
pub fn dfs<V>(graph: &UndirectedGraph<V>, start: &V) -> GraphResult<Vec<V>, V>
where
    V: Eq + Hash + Clone,
{
    graph.neighbor_set(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order = Vec::new();
    dfs_from(graph, start, &mut visited, &mut order);

    log::trace!("DFS visited {} vertices", order.len());
    Ok(order)
}

/// Depth-first traversal over every component.
///
/// Starts a new DFS from each vertex not yet visited, in vertex insertion
/// order, and returns one pre-order sequence per connected component.
pub fn dfs_forest<V>(graph: &UndirectedGraph<V>) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let mut visited: HashSet<&V> = HashSet::new();
    let mut forest = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        let mut order = Vec::new();
        dfs_from(graph, root, &mut visited, &mut order);
        forest.push(order);
    }

    log::trace!("DFS forest has {} components", forest.len());
    forest
}

/// Number of connected components.
pub fn connected_components<V>(graph: &UndirectedGraph<V>) -> usize
where
    V: Eq + Hash + Clone,
{
    dfs_forest(graph).len()
}

/// Pre-order DFS from `start`, which must be a vertex of `graph`. Every
/// vertex pushed on the stack comes from the graph's own neighbor sets.
fn dfs_from<'g, V>(
    graph: &'g UndirectedGraph<V>,
    start: &'g V,
    visited: &mut HashSet<&'g V>,
    order: &mut Vec<V>,
) where
    V: Eq + Hash + Clone,
{
    // Each frame is a vertex and the index of its next neighbor to try.
    let mut stack: Vec<(&'g V, usize)> = Vec::new();

    visited.insert(start);
    order.push(start.clone());
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        frame.1 += 1;

        match graph.lookup(current).and_then(|n| n.get_index(cursor)) {
            Some(next) => {
                if visited.insert(next) {
                    order.push(next.clone());
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}
