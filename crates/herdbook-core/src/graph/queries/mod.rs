/// Graph query algorithms: reachability and connecting-edge reconstruction.
///
/// # Direction
///
/// [`reachable_from`] accepts a [`Direction`] parameter controlling which
/// edges are followed:
/// - [`Direction::Forward`] — `from → to`, i.e. from an individual towards
///   its ancestors.
/// - [`Direction::Backward`] — the reverse adjacency, from an ancestor towards
///   its descendants within the graph.
///
/// # Connecting edges
///
/// [`connecting_edges`] returns the edges lying on at least one directed path
/// from a root to a target. An edge `u → v` is on such a path exactly when
/// `u` is reachable from the root and `v` reaches the target, so two
/// reachability passes and one filter over the edge list suffice. No path is
/// ever enumerated, which keeps the cost O(V + E) even when many common
/// ancestors multiply the number of distinct paths.
use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::graph::IndexedGraph;
use crate::structures::Edge;

#[cfg(test)]
mod tests;

/// Controls which edges are followed during graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow outgoing edges only (towards ancestors).
    Forward,
    /// Follow incoming edges only (towards descendants).
    Backward,
}

/// Fills `buf` with the neighbour [`NodeIndex`] values reachable from `node`
/// in one step.
///
/// The buffer is cleared before being populated, so callers can reuse a single
/// allocation across many iterations.
fn neighbours_into(
    index: &IndexedGraph,
    node: NodeIndex,
    direction: Direction,
    buf: &mut Vec<NodeIndex>,
) {
    buf.clear();
    let g = index.graph();

    match direction {
        Direction::Forward => {
            buf.extend(g.edges(node).map(|edge_ref| edge_ref.target()));
        }
        Direction::Backward => {
            buf.extend(
                g.edges_directed(node, petgraph::Direction::Incoming)
                    .map(|edge_ref| edge_ref.source()),
            );
        }
    }
}

/// Returns the set of nodes reachable from `start` via BFS, **including**
/// `start` itself.
///
/// Returns an empty set if `start` is not a node of `index`.
pub fn reachable_from(
    index: &IndexedGraph,
    start: &str,
    direction: Direction,
) -> HashSet<NodeIndex> {
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let Some(start_idx) = index.node_index(start) else {
        return visited;
    };

    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    let mut nbuf: Vec<NodeIndex> = Vec::new();

    visited.insert(start_idx);
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        neighbours_into(index, current, direction, &mut nbuf);
        for &neighbour in &nbuf {
            if visited.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    visited
}

/// Returns every edge lying on at least one directed path from `root` to
/// `target`, in the order they appear in `edges`.
///
/// Never fails: an unknown ID, a `target` the root cannot reach, or
/// `root == target` all yield an empty vector.
pub fn connecting_edges(edges: &[Edge], root: &str, target: &str) -> Vec<Edge> {
    if root == target {
        return Vec::new();
    }

    let index = IndexedGraph::from_edges(edges);
    let from_root = reachable_from(&index, root, Direction::Forward);
    let to_target = reachable_from(&index, target, Direction::Backward);

    let g = index.graph();
    let mut on_path: Vec<usize> = g
        .edge_indices()
        .filter(|&e| {
            matches!(g.edge_endpoints(e),
                Some((u, v)) if from_root.contains(&u) && to_target.contains(&v))
        })
        .filter_map(|e| g.edge_weight(e).copied())
        .collect();
    on_path.sort_unstable();

    tracing::trace!(root, target, edges = on_path.len(), "connecting edges");

    on_path
        .into_iter()
        .filter_map(|pos| edges.get(pos).cloned())
        .collect()
}
