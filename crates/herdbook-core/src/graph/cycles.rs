/// Cycle handling for pedigree edge lists.
///
/// Per-line expansion already refuses to revisit an id on the current line of
/// descent, but circular registry records can still close a loop across two
/// different lines: `x → y` reached on one line and `y → x` on another. After
/// deduplication both edges would sit in the same graph. [`drop_cycle_edges`]
/// removes such closing edges so a built pedigree is always a DAG.
///
/// Edges are admitted in input order and an edge is dropped only if its
/// target already reaches its source. Since expansion pushes edges in
/// preorder, every node stays reachable from the root.
use petgraph::algo::is_cyclic_directed;

use crate::graph::IndexedGraph;
use crate::structures::Edge;

/// Returns `edges` without the edges that would close a directed cycle,
/// preserving the order of the survivors.
///
/// An acyclic list, the normal case, is detected in O(V + E) and returned
/// as is. Only a cyclic list takes the incremental pass, which runs a path
/// search per edge whose endpoints are both already present and so costs
/// O(E · (V + E)) in the worst case.
pub fn drop_cycle_edges(edges: Vec<Edge>) -> Vec<Edge> {
    if is_acyclic(&edges) {
        return edges;
    }
    let mut index = IndexedGraph::with_capacity(edges.len());
    edges
        .into_iter()
        .enumerate()
        .filter(|(position, edge)| {
            let kept = index.insert_acyclic(edge, *position);
            if !kept {
                tracing::debug!(
                    from = %edge.from,
                    to = %edge.to,
                    "edge closes an ancestry cycle, dropped"
                );
            }
            kept
        })
        .map(|(_, edge)| edge)
        .collect()
}

/// Returns `true` if the edge list contains no directed cycle.
pub fn is_acyclic(edges: &[Edge]) -> bool {
    !is_cyclic_directed(IndexedGraph::from_edges(edges).graph())
}
