//! `petgraph` adjacency over a pedigree edge list.
//!
//! [`IndexedGraph`] is built once per query from a slice of [`Edge`]s. Its
//! nodes are the distinct edge endpoints, so it works on a bare edge list as
//! well as on the edges of a [`crate::graph::PedigreeGraph`]. Each petgraph
//! edge carries the position of the originating [`Edge`] in that slice.
use std::collections::HashMap;

use petgraph::algo::has_path_connecting;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::structures::Edge;

/// A directed graph over edge endpoints with O(1) ID lookup.
#[derive(Debug)]
pub struct IndexedGraph {
    graph: StableDiGraph<String, usize>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl IndexedGraph {
    /// Builds the adjacency for `edges`.
    ///
    /// Construction is O(E). Parallel edges are kept; they do not affect
    /// reachability.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph: StableDiGraph<String, usize> =
            StableDiGraph::with_capacity(edges.len() + 1, edges.len());
        let mut id_to_index: HashMap<String, NodeIndex> = HashMap::new();

        for (data_index, edge) in edges.iter().enumerate() {
            let from = intern(&mut graph, &mut id_to_index, &edge.from);
            let to = intern(&mut graph, &mut id_to_index, &edge.to);
            graph.add_edge(from, to, data_index);
        }

        Self { graph, id_to_index }
    }

    /// An empty graph with room for `edges` edges.
    pub(crate) fn with_capacity(edges: usize) -> Self {
        Self {
            graph: StableDiGraph::with_capacity(edges + 1, edges),
            id_to_index: HashMap::with_capacity(edges + 1),
        }
    }

    /// Adds `edge`, weighted with `data_index`, unless it would close a
    /// directed cycle. Returns `true` if the edge was added.
    ///
    /// An edge into a node not yet in the graph can never close a cycle, so
    /// the path search only runs when both endpoints are already present.
    pub(crate) fn insert_acyclic(&mut self, edge: &Edge, data_index: usize) -> bool {
        let from = intern(&mut self.graph, &mut self.id_to_index, &edge.from);
        let to = match self.node_index(&edge.to) {
            Some(to) => {
                if has_path_connecting(&self.graph, to, from, None) {
                    return false;
                }
                to
            }
            None => intern(&mut self.graph, &mut self.id_to_index, &edge.to),
        };
        self.graph.add_edge(from, to, data_index);
        true
    }

    /// Looks up the [`NodeIndex`] for a node ID.
    ///
    /// Returns `None` if the ID is not an endpoint of any edge.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    /// Returns the node ID stored at `idx`.
    pub fn node_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Returns the number of distinct endpoints.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns a reference to the underlying [`StableDiGraph`].
    pub fn graph(&self) -> &StableDiGraph<String, usize> {
        &self.graph
    }
}

fn intern(
    graph: &mut StableDiGraph<String, usize>,
    id_to_index: &mut HashMap<String, NodeIndex>,
    id: &str,
) -> NodeIndex {
    if let Some(&idx) = id_to_index.get(id) {
        return idx;
    }
    let idx = graph.add_node(id.to_owned());
    id_to_index.insert(id.to_owned(), idx);
    idx
}
