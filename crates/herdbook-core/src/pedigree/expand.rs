//! Bounded recursive ancestor expansion shared by every builder mode.
//!
//! Expansion is per path: an ancestor reachable along two lines of descent is
//! pushed once per line, so the raw node list contains it twice. The final
//! [`Expansion::finish`] step collapses the duplicates and reports their ids
//! as common ancestors.
use std::collections::HashSet;

use crate::ancestry::AncestryLookup;
use crate::dedup::{unique, unique_and_common};
use crate::graph::{PedigreeGraph, disambiguate_edge_ids, drop_cycle_edges};
use crate::newtypes::Generations;
use crate::structures::{Edge, Node};

/// Accumulates the raw, possibly repeating node and edge lists of one
/// pedigree.
pub(crate) struct Expansion<'a, L: ?Sized> {
    lookup: &'a L,
    bound: u32,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// Ids on the current line of descent, root first.
    path: Vec<String>,
}

impl<'a, L: AncestryLookup + ?Sized> Expansion<'a, L> {
    pub(crate) fn new(lookup: &'a L, generations: Generations) -> Self {
        Self {
            lookup,
            bound: generations.get(),
            nodes: Vec::new(),
            edges: Vec::new(),
            path: Vec::new(),
        }
    }

    /// The generation bound this expansion was created with.
    pub(crate) fn bound(&self) -> u32 {
        self.bound
    }

    /// Pushes a node for `id` at generation `depth` and expands its recorded
    /// parents while `depth` is below the bound.
    ///
    /// An id with no record becomes a leaf labelled with the id itself. A
    /// parent already on the current line of descent is skipped, so malformed
    /// records (an animal listed as its own ancestor) cannot produce a cycle.
    pub(crate) fn expand(&mut self, id: &str, depth: u32) {
        let lookup = self.lookup;
        let record = lookup.record(id);
        let label = record.map_or(id, |r| r.label.as_str());
        self.nodes.push(Node::new(id, label));

        let Some(record) = record else {
            return;
        };
        if depth >= self.bound {
            return;
        }

        self.path.push(id.to_owned());
        for parent in record.parents() {
            if self.path.iter().any(|p| p == parent) {
                tracing::debug!(
                    individual = id,
                    parent,
                    "parent already on this line of descent, branch truncated"
                );
                continue;
            }
            self.edges.push(Edge::between(id, parent));
            self.expand(parent, depth + 1);
        }
        self.path.pop();
    }

    /// Returns `true` if the lookup has a record for `id`.
    pub(crate) fn knows(&self, id: &str) -> bool {
        self.lookup.contains(id)
    }

    /// Pushes a node that does not come from the lookup.
    pub(crate) fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Pushes the edge `from → to`.
    pub(crate) fn push_edge(&mut self, from: &str, to: &str) {
        self.edges.push(Edge::between(from, to));
    }

    /// Deduplicates the raw lists into a graph and the set of node ids that
    /// were pushed more than once.
    ///
    /// Edges that would close a loop across two lines of descent are dropped
    /// so the result is acyclic, and colliding edge ids are renamed.
    pub(crate) fn finish(self) -> (PedigreeGraph, HashSet<String>) {
        let (nodes, common) = unique_and_common(self.nodes, |n| n.id.clone());
        let edges = drop_cycle_edges(unique(self.edges, |e| (e.from.clone(), e.to.clone())));
        let edges = disambiguate_edge_ids(edges);
        (PedigreeGraph::from_parts_unchecked(nodes, edges), common)
    }
}
