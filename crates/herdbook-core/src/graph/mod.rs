/// Pedigree graph value type, validation, merging, and query algorithms.
///
/// A [`PedigreeGraph`] is an immutable `{ nodes, edges }` pair handed to the
/// renderer. It is checked on construction: node IDs are unique and every
/// edge endpoint refers to a node in the graph.
///
/// # Merging
///
/// [`merge_graphs`] unions several graphs by value: nodes are deduplicated by
/// `id`, edges by their endpoints, the first occurrence winning. Merging
/// is idempotent, which is what herd pedigrees rely on.
///
/// # Query Algorithms
///
/// See the [`queries`] submodule for reachability and the connecting-edge
/// reconstruction, [`cycles`] for loop breaking on malformed records, and
/// [`index`] for the `petgraph` adjacency they run on.
pub mod cycles;
pub mod index;
pub mod queries;

pub use cycles::{drop_cycle_edges, is_acyclic};
pub use index::IndexedGraph;
pub use queries::{Direction, connecting_edges, reachable_from};

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::dedup::unique;
use crate::structures::{Edge, Node};

/// Errors that can occur when constructing a [`PedigreeGraph`] from raw
/// node and edge lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// The same individual appears as two nodes.
    DuplicateNodeId(String),
    /// Two edges share the same `id`.
    DuplicateEdgeId(String),
    /// A parent link names an individual with no node.
    DanglingEdgeRef {
        /// Id of the offending edge.
        edge_id: String,
        /// The endpoint with no node.
        missing_node_id: String,
    },
}

impl std::fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphBuildError::DuplicateNodeId(id) => {
                write!(f, "node {id:?} appears more than once")
            }
            GraphBuildError::DuplicateEdgeId(id) => {
                write!(f, "edge id {id:?} is used by more than one edge")
            }
            GraphBuildError::DanglingEdgeRef {
                edge_id,
                missing_node_id,
            } => {
                write!(
                    f,
                    "edge {edge_id:?} points at {missing_node_id:?}, which is not a node"
                )
            }
        }
    }
}

impl std::error::Error for GraphBuildError {}

/// A directed pedigree graph: nodes plus child → parent edges.
///
/// Construct with [`PedigreeGraph::new`], or obtain one from the pedigree
/// builders in [`crate::pedigree`]. There is no mutation API; derived graphs
/// (merges, highlighted copies) are new values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PedigreeGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

/// Unvalidated wire shape, routed through [`PedigreeGraph::new`] on
/// deserialization.
#[derive(Deserialize)]
struct RawGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl<'de> Deserialize<'de> for PedigreeGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGraph::deserialize(deserializer)?;
        PedigreeGraph::new(raw.nodes, raw.edges).map_err(de::Error::custom)
    }
}

impl PedigreeGraph {
    /// Builds a graph from raw node and edge lists.
    ///
    /// Construction is O(N + E).
    ///
    /// # Errors
    ///
    /// [`GraphBuildError::DuplicateNodeId`] for a repeated node id,
    /// [`GraphBuildError::DuplicateEdgeId`] for a repeated edge id, or
    /// [`GraphBuildError::DanglingEdgeRef`] for an edge whose endpoint is not
    /// among `nodes`.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphBuildError> {
        let mut ids: HashSet<&str> = HashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphBuildError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut edge_ids: HashSet<&str> = HashSet::with_capacity(edges.len());
        for edge in &edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphBuildError::DuplicateEdgeId(edge.id.clone()));
            }
            for endpoint in [&edge.from, &edge.to] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphBuildError::DanglingEdgeRef {
                        edge_id: edge.id.clone(),
                        missing_node_id: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self { nodes, edges })
    }

    /// Wraps lists the caller has already deduplicated and closed over.
    ///
    /// Used by the pedigree builders, whose output satisfies every invariant
    /// of [`PedigreeGraph::new`] by construction.
    pub(crate) fn from_parts_unchecked(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        debug_assert!(
            Self::new(nodes.clone(), edges.clone()).is_ok(),
            "builder produced a malformed graph"
        );
        Self { nodes, edges }
    }

    /// The graph's nodes, in first-insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The graph's edges, in first-insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Returns `true` if a node with the given ID is in the graph.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Consumes the graph, returning its node and edge lists.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    /// Returns the edges lying on some directed path from `root` to `target`.
    ///
    /// See [`queries::connecting_edges`].
    pub fn connecting_edges(&self, root: &str, target: &str) -> Vec<Edge> {
        connecting_edges(&self.edges, root, target)
    }

    /// Returns a copy of this graph in which every edge whose ID is in
    /// `edge_ids` carries `color`.
    ///
    /// Purely cosmetic; structure is unchanged.
    pub fn with_highlighted_edges(&self, edge_ids: &HashSet<&str>, color: &str) -> Self {
        let edges = self
            .edges
            .iter()
            .map(|e| {
                let mut e = e.clone();
                if edge_ids.contains(e.id.as_str()) {
                    e.color = Some(color.to_owned());
                }
                e
            })
            .collect();
        Self {
            nodes: self.nodes.clone(),
            edges,
        }
    }
}

/// Unions several graphs by value.
///
/// Nodes are deduplicated by `id` and edges by their `(from, to)` pair, which
/// is what the composite edge id encodes. The first occurrence wins and keeps
/// its position. Since every input graph is closed over its own edges, the
/// union is as well. Edge ids that collide in the union are renamed with
/// [`disambiguate_edge_ids`].
pub fn merge_graphs<'a>(graphs: impl IntoIterator<Item = &'a PedigreeGraph>) -> PedigreeGraph {
    let mut nodes: Vec<Node> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();
    for g in graphs {
        nodes.extend(g.nodes.iter().cloned());
        edges.extend(g.edges.iter().cloned());
    }

    PedigreeGraph {
        nodes: unique(nodes, |n| n.id.clone()),
        edges: disambiguate_edge_ids(unique(edges, |e| (e.from.clone(), e.to.clone()))),
    }
}

/// Renames edges whose id is already taken by an earlier edge.
///
/// Registry numbers may themselves contain `-`, so the composite
/// `"<from>-<to>"` id of two different parent links can coincide
/// (`G1 → 1-G2` and `G1-1 → G2` are both `"G1-1-G2"`). The first edge keeps
/// the id; later ones become `"<id>#2"`, `"<id>#3"`, …, skipping any id that
/// occurs anywhere in the input. Lists without collisions are returned
/// unchanged.
pub(crate) fn disambiguate_edge_ids(mut edges: Vec<Edge>) -> Vec<Edge> {
    let taken: HashSet<String> = edges.iter().map(|e| e.id.clone()).collect();
    if taken.len() == edges.len() {
        return edges;
    }

    let mut used: HashSet<String> = HashSet::with_capacity(edges.len());
    for edge in &mut edges {
        if used.insert(edge.id.clone()) {
            continue;
        }
        let mut n = 2usize;
        let renamed = loop {
            let candidate = format!("{}#{n}", edge.id);
            if !taken.contains(&candidate) && !used.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        tracing::debug!(id = %edge.id, renamed = %renamed, "edge id collision");
        used.insert(renamed.clone());
        edge.id = renamed;
    }
    edges
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn n(id: &str) -> Node {
        Node::new(id, id.to_uppercase())
    }

    /// An empty graph is valid.
    #[test]
    fn test_empty_graph_builds_successfully() {
        let g = PedigreeGraph::new(vec![], vec![]).expect("empty graph should build");
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_simple_graph_node_and_edge_counts() {
        let g = PedigreeGraph::new(
            vec![n("a"), n("b"), n("c")],
            vec![Edge::between("a", "b"), Edge::between("a", "c")],
        )
        .expect("should build");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.contains_node("b"));
        assert_eq!(g.node("c").map(|x| x.label.as_str()), Some("C"));
    }

    #[test]
    fn test_duplicate_node_id_returns_error() {
        let err = PedigreeGraph::new(vec![n("a"), n("a")], vec![])
            .expect_err("should fail on duplicate node");
        assert_eq!(err, GraphBuildError::DuplicateNodeId("a".to_owned()));
    }

    #[test]
    fn test_dangling_edge_source_returns_error() {
        let err = PedigreeGraph::new(vec![n("b")], vec![Edge::between("ghost", "b")])
            .expect_err("should fail on missing source");
        assert_eq!(
            err,
            GraphBuildError::DanglingEdgeRef {
                edge_id: "ghost-b".to_owned(),
                missing_node_id: "ghost".to_owned(),
            }
        );
    }

    #[test]
    fn test_dangling_edge_target_returns_error() {
        let err = PedigreeGraph::new(vec![n("a")], vec![Edge::between("a", "ghost")])
            .expect_err("should fail on missing target");
        assert_eq!(
            err,
            GraphBuildError::DanglingEdgeRef {
                edge_id: "a-ghost".to_owned(),
                missing_node_id: "ghost".to_owned(),
            }
        );
    }

    #[test]
    fn test_duplicate_edge_id_returns_error() {
        let mut second = Edge::between("b", "a");
        second.id = "a-b".to_owned();
        let err = PedigreeGraph::new(vec![n("a"), n("b")], vec![Edge::between("a", "b"), second])
            .expect_err("should fail on duplicate edge id");
        assert_eq!(err, GraphBuildError::DuplicateEdgeId("a-b".to_owned()));
    }

    #[test]
    fn test_colliding_composite_ids_are_renamed() {
        // G1 -> 1-G2 and G1-1 -> G2 both spell "G1-1-G2".
        let edges = vec![
            Edge::between("G1", "1-G2"),
            Edge::between("G1-1", "G2"),
            Edge::between("x", "y"),
        ];
        let renamed = disambiguate_edge_ids(edges);
        let ids: Vec<&str> = renamed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["G1-1-G2", "G1-1-G2#2", "x-y"]);
        assert_eq!(renamed[1].from, "G1-1");
        assert_eq!(renamed[1].to, "G2");
    }

    #[test]
    fn test_renaming_skips_ids_already_present() {
        let with_id = |from: &str, to: &str, id: &str| {
            let mut e = Edge::between(from, to);
            e.id = id.to_owned();
            e
        };
        let edges = vec![
            Edge::between("a", "b"),
            with_id("p", "q", "a-b#2"),
            with_id("c", "d", "a-b"),
        ];
        let ids: Vec<String> = disambiguate_edge_ids(edges)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["a-b", "a-b#2", "a-b#3"]);
    }

    #[test]
    fn test_merge_keeps_edge_ids_unique() {
        let g1 = PedigreeGraph::new(vec![n("G1"), n("1-G2")], vec![Edge::between("G1", "1-G2")])
            .expect("g1");
        let g2 = PedigreeGraph::new(vec![n("G1-1"), n("G2")], vec![Edge::between("G1-1", "G2")])
            .expect("g2");
        let merged = merge_graphs([&g1, &g2]);
        assert_eq!(merged.edge_count(), 2);
        let (nodes, edges) = merged.into_parts();
        assert!(PedigreeGraph::new(nodes, edges).is_ok());
    }

    #[test]
    fn test_deserialization_validates() {
        let ok: PedigreeGraph = serde_json::from_str(
            r#"{"nodes":[{"id":"a","label":"A"},{"id":"b","label":"B"}],
                "edges":[{"id":"a-b","from":"a","to":"b"}]}"#,
        )
        .expect("valid graph");
        assert_eq!(ok.edge_count(), 1);

        let bad = serde_json::from_str::<PedigreeGraph>(
            r#"{"nodes":[{"id":"a","label":"A"}],
                "edges":[{"id":"a-b","from":"a","to":"b"}]}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_merge_dedups_by_value() {
        let g1 = PedigreeGraph::new(vec![n("a"), n("m")], vec![Edge::between("a", "m")])
            .expect("g1");
        let g2 = PedigreeGraph::new(vec![n("b"), n("m")], vec![Edge::between("b", "m")])
            .expect("g2");

        let merged = merge_graphs([&g1, &g2]);
        let ids: Vec<&str> = merged.nodes().iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "b"]);
        assert_eq!(merged.edge_count(), 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let g = PedigreeGraph::new(vec![n("a"), n("m")], vec![Edge::between("a", "m")])
            .expect("g");
        assert_eq!(merge_graphs([&g, &g]), g);
        assert_eq!(merge_graphs([&merge_graphs([&g]), &g]), g);
    }

    #[test]
    fn test_highlighted_edges_only_touch_selected() {
        let g = PedigreeGraph::new(
            vec![n("a"), n("b"), n("c")],
            vec![Edge::between("a", "b"), Edge::between("a", "c")],
        )
        .expect("g");
        let sel: HashSet<&str> = HashSet::from(["a-c"]);
        let h = g.with_highlighted_edges(&sel, "red");
        assert_eq!(h.edges()[0].color, None);
        assert_eq!(h.edges()[1].color.as_deref(), Some("red"));
        assert_eq!(h.nodes(), g.nodes());
    }

    #[test]
    fn test_build_errors_name_the_ids() {
        let dup = GraphBuildError::DuplicateNodeId("G1-1".to_owned());
        assert!(dup.to_string().contains("G1-1"));

        let dangling = GraphBuildError::DanglingEdgeRef {
            edge_id: "G1-1-G2-3".to_owned(),
            missing_node_id: "G2-3".to_owned(),
        };
        let msg = dangling.to_string();
        assert!(msg.contains("G1-1-G2-3"), "{msg}");
        assert!(msg.contains("\"G2-3\""), "{msg}");
    }
}
