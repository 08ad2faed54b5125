#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use super::*;
use crate::graph::PedigreeGraph;
use crate::structures::Node;

/// Reference edge set: `0-1, 0-2, 1-3, 1-4, 2-4, 2-5, 3-8, 3-6, 4-8, 5-6`.
fn reference_edges() -> Vec<Edge> {
    [
        ("0", "1"),
        ("0", "2"),
        ("1", "3"),
        ("1", "4"),
        ("2", "4"),
        ("2", "5"),
        ("3", "8"),
        ("3", "6"),
        ("4", "8"),
        ("5", "6"),
    ]
    .iter()
    .map(|&(from, to)| Edge::between(from, to))
    .collect()
}

fn ids(edges: &[Edge]) -> BTreeSet<&str> {
    edges.iter().map(|e| e.id.as_str()).collect()
}

fn node_ids(index: &IndexedGraph, set: &HashSet<NodeIndex>) -> BTreeSet<String> {
    set.iter()
        .filter_map(|&idx| index.node_id(idx).map(str::to_owned))
        .collect()
}

// ---------------------------------------------------------------------------
// reachable_from
// ---------------------------------------------------------------------------

#[test]
fn forward_reach_includes_start_and_ancestors() {
    let edges = reference_edges();
    let index = IndexedGraph::from_edges(&edges);
    let reached = reachable_from(&index, "2", Direction::Forward);
    let expected: BTreeSet<String> = ["2", "4", "5", "6", "8"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    assert_eq!(node_ids(&index, &reached), expected);
}

#[test]
fn backward_reach_walks_reverse_adjacency() {
    let edges = reference_edges();
    let index = IndexedGraph::from_edges(&edges);
    let reached = reachable_from(&index, "4", Direction::Backward);
    let expected: BTreeSet<String> = ["4", "1", "2", "0"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    assert_eq!(node_ids(&index, &reached), expected);
}

#[test]
fn reach_from_unknown_node_is_empty() {
    let edges = reference_edges();
    let index = IndexedGraph::from_edges(&edges);
    assert!(reachable_from(&index, "nope", Direction::Forward).is_empty());
    assert!(reachable_from(&index, "nope", Direction::Backward).is_empty());
}

#[test]
fn reach_from_leaf_is_only_itself() {
    let edges = reference_edges();
    let index = IndexedGraph::from_edges(&edges);
    let reached = reachable_from(&index, "8", Direction::Forward);
    assert_eq!(reached.len(), 1);
}

// ---------------------------------------------------------------------------
// connecting_edges: reference fixture
// ---------------------------------------------------------------------------

#[test]
fn connecting_edges_root_0_target_4() {
    let edges = reference_edges();
    let got = connecting_edges(&edges, "0", "4");
    assert_eq!(ids(&got), BTreeSet::from(["0-1", "0-2", "1-4", "2-4"]));
}

#[test]
fn connecting_edges_root_0_target_6() {
    let edges = reference_edges();
    let got = connecting_edges(&edges, "0", "6");
    assert_eq!(
        ids(&got),
        BTreeSet::from(["0-1", "0-2", "1-3", "2-5", "3-6", "5-6"])
    );
}

#[test]
fn connecting_edges_root_1_target_8() {
    let edges = reference_edges();
    let got = connecting_edges(&edges, "1", "8");
    assert_eq!(ids(&got), BTreeSet::from(["1-3", "1-4", "3-8", "4-8"]));
}

#[test]
fn connecting_edges_keep_input_order() {
    let edges = reference_edges();
    let got = connecting_edges(&edges, "0", "4");
    let order: Vec<&str> = got.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["0-1", "0-2", "1-4", "2-4"]);
}

// ---------------------------------------------------------------------------
// connecting_edges: degenerate queries
// ---------------------------------------------------------------------------

#[test]
fn no_path_between_siblings() {
    let edges = reference_edges();
    assert!(connecting_edges(&edges, "1", "2").is_empty());
    assert!(connecting_edges(&edges, "5", "4").is_empty());
}

#[test]
fn no_path_against_edge_direction() {
    let edges = reference_edges();
    assert!(connecting_edges(&edges, "6", "0").is_empty());
}

#[test]
fn root_equal_to_target_is_empty() {
    let edges = reference_edges();
    assert!(connecting_edges(&edges, "4", "4").is_empty());
}

#[test]
fn unknown_ids_are_empty() {
    let edges = reference_edges();
    assert!(connecting_edges(&edges, "0", "missing").is_empty());
    assert!(connecting_edges(&edges, "missing", "4").is_empty());
    assert!(connecting_edges(&[], "0", "4").is_empty());
}

#[test]
fn direct_parent_yields_single_edge() {
    let edges = reference_edges();
    let got = connecting_edges(&edges, "3", "6");
    assert_eq!(ids(&got), BTreeSet::from(["3-6"]));
}

#[test]
fn pedigree_graph_delegates_to_edge_query() {
    let nodes: Vec<Node> = ["0", "1", "2", "3", "4", "5", "6", "8"]
        .iter()
        .map(|id| Node::new(*id, *id))
        .collect();
    let graph = PedigreeGraph::new(nodes, reference_edges()).expect("valid graph");
    assert_eq!(
        ids(&graph.connecting_edges("0", "4")),
        BTreeSet::from(["0-1", "0-2", "1-4", "2-4"])
    );
}
