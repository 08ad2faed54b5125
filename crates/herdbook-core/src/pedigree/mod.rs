/// Bounded-depth ancestor graph construction.
///
/// Three entry points share one recursive expansion routine:
///
/// - [`individual_pedigree`] — the ancestors of one registered individual;
/// - [`herd_pedigree`] — the merged pedigrees of every member of a herd;
/// - [`test_breed_pedigree`] — a synthetic offspring of a planned mating.
///
/// # Generations
///
/// The root is generation 0. A node at generation `k` is expanded into its
/// recorded parents only while `k` is below [`BuildOptions::generations`], so
/// the longest root-to-leaf path has at most that many edges.
///
/// # Common ancestors
///
/// Expansion runs independently along every line of descent. An ancestor
/// reached along two lines is therefore produced twice before deduplication;
/// those ids make up [`Pedigree::common_ancestors`].
///
/// # Failure semantics
///
/// Data-quality problems never fail a build: missing parents end a branch,
/// self-referencing records end it early. When there is nothing to build from
/// (unknown individual, empty herd, unresolvable mating) the builders return
/// `None`.
mod expand;
mod herd;
mod test_breed;

pub use herd::herd_pedigree;
pub use test_breed::{
    GrandparentConvention, GrandparentRef, Grandparents, MatingSpec, ParentSpec, TEST_BREED_ID,
    TEST_BREED_LABEL, test_breed_pedigree,
};

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::ancestry::AncestryLookup;
use crate::dedup::unique;
use crate::graph::PedigreeGraph;
use crate::newtypes::Generations;
use crate::structures::Edge;

use expand::Expansion;

/// Fill colour applied to common ancestors when highlighting is requested.
pub const COMMON_ANCESTOR_COLOR: &str = "#f4a261";

/// Stroke colour applied to inbreeding-loop edges.
pub const LOOP_COLOR: &str = "#e76f51";

/// Shape hint given to nodes that are not registered individuals.
pub const SYNTHETIC_SHAPE: &str = "box";

/// Options shared by all builder modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildOptions {
    /// How many generations above the root to expand.
    pub generations: Generations,
    /// Colour common-ancestor nodes with [`COMMON_ANCESTOR_COLOR`].
    pub highlight_common: bool,
    /// Placement of grandparents in a test-breed pedigree.
    pub grandparents: GrandparentConvention,
}

impl BuildOptions {
    /// Default options with the given generation bound.
    pub fn with_generations(generations: Generations) -> Self {
        Self {
            generations,
            ..Self::default()
        }
    }
}

/// A built pedigree: the graph, its roots, and its common ancestors.
///
/// Serializes as `{"roots": [..], "nodes": [..], "edges": [..],
/// "common_ancestors": [..]}` for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pedigree {
    roots: Vec<String>,
    #[serde(flatten)]
    graph: PedigreeGraph,
    common_ancestors: BTreeSet<String>,
}

impl Pedigree {
    /// Ids the graph was expanded from.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// The deduplicated pedigree graph.
    pub fn graph(&self) -> &PedigreeGraph {
        &self.graph
    }

    /// Ids of ancestors reached along two or more lines of descent.
    pub fn common_ancestors(&self) -> &BTreeSet<String> {
        &self.common_ancestors
    }

    /// Returns `true` if `id` is a common ancestor.
    pub fn is_common(&self, id: &str) -> bool {
        self.common_ancestors.contains(id)
    }

    /// Consumes the pedigree, returning its graph.
    pub fn into_graph(self) -> PedigreeGraph {
        self.graph
    }

    /// Edges on every path from any root to `ancestor`: the loop that makes
    /// `ancestor` common.
    ///
    /// Returns an empty vector when `ancestor` is not reachable from a root.
    pub fn inbreeding_loop(&self, ancestor: &str) -> Vec<Edge> {
        let edges = self
            .roots
            .iter()
            .flat_map(|root| self.graph.connecting_edges(root, ancestor));
        unique(edges, |e| (e.from.clone(), e.to.clone()))
    }

    /// Returns a copy whose inbreeding-loop edges towards `ancestor` are
    /// stroked with [`LOOP_COLOR`].
    pub fn with_loop_highlighted(&self, ancestor: &str) -> Self {
        let on_loop = self.inbreeding_loop(ancestor);
        let ids: HashSet<&str> = on_loop.iter().map(|e| e.id.as_str()).collect();
        Self {
            roots: self.roots.clone(),
            graph: self.graph.with_highlighted_edges(&ids, LOOP_COLOR),
            common_ancestors: self.common_ancestors.clone(),
        }
    }
}

/// Builds the pedigree of a single registered individual.
///
/// Returns `None` if `id` is not known to `lookup`.
pub fn individual_pedigree<L>(lookup: &L, id: &str, options: &BuildOptions) -> Option<Pedigree>
where
    L: AncestryLookup + ?Sized,
{
    let (graph, common) = expand_individual(lookup, id, options.generations)?;
    Some(assemble(vec![id.to_owned()], graph, common, options))
}

/// Expands one individual without applying cosmetic options.
fn expand_individual<L>(
    lookup: &L,
    id: &str,
    generations: Generations,
) -> Option<(PedigreeGraph, HashSet<String>)>
where
    L: AncestryLookup + ?Sized,
{
    if !lookup.contains(id) {
        tracing::debug!(individual = id, "no ancestry record, no pedigree");
        return None;
    }
    let mut expansion = Expansion::new(lookup, generations);
    expansion.expand(id, 0);
    Some(expansion.finish())
}

/// Turns a finished expansion into a [`Pedigree`], applying highlighting.
fn assemble(
    roots: Vec<String>,
    graph: PedigreeGraph,
    common: HashSet<String>,
    options: &BuildOptions,
) -> Pedigree {
    let common_ancestors: BTreeSet<String> = common.into_iter().collect();

    let graph = if options.highlight_common && !common_ancestors.is_empty() {
        let (mut nodes, edges) = graph.into_parts();
        for node in nodes
            .iter_mut()
            .filter(|n| common_ancestors.contains(&n.id))
        {
            node.style.color = Some(COMMON_ANCESTOR_COLOR.to_owned());
        }
        PedigreeGraph::from_parts_unchecked(nodes, edges)
    } else {
        graph
    };

    tracing::info!(
        roots = ?roots,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        common = common_ancestors.len(),
        generations = %options.generations,
        "pedigree built"
    );

    Pedigree {
        roots,
        graph,
        common_ancestors,
    }
}
