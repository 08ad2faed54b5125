use crate::ancestry::AncestryLookup;
use crate::dedup::unique_values;

use super::expand::Expansion;
use super::{BuildOptions, Pedigree, assemble};

/// Builds the merged pedigree of every member of a herd.
///
/// Every member is expanded into one shared raw node and edge list, which is
/// then deduplicated exactly as for a single individual. An ancestor shared
/// by two members therefore appears once in the graph and is flagged as a
/// common ancestor, as is a member that is also another member's ancestor.
/// With well-formed records the graph equals [`crate::merge_graphs`] over the
/// members' individual pedigrees.
///
/// Members are deduplicated up front, so listing an animal twice does not
/// make it common. Members unknown to `lookup` are skipped. Returns `None`
/// when no member could be expanded.
pub fn herd_pedigree<L, I, S>(lookup: &L, members: I, options: &BuildOptions) -> Option<Pedigree>
where
    L: AncestryLookup + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let members: Vec<String> =
        unique_values(members.into_iter().map(|m| m.as_ref().to_owned()));

    let mut expansion = Expansion::new(lookup, options.generations);
    let mut roots: Vec<String> = Vec::with_capacity(members.len());

    for member in members {
        if expansion.knows(&member) {
            expansion.expand(&member, 0);
            roots.push(member);
        } else {
            tracing::debug!(member = %member, "herd member skipped");
        }
    }

    if roots.is_empty() {
        return None;
    }

    let (graph, common) = expansion.finish();
    Some(assemble(roots, graph, common, options))
}
