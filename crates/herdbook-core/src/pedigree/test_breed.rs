//! Pedigree of a hypothetical ("test-breed") offspring.
//!
//! The offspring does not exist in the registry. It is represented by a
//! synthetic root, [`TEST_BREED_ID`], pointing at whatever the caller knows
//! about each side of the mating: a registered parent, or the parent's own
//! parents when the parent itself is unregistered.
//!
//! Ancestors shared by the dam side and the sire side come out as common
//! ancestors of the synthetic root, which is exactly the inbreeding the
//! planned mating would produce.
use serde::{Deserialize, Serialize};

use crate::ancestry::AncestryLookup;
use crate::structures::Node;

use super::expand::Expansion;
use super::{BuildOptions, Pedigree, SYNTHETIC_SHAPE, assemble};

/// Node id of the synthetic offspring.
pub const TEST_BREED_ID: &str = "test-breed";

/// Display label of the synthetic offspring.
pub const TEST_BREED_LABEL: &str = "Test breed";

/// A grandparent on one side of a planned mating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrandparentRef {
    /// A registered individual, expanded from the lookup.
    Registered(String),
    /// An unregistered animal known only by a display label. Becomes a leaf.
    Unregistered(String),
}

impl GrandparentRef {
    fn resolves<L: AncestryLookup + ?Sized>(&self, lookup: &L) -> bool {
        match self {
            GrandparentRef::Registered(id) => lookup.contains(id),
            GrandparentRef::Unregistered(label) => !label.trim().is_empty(),
        }
    }
}

/// The parents of an unregistered dam or sire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grandparents {
    /// The unregistered parent's mother.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<GrandparentRef>,
    /// The unregistered parent's father.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<GrandparentRef>,
}

/// What is known about one side of a planned mating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentSpec {
    /// The parent is a registered individual.
    Individual(String),
    /// The parent is unregistered; its parents are given instead.
    Grandparents(Grandparents),
}

impl ParentSpec {
    fn resolves<L: AncestryLookup + ?Sized>(&self, lookup: &L) -> bool {
        match self {
            ParentSpec::Individual(id) => lookup.contains(id),
            ParentSpec::Grandparents(gp) => [gp.mother.as_ref(), gp.father.as_ref()]
                .into_iter()
                .flatten()
                .any(|g| g.resolves(lookup)),
        }
    }
}

/// A planned mating. Either side may be left out, but at least one must
/// resolve to some ancestry for a pedigree to be built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatingSpec {
    /// The prospective mother's side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dam: Option<ParentSpec>,
    /// The prospective father's side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sire: Option<ParentSpec>,
}

/// Where grandparents sit when a side is given as a grandparent pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrandparentConvention {
    /// An "unknown dam"/"unknown sire" placeholder node stands in for the
    /// unregistered parent at generation 1; grandparents are generation 2.
    #[default]
    PlaceholderParent,
    /// The offspring points straight at the grandparents, which count as
    /// generation 1.
    DirectEdges,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Dam,
    Sire,
}

impl Side {
    fn slug(self) -> &'static str {
        match self {
            Side::Dam => "dam",
            Side::Sire => "sire",
        }
    }

    fn unknown_label(self) -> &'static str {
        match self {
            Side::Dam => "Unknown dam",
            Side::Sire => "Unknown sire",
        }
    }

    fn placeholder_id(self) -> String {
        format!("{TEST_BREED_ID}/{}", self.slug())
    }
}

/// Builds the pedigree of the offspring of a planned mating.
///
/// Sides that do not resolve (an unknown individual, or no usable
/// grandparent) are left out. Returns `None` when neither side resolves.
pub fn test_breed_pedigree<L>(
    lookup: &L,
    spec: &MatingSpec,
    options: &BuildOptions,
) -> Option<Pedigree>
where
    L: AncestryLookup + ?Sized,
{
    let given = [
        (Side::Dam, spec.dam.as_ref()),
        (Side::Sire, spec.sire.as_ref()),
    ];
    let sides: Vec<(Side, &ParentSpec)> = given
        .into_iter()
        .filter_map(|(side, parent)| {
            let parent = parent?;
            if parent.resolves(lookup) {
                Some((side, parent))
            } else {
                tracing::debug!(side = side.slug(), "test-breed side does not resolve");
                None
            }
        })
        .collect();

    if sides.is_empty() {
        return None;
    }

    let mut expansion = Expansion::new(lookup, options.generations);
    expansion
        .push_node(Node::new(TEST_BREED_ID, TEST_BREED_LABEL).with_shape(SYNTHETIC_SHAPE));

    if expansion.bound() > 0 {
        for (side, parent) in sides {
            match parent {
                ParentSpec::Individual(id) => {
                    expansion.push_edge(TEST_BREED_ID, id);
                    expansion.expand(id, 1);
                }
                ParentSpec::Grandparents(gp) => match options.grandparents {
                    GrandparentConvention::PlaceholderParent => {
                        let placeholder = side.placeholder_id();
                        expansion.push_node(
                            Node::new(&placeholder, side.unknown_label())
                                .with_shape(SYNTHETIC_SHAPE),
                        );
                        expansion.push_edge(TEST_BREED_ID, &placeholder);
                        if expansion.bound() > 1 {
                            add_grandparents(&mut expansion, side, gp, &placeholder, 2);
                        }
                    }
                    GrandparentConvention::DirectEdges => {
                        add_grandparents(&mut expansion, side, gp, TEST_BREED_ID, 1);
                    }
                },
            }
        }
    }

    let (graph, common) = expansion.finish();
    Some(assemble(vec![TEST_BREED_ID.to_owned()], graph, common, options))
}

/// Links `from` to each resolvable grandparent, placed at generation `depth`.
fn add_grandparents<L: AncestryLookup + ?Sized>(
    expansion: &mut Expansion<'_, L>,
    side: Side,
    gp: &Grandparents,
    from: &str,
    depth: u32,
) {
    let roles = [("mother", gp.mother.as_ref()), ("father", gp.father.as_ref())];
    for (role, grandparent) in roles {
        let Some(grandparent) = grandparent else {
            continue;
        };
        match grandparent {
            GrandparentRef::Registered(id) => {
                if !expansion.knows(id) {
                    tracing::debug!(
                        side = side.slug(),
                        role,
                        id = %id,
                        "unknown grandparent skipped"
                    );
                    continue;
                }
                expansion.push_edge(from, id);
                expansion.expand(id, depth);
            }
            GrandparentRef::Unregistered(label) => {
                if label.trim().is_empty() {
                    continue;
                }
                let id = format!("{TEST_BREED_ID}/{}/{role}", side.slug());
                expansion.push_node(Node::new(&id, label).with_shape(SYNTHETIC_SHAPE));
                expansion.push_edge(from, &id);
            }
        }
    }
}
