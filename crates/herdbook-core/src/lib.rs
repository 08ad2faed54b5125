#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod ancestry;
pub mod dedup;
pub mod graph;
pub mod newtypes;
pub mod pedigree;
pub mod registry;
pub mod structures;

#[cfg(test)]
mod test_helpers;

pub use ancestry::{AncestryLookup, AncestryRecord};
pub use dedup::{unique, unique_and_common, unique_and_common_values, unique_values};
pub use graph::{
    Direction, GraphBuildError, IndexedGraph, PedigreeGraph, connecting_edges, drop_cycle_edges,
    is_acyclic, merge_graphs, reachable_from,
};
pub use newtypes::{Generations, NewtypeError};
pub use pedigree::{
    BuildOptions, COMMON_ANCESTOR_COLOR, GrandparentConvention, GrandparentRef, Grandparents,
    LOOP_COLOR, MatingSpec, ParentSpec, Pedigree, SYNTHETIC_SHAPE, TEST_BREED_ID,
    TEST_BREED_LABEL, herd_pedigree, individual_pedigree, test_breed_pedigree,
};
pub use registry::{Animal, Herd, Registry, RegistryParseError};
pub use structures::{Edge, Node, NodeStyle};

/// Returns the current version of the herdbook-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
