//! Shared test helper functions for constructing ancestry fixtures.
//!
//! This module is compiled only in test builds. Integration tests in
//! `crates/herdbook-core/tests/` define their own local helpers because they
//! link against the non-test library build where this module is not available.
#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use crate::ancestry::AncestryRecord;
use crate::newtypes::Generations;

/// Builds a lookup from `(id, mother, father)` triples.
///
/// Every record is labelled `"Animal <id>"`.
pub fn lookup(rows: &[(&str, Option<&str>, Option<&str>)]) -> BTreeMap<String, AncestryRecord> {
    rows.iter()
        .map(|&(id, mother, father)| {
            let record = AncestryRecord {
                mother: mother.map(str::to_owned),
                father: father.map(str::to_owned),
                label: format!("Animal {id}"),
            };
            (id.to_owned(), record)
        })
        .collect()
}

/// A small inbred family: `kid` is the offspring of two half-siblings that
/// share the sire `gs`, whose own dam is `ggd`.
///
/// ```text
/// kid ─┬─ dam ──┬─ gd1
///      │        └─ gs ── ggd
///      └─ sire ─┬─ gd2
///               └─ gs ── ggd
/// ```
pub fn family_lookup() -> BTreeMap<String, AncestryRecord> {
    lookup(&[
        ("kid", Some("dam"), Some("sire")),
        ("dam", Some("gd1"), Some("gs")),
        ("sire", Some("gd2"), Some("gs")),
        ("gs", Some("ggd"), None),
        ("gd1", None, None),
        ("gd2", None, None),
        ("ggd", None, None),
    ])
}

/// Creates a [`Generations`] bound, panicking on invalid input (test-only).
pub fn generations(n: u32) -> Generations {
    Generations::new(n).expect("valid generation bound")
}
