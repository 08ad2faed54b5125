//! Synchronous ancestry lookup consumed by the pedigree builders.
//!
//! The engine never fetches records itself. Callers load whatever they need
//! up front and hand the builders an [`AncestryLookup`]: a `HashMap` or
//! `BTreeMap` of [`AncestryRecord`]s, a [`crate::registry::Registry`], or any
//! other type that can answer "who are the recorded parents of this id".
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Recorded parentage and display label of one individual.
///
/// Either parent may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryRecord {
    /// Registry id of the recorded mother (dam).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,

    /// Registry id of the recorded father (sire).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,

    /// Display text for the individual's node.
    pub label: String,
}

impl AncestryRecord {
    /// Creates a record with no known parents.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            mother: None,
            father: None,
            label: label.into(),
        }
    }

    /// Returns this record with its mother set.
    pub fn with_mother(mut self, id: impl Into<String>) -> Self {
        self.mother = Some(id.into());
        self
    }

    /// Returns this record with its father set.
    pub fn with_father(mut self, id: impl Into<String>) -> Self {
        self.father = Some(id.into());
        self
    }

    /// Recorded parents in mother, father order, skipping unknowns.
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.mother.iter().chain(self.father.iter()).map(String::as_str)
    }
}

/// Read-only access to ancestry records keyed by individual id.
pub trait AncestryLookup {
    /// Returns the record for `id`, or `None` if the individual is not known.
    fn record(&self, id: &str) -> Option<&AncestryRecord>;

    /// Returns `true` if `id` is known to the lookup.
    fn contains(&self, id: &str) -> bool {
        self.record(id).is_some()
    }
}

impl<L: AncestryLookup + ?Sized> AncestryLookup for &L {
    fn record(&self, id: &str) -> Option<&AncestryRecord> {
        (**self).record(id)
    }
}

impl<S: std::hash::BuildHasher> AncestryLookup for HashMap<String, AncestryRecord, S> {
    fn record(&self, id: &str) -> Option<&AncestryRecord> {
        self.get(id)
    }
}

impl AncestryLookup for BTreeMap<String, AncestryRecord> {
    fn record(&self, id: &str) -> Option<&AncestryRecord> {
        self.get(id)
    }
}
