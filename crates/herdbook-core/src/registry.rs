//! The registry document: the animals and herds a pedigree is built from.
//!
//! The document is plain JSON:
//!
//! ```json
//! { "animals": [ { "id": "G1-1", "name": "Ylva", "mother": "G2-3", "father": null } ],
//!   "herds":   [ { "id": "G1", "name": "Gården", "members": ["G1-1"] } ] }
//! ```
//!
//! Both top-level keys may be omitted. Unknown keys are ignored so that
//! exports from the registry's own database can be fed in unchanged.
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::ancestry::{AncestryLookup, AncestryRecord};

/// Errors produced while loading a registry document.
#[derive(Debug)]
pub enum RegistryParseError {
    /// The document is not valid JSON or does not have the registry shape.
    InvalidJson(serde_json::Error),
    /// Two animals share the same id.
    DuplicateAnimalId(String),
    /// Two herds share the same id.
    DuplicateHerdId(String),
}

impl std::fmt::Display for RegistryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(e) => write!(f, "invalid registry document: {e}"),
            Self::DuplicateAnimalId(id) => write!(f, "duplicate animal id: {id:?}"),
            Self::DuplicateHerdId(id) => write!(f, "duplicate herd id: {id:?}"),
        }
    }
}

impl std::error::Error for RegistryParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson(e) => Some(e),
            Self::DuplicateAnimalId(_) | Self::DuplicateHerdId(_) => None,
        }
    }
}

impl From<serde_json::Error> for RegistryParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e)
    }
}

/// One registered animal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Registry number.
    pub id: String,
    /// Name, if the animal has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registry number of the dam.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,
    /// Registry number of the sire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,
}

impl Animal {
    /// Display label: `"<name> (<id>)"`, or the bare id for nameless animals.
    pub fn label(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("{name} ({})", self.id),
            _ => self.id.clone(),
        }
    }

    fn record(&self) -> AncestryRecord {
        AncestryRecord {
            mother: non_blank(self.mother.as_deref()),
            father: non_blank(self.father.as_deref()),
            label: self.label(),
        }
    }
}

/// Registry exports write an unknown parent as either `null` or `""`.
fn non_blank(id: Option<&str>) -> Option<String> {
    id.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// A herd: a named group of animals kept together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Herd {
    /// Herd code.
    pub id: String,
    /// Herd name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registry numbers of the current members.
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Deserialize)]
struct RegistryDocument {
    #[serde(default)]
    animals: Vec<Animal>,
    #[serde(default)]
    herds: Vec<Herd>,
}

/// A loaded registry, usable directly as an [`AncestryLookup`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registry {
    animals: Vec<Animal>,
    herds: Vec<Herd>,
    #[serde(skip)]
    records: HashMap<String, AncestryRecord>,
    #[serde(skip)]
    herd_index: HashMap<String, usize>,
}

impl Registry {
    /// Builds a registry from animal and herd lists.
    ///
    /// # Errors
    ///
    /// [`RegistryParseError::DuplicateAnimalId`] or
    /// [`RegistryParseError::DuplicateHerdId`] if an id occurs twice.
    pub fn new(animals: Vec<Animal>, herds: Vec<Herd>) -> Result<Self, RegistryParseError> {
        let mut records = HashMap::with_capacity(animals.len());
        for animal in &animals {
            match records.entry(animal.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(RegistryParseError::DuplicateAnimalId(animal.id.clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(animal.record());
                }
            }
        }

        let mut herd_index = HashMap::with_capacity(herds.len());
        for (i, herd) in herds.iter().enumerate() {
            if herd_index.insert(herd.id.clone(), i).is_some() {
                return Err(RegistryParseError::DuplicateHerdId(herd.id.clone()));
            }
        }

        Ok(Self {
            animals,
            herds,
            records,
            herd_index,
        })
    }

    /// Parses a registry document from JSON text.
    ///
    /// # Errors
    ///
    /// [`RegistryParseError::InvalidJson`] for malformed input, plus the
    /// duplicate-id errors of [`Registry::new`].
    pub fn from_json(content: &str) -> Result<Self, RegistryParseError> {
        let doc: RegistryDocument = serde_json::from_str(content)?;
        let registry = Self::new(doc.animals, doc.herds)?;
        tracing::debug!(
            animals = registry.animals.len(),
            herds = registry.herds.len(),
            "registry loaded"
        );
        Ok(registry)
    }

    /// All animals, in document order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// All herds, in document order.
    pub fn herds(&self) -> &[Herd] {
        &self.herds
    }

    /// Looks up a herd by id.
    pub fn herd(&self, id: &str) -> Option<&Herd> {
        self.herd_index.get(id).and_then(|&i| self.herds.get(i))
    }
}

impl AncestryLookup for Registry {
    fn record(&self, id: &str) -> Option<&AncestryRecord> {
        self.records.get(id)
    }
}
