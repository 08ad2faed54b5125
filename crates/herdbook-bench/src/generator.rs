//! Registry generator.
//!
//! Animals are numbered in birth order. Each non-founder draws its parents
//! from a window of recently born animals, so a narrow window produces a
//! small breeding population and many common ancestors.

use herdbook_core::{Animal, Herd, Registry, RegistryParseError};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the registry generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Total number of animals.
    pub num_animals: usize,
    /// Number of leading animals with no recorded parents.
    pub num_founders: usize,
    /// How many of the most recently born animals are eligible as parents.
    pub breeding_window: usize,
    /// Probability that a parent is left unrecorded (0.0-1.0).
    pub unknown_parent_rate: f64,
    /// Probability that a recorded parent is missing from the registry (0.0-1.0).
    pub unregistered_parent_rate: f64,
    /// Members per herd; herds are cut from the youngest animals.
    pub herd_size: usize,
    /// Number of herds.
    pub num_herds: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// ~100 animals from a tight population.
    Small,
    /// ~2000 animals.
    Medium,
    /// ~20000 animals.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_animals: 100,
                num_founders: 8,
                breeding_window: 20,
                unknown_parent_rate: 0.05,
                unregistered_parent_rate: 0.02,
                herd_size: 10,
                num_herds: 3,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_animals: 2_000,
                num_founders: 30,
                breeding_window: 120,
                unknown_parent_rate: 0.05,
                unregistered_parent_rate: 0.02,
                herd_size: 40,
                num_herds: 10,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_animals: 20_000,
                num_founders: 100,
                breeding_window: 600,
                unknown_parent_rate: 0.03,
                unregistered_parent_rate: 0.01,
                herd_size: 200,
                num_herds: 20,
            },
        }
    }
}

/// Registry number of the `n`th generated animal.
pub fn animal_id(n: usize) -> String {
    format!("B{}-{}", n / 100, n % 100)
}

/// Generates the animal and herd lists for `config`.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_records(config: &GeneratorConfig) -> (Vec<Animal>, Vec<Herd>) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut animals = Vec::with_capacity(config.num_animals);

    for n in 0..config.num_animals {
        let (mother, father) = if n < config.num_founders.max(1) {
            (None, None)
        } else {
            let lo = n.saturating_sub(config.breeding_window.max(1));
            (
                pick_parent(&mut rng, config, lo, n),
                pick_parent(&mut rng, config, lo, n),
            )
        };
        animals.push(Animal {
            id: animal_id(n),
            name: (n % 3 != 0).then(|| format!("Animal {n}")),
            mother,
            father,
        });
    }

    let herds = (0..config.num_herds)
        .map(|h| {
            let end = config.num_animals.saturating_sub(h * config.herd_size);
            let start = end.saturating_sub(config.herd_size);
            Herd {
                id: format!("H{h}"),
                name: Some(format!("Herd {h}")),
                members: (start..end).map(animal_id).collect(),
            }
        })
        .collect();

    (animals, herds)
}

fn pick_parent(rng: &mut StdRng, config: &GeneratorConfig, lo: usize, hi: usize) -> Option<String> {
    if rng.gen_bool(config.unknown_parent_rate) {
        return None;
    }
    if rng.gen_bool(config.unregistered_parent_rate) {
        // Numbered past the end of the registry, so never resolvable.
        return Some(animal_id(config.num_animals + rng.gen_range(0..1_000)));
    }
    Some(animal_id(rng.gen_range(lo..hi)))
}

/// Generates a [`Registry`] from `config`.
///
/// # Errors
///
/// Propagates [`RegistryParseError`] from [`Registry::new`]; generated ids
/// are unique, so this does not occur for valid configurations.
pub fn generate_registry(config: &GeneratorConfig) -> Result<Registry, RegistryParseError> {
    let (animals, herds) = generate_records(config);
    Registry::new(animals, herds)
}

/// Generates a registry document as JSON text, for load benchmarks.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if serialization fails.
pub fn generate_registry_json(config: &GeneratorConfig) -> Result<String, serde_json::Error> {
    let (animals, herds) = generate_records(config);
    serde_json::to_string(&serde_json::json!({ "animals": animals, "herds": herds }))
}
