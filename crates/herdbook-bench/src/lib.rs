//! Synthetic herdbook generator and benchmark utilities.
//!
//! This crate provides deterministic generation of registries with realistic
//! inbreeding for benchmarking and property-based testing of `herdbook-core`.

pub mod generator;

pub use generator::{
    GeneratorConfig, SizeTier, animal_id, generate_records, generate_registry,
    generate_registry_json,
};
