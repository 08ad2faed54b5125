//! Implementation of `herdbook test-breed <registry> [mating flags]`.
//!
//! Each side of the mating is given either as a registered animal
//! (`--dam`, `--sire`) or as that animal's parents (`--dam-mother`,
//! `--dam-father`, `--sire-mother`, `--sire-father`). A grandparent written
//! as `=Label` is an unregistered animal known only by name.
//!
//! Exit codes: 0 = success, 1 = neither side resolves, 2 = unreadable
//! registry.
use herdbook_core::{BuildOptions, Registry, test_breed_pedigree};

use crate::cli::MatingArgs;
use crate::cmd::Settings;
use crate::error::CliError;
use crate::output::print_pedigree;

/// Runs the `test-breed` command.
///
/// # Errors
///
/// [`CliError::NoPedigree`] if neither side of the mating can be resolved
/// against the registry.
pub fn run(registry: &Registry, mating: &MatingArgs, settings: &Settings) -> Result<(), CliError> {
    let options = BuildOptions {
        grandparents: mating.grandparents.into(),
        ..settings.options
    };
    let spec = mating.to_spec();
    tracing::debug!(?spec, "planned mating");

    let pedigree = test_breed_pedigree(registry, &spec, &options).ok_or_else(|| {
        CliError::NoPedigree {
            subject: "the planned mating".to_owned(),
        }
    })?;
    print_pedigree(&pedigree, settings.format)
}
