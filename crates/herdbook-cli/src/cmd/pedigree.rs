//! Implementation of `herdbook pedigree <registry> <id>`.
//!
//! Exit codes: 0 = success, 1 = unknown animal, 2 = unreadable registry.
use herdbook_core::{Registry, individual_pedigree};

use crate::cmd::Settings;
use crate::error::CliError;
use crate::output::print_pedigree;

/// Runs the `pedigree` command.
///
/// # Errors
///
/// [`CliError::NoPedigree`] if `id` is not in the registry.
pub fn run(registry: &Registry, id: &str, settings: &Settings) -> Result<(), CliError> {
    let pedigree =
        individual_pedigree(registry, id, &settings.options).ok_or_else(|| {
            CliError::NoPedigree {
                subject: format!("animal {id:?}"),
            }
        })?;
    print_pedigree(&pedigree, settings.format)
}
