//! Implementation of `herdbook herd <registry> <herd-id>`.
//!
//! Members missing from the registry are skipped (run with `--verbose` to see
//! which). A herd none of whose members can be found has no pedigree.
//!
//! Exit codes: 0 = success, 1 = unknown or empty herd, 2 = unreadable
//! registry.
use herdbook_core::{Registry, herd_pedigree};

use crate::cmd::Settings;
use crate::error::CliError;
use crate::output::print_pedigree;

/// Runs the `herd` command.
///
/// # Errors
///
/// - [`CliError::UnknownHerd`] if `herd_id` is not in the registry.
/// - [`CliError::NoPedigree`] if none of its members are registered animals.
pub fn run(registry: &Registry, herd_id: &str, settings: &Settings) -> Result<(), CliError> {
    let herd = registry
        .herd(herd_id)
        .ok_or_else(|| CliError::UnknownHerd {
            herd_id: herd_id.to_owned(),
        })?;

    let pedigree = herd_pedigree(registry, &herd.members, &settings.options).ok_or_else(|| {
        CliError::NoPedigree {
            subject: format!("herd {herd_id:?}"),
        }
    })?;
    print_pedigree(&pedigree, settings.format)
}
