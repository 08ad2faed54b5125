//! Implementation of `herdbook loop <registry> <id> <ancestor>`.
//!
//! Builds the pedigree of `id` and prints every edge lying on a line of
//! descent from `id` to `ancestor`. For a common ancestor these edges form
//! the inbreeding loop.
//!
//! Output (human mode): one `from -> to` edge per line.
//! Output (JSON mode): a JSON object `{"edges": [...], "count": N}`.
//! With `--highlight` the whole pedigree is printed instead, its loop edges
//! stroked and its common ancestors filled, ready for the renderer.
//!
//! Exit codes: 0 = success, 1 = unknown animal or no connecting path,
//! 2 = unreadable registry.
use herdbook_core::{Registry, individual_pedigree};

use crate::cmd::Settings;
use crate::error::CliError;
use crate::output::{print_loop, print_pedigree};

/// Runs the `loop` command.
///
/// # Errors
///
/// - [`CliError::NoPedigree`] if `id` is not in the registry.
/// - [`CliError::NoConnectingPath`] if `ancestor` is not reached from `id`
///   within the generation bound.
pub fn run(
    registry: &Registry,
    id: &str,
    ancestor: &str,
    settings: &Settings,
) -> Result<(), CliError> {
    let pedigree =
        individual_pedigree(registry, id, &settings.options).ok_or_else(|| {
            CliError::NoPedigree {
                subject: format!("animal {id:?}"),
            }
        })?;

    let edges = pedigree.inbreeding_loop(ancestor);
    if edges.is_empty() {
        return Err(CliError::NoConnectingPath {
            id: id.to_owned(),
            ancestor: ancestor.to_owned(),
        });
    }
    tracing::info!(
        id,
        ancestor,
        edges = edges.len(),
        common = pedigree.is_common(ancestor),
        "loop traced"
    );
    if settings.options.highlight_common {
        print_pedigree(&pedigree.with_loop_highlighted(ancestor), settings.format)
    } else {
        print_loop(&edges, settings.format)
    }
}
