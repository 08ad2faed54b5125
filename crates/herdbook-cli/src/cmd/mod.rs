/// Command module for the `herdbook` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// loaded [`Registry`](herdbook_core::Registry), the subcommand's arguments
/// and the shared [`Settings`], and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure.
use herdbook_core::BuildOptions;

use crate::OutputFormat;

pub mod herd;
pub mod loop_;
pub mod pedigree;
pub mod test_breed;

/// Global flags resolved once in `main`.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Output format for stdout.
    pub format: OutputFormat,
    /// Builder options derived from `--generations` and `--highlight`.
    pub options: BuildOptions,
}
