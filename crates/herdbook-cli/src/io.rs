/// Registry loading: file and stdin reading with size enforcement and UTF-8
/// validation.
///
/// This module is the single entry point for all input I/O in the `herdbook`
/// binary. `herdbook-core` never touches the filesystem.
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered through `Read::take` so allocation is bounded.
/// - Every failure becomes a [`CliError`] with exit code 2.
use std::io::{ErrorKind, Read};
use std::path::Path;

use herdbook_core::Registry;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads and parses the registry document at `source`.
///
/// # Errors
///
/// Any error from [`read_input`], or [`CliError::RegistryParse`] when the
/// content is not a valid registry document.
pub fn load_registry(source: &PathOrStdin, max_size: u64) -> Result<Registry, CliError> {
    let content = read_input(source, max_size)?;
    let registry = Registry::from_json(&content)?;
    tracing::debug!(
        source = %source_label(source),
        animals = registry.animals().len(),
        herds = registry.herds().len(),
        "registry read"
    );
    Ok(registry)
}

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, input
/// larger than `max_size`, a stdin read failure, or invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(std::io::stdin().lock(), max_size),
    }
}

fn source_label(source: &PathOrStdin) -> String {
    match source {
        PathOrStdin::Path(path) => path.display().to_string(),
        PathOrStdin::Stdin => "-".to_owned(),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads `reader` to the end, failing once more than `max_size` bytes arrive.
///
/// One byte past the limit is requested so that input of exactly `max_size`
/// bytes is accepted.
fn read_stdin<R: Read>(reader: R, max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }

    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}
