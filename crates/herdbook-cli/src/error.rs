//! Error type of the `herdbook` binary.
//!
//! Every [`CliError`] carries one of two exit codes:
//!
//! - **2** when the registry document never made it into memory: missing,
//!   unreadable, oversized, not UTF-8, or not a valid registry.
//! - **1** when the registry loaded but the request has no answer: unknown
//!   animal or herd, unresolvable mating, or an ancestor off every line.
use std::fmt;
use std::path::PathBuf;

use herdbook_core::RegistryParseError;

/// Failure of a `herdbook` invocation.
#[derive(Debug)]
pub enum CliError {
    /// The registry path does not exist.
    FileNotFound {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// The registry path exists but cannot be opened.
    PermissionDenied {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// The registry is larger than `--max-file-size`.
    FileTooLarge {
        /// `"-"` for stdin, otherwise the path.
        source: String,
        /// Limit in bytes.
        limit: u64,
        /// Size on disk; unknown for stdin, which is cut off at the limit.
        actual: Option<u64>,
    },

    /// The registry is not UTF-8 text.
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the path.
        source: String,
        /// Offset of the first byte that is not valid UTF-8.
        byte_offset: usize,
    },

    /// Reading stdin failed.
    StdinReadError {
        /// Message of the underlying I/O error.
        detail: String,
    },

    /// Any other read or write failure.
    IoError {
        /// What was being read or written.
        source: String,
        /// Message of the underlying I/O error.
        detail: String,
    },

    /// The text is not a valid registry document.
    RegistryParse(RegistryParseError),

    /// No pedigree could be built: the animal is unknown, or neither side of
    /// a planned mating resolves.
    NoPedigree {
        /// What was asked for, e.g. `animal "G1-1"`.
        subject: String,
    },

    /// The herd code is not in the registry.
    UnknownHerd {
        /// The herd code that was looked up.
        herd_id: String,
    },

    /// The ancestor is not reachable from the animal within the bound.
    NoConnectingPath {
        /// The animal the pedigree was built for.
        id: String,
        /// The ancestor that was looked for.
        ancestor: String,
    },
}

impl CliError {
    /// Process exit code: 2 for unreadable input, 1 for an unanswerable
    /// request.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoPedigree { .. } | Self::UnknownHerd { .. } | Self::NoConnectingPath { .. } => 1,
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::RegistryParse(_) => 2,
        }
    }

    /// The line printed to stderr before exiting.
    pub fn message(&self) -> String {
        let body = match self {
            Self::FileNotFound { path } => format!("registry file not found: {}", path.display()),
            Self::PermissionDenied { path } => {
                format!("cannot open {}: permission denied", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual,
            } => match actual {
                Some(actual) => format!(
                    "{source} is too large: {actual} bytes against a --max-file-size of {limit}"
                ),
                None => format!("{source} is too large: more than {limit} bytes (--max-file-size)"),
            },
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => format!("{source} is not UTF-8 text (bad byte at offset {byte_offset})"),
            Self::StdinReadError { detail } => format!("reading stdin failed: {detail}"),
            Self::IoError { source, detail } => format!("{source}: {detail}"),
            Self::RegistryParse(e) => e.to_string(),
            Self::NoPedigree { subject } => format!("no pedigree available for {subject}"),
            Self::UnknownHerd { herd_id } => format!("unknown herd: {herd_id:?}"),
            Self::NoConnectingPath { id, ancestor } => format!(
                "{ancestor:?} is not an ancestor of {id:?} within the generation bound"
            ),
        };
        format!("error: {body}")
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RegistryParse(e) => Some(e),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::NoPedigree { .. }
            | Self::UnknownHerd { .. }
            | Self::NoConnectingPath { .. } => None,
        }
    }
}

impl From<RegistryParseError> for CliError {
    fn from(e: RegistryParseError) -> Self {
        Self::RegistryParse(e)
    }
}
