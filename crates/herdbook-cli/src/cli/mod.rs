//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use herdbook_core::{
    GrandparentConvention, GrandparentRef, Grandparents, MatingSpec, ParentSpec,
};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints a plain-text summary to stdout. `Json` prints the
/// serialized pedigree (or loop) as a single pretty-printed object.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// Structured JSON for the renderer.
    Json,
}

/// Placement of grandparents when a test-breed side is given as a pair.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum GrandparentPlacement {
    /// An "Unknown dam/sire" node stands in for the missing parent (default).
    #[default]
    Placeholder,
    /// The offspring points straight at the grandparents.
    Direct,
}

impl From<GrandparentPlacement> for GrandparentConvention {
    fn from(p: GrandparentPlacement) -> Self {
        match p {
            GrandparentPlacement::Placeholder => GrandparentConvention::PlaceholderParent,
            GrandparentPlacement::Direct => GrandparentConvention::DirectEdges,
        }
    }
}

/// Both sides of a planned mating, as given on the command line.
///
/// A grandparent value prefixed with `=` is taken as a display label for an
/// unregistered animal; anything else is a registry number.
#[derive(Args, Clone, Debug, Default)]
pub struct MatingArgs {
    /// Registry number of the prospective dam.
    #[arg(long, value_name = "ID", conflicts_with_all = ["dam_mother", "dam_father"])]
    pub dam: Option<String>,
    /// The dam's mother, when the dam is unregistered.
    #[arg(long, value_name = "ID|=LABEL")]
    pub dam_mother: Option<String>,
    /// The dam's father, when the dam is unregistered.
    #[arg(long, value_name = "ID|=LABEL")]
    pub dam_father: Option<String>,
    /// Registry number of the prospective sire.
    #[arg(long, value_name = "ID", conflicts_with_all = ["sire_mother", "sire_father"])]
    pub sire: Option<String>,
    /// The sire's mother, when the sire is unregistered.
    #[arg(long, value_name = "ID|=LABEL")]
    pub sire_mother: Option<String>,
    /// The sire's father, when the sire is unregistered.
    #[arg(long, value_name = "ID|=LABEL")]
    pub sire_father: Option<String>,
    /// Where grandparents sit when a side is given as a grandparent pair.
    #[arg(long, value_enum, default_value = "placeholder")]
    pub grandparents: GrandparentPlacement,
}

impl MatingArgs {
    /// Converts the flags into the engine's mating description.
    pub fn to_spec(&self) -> MatingSpec {
        MatingSpec {
            dam: side(
                self.dam.as_deref(),
                self.dam_mother.as_deref(),
                self.dam_father.as_deref(),
            ),
            sire: side(
                self.sire.as_deref(),
                self.sire_mother.as_deref(),
                self.sire_father.as_deref(),
            ),
        }
    }
}

fn side(parent: Option<&str>, mother: Option<&str>, father: Option<&str>) -> Option<ParentSpec> {
    if let Some(id) = parent {
        return Some(ParentSpec::Individual(id.to_owned()));
    }
    if mother.is_none() && father.is_none() {
        return None;
    }
    Some(ParentSpec::Grandparents(Grandparents {
        mother: mother.map(grandparent),
        father: father.map(grandparent),
    }))
}

fn grandparent(raw: &str) -> GrandparentRef {
    match raw.strip_prefix('=') {
        Some(label) => GrandparentRef::Unregistered(label.to_owned()),
        None => GrandparentRef::Registered(raw.to_owned()),
    }
}

/// All top-level subcommands exposed by the `herdbook` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Build the pedigree of one registered animal.
    Pedigree {
        /// Path to a registry document, or `-` for stdin.
        #[arg(value_name = "REGISTRY")]
        registry: PathOrStdin,
        /// Registry number of the animal.
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Build the merged pedigree of every member of a herd.
    Herd {
        /// Path to a registry document, or `-` for stdin.
        #[arg(value_name = "REGISTRY")]
        registry: PathOrStdin,
        /// Herd code.
        #[arg(value_name = "HERD_ID")]
        herd_id: String,
    },

    /// Build the pedigree of the offspring of a planned mating.
    #[command(name = "test-breed")]
    TestBreed {
        /// Path to a registry document, or `-` for stdin.
        #[arg(value_name = "REGISTRY")]
        registry: PathOrStdin,
        /// The prospective parents.
        #[command(flatten)]
        mating: MatingArgs,
    },

    /// Show the edges linking an animal to one of its ancestors.
    Loop {
        /// Path to a registry document, or `-` for stdin.
        #[arg(value_name = "REGISTRY")]
        registry: PathOrStdin,
        /// Registry number of the animal.
        #[arg(value_name = "ID")]
        id: String,
        /// Registry number of the ancestor.
        #[arg(value_name = "ANCESTOR")]
        ancestor: String,
    },

    /// Print the herdbook-core library version.
    Version,
}

/// Root CLI struct for the `herdbook` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "herdbook",
    version,
    about = "Pedigree graphs for a rare-breed herdbook",
    long_about = "Builds bounded-depth pedigree graphs from a herdbook registry document.\n\
                  Flags common ancestors and traces the lines of descent that join them."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Number of generations to expand above each root.
    ///
    /// Can also be set via the `HERDBOOK_GENERATIONS` environment variable.
    #[arg(
        long,
        short = 'g',
        global = true,
        env = "HERDBOOK_GENERATIONS",
        default_value = "5"
    )]
    pub generations: herdbook_core::Generations,

    /// Colour common ancestors in the output graph.
    #[arg(long, global = true)]
    pub highlight: bool,

    /// Log engine decisions (truncated branches, skipped members) to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `HERDBOOK_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "HERDBOOK_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}
