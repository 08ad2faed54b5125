/// Validated newtype wrappers for builder parameters.
///
/// [`Generations`] is the only parameter the engine rejects outright: a
/// negative, non-integer or absurdly large generation bound is a caller
/// programming error rather than a data-quality issue. Once constructed the
/// inner value is immutable. The `Deserialize` impl re-runs validation so an
/// invalid bound cannot enter through JSON.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The input did not match the expected format.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// Generations
// ---------------------------------------------------------------------------

/// Maximum number of generations a pedigree may be expanded.
///
/// Expansion is per path, so the raw node count can grow as `2^g`. The cap
/// keeps a typo in a request from turning into unbounded work.
const MAX_GENERATIONS: u32 = 64;

const GENERATIONS_EXPECTED: &str = "an integer between 0 and 64";

/// Generation bound for pedigree expansion.
///
/// The root is generation 0; a node at generation `k` is expanded into its
/// parents only when `k` is below the bound. `Generations::new(0)` therefore
/// yields a root-only graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generations(u32);

impl Generations {
    /// Upper bound accepted by every constructor.
    pub const MAX: Generations = Generations(MAX_GENERATIONS);

    /// Creates a bound, rejecting values above [`Generations::MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`NewtypeError::InvalidFormat`] if `n > 64`.
    pub fn new(n: u32) -> Result<Self, NewtypeError> {
        if n > MAX_GENERATIONS {
            return Err(invalid(n.to_string()));
        }
        Ok(Self(n))
    }

    /// Returns the bound as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Generations {
    /// Five generations, the usual depth of a printed pedigree certificate.
    fn default() -> Self {
        Self(5)
    }
}

fn invalid(got: String) -> NewtypeError {
    NewtypeError::InvalidFormat {
        type_name: "Generations",
        expected: GENERATIONS_EXPECTED,
        got,
    }
}

impl TryFrom<i64> for Generations {
    type Error = NewtypeError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        let n = u32::try_from(n).map_err(|_| invalid(n.to_string()))?;
        Self::new(n)
    }
}

impl FromStr for Generations {
    type Err = NewtypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s.trim().parse().map_err(|_| invalid(s.to_owned()))?;
        Self::try_from(n)
    }
}

impl fmt::Display for Generations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Generations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for Generations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(deserializer)?;
        Generations::try_from(n).map_err(de::Error::custom)
    }
}
