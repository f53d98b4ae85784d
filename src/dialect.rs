//! # Dialect Selection
//!
//! The closed set of supported protocol dialects. A printer profile picks one
//! at setup time; its [`CommandSet`] is built once per process on first use
//! and shared read-only afterwards.
//!
//! ## Usage
//!
//! ```
//! use escpos_dialect::Dialect;
//! use escpos_dialect::protocol::capability::Capability;
//!
//! let dialect = Dialect::parse("star")?;
//! let set = dialect.command_set();
//! assert_eq!(set.resolve(Capability::Bold(true)), [0x1B, 0x45]);
//! # Ok::<(), escpos_dialect::DialectError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::cmdset::{self, CommandSet};
use crate::error::{DialectError, Result};

static ESCPOS: LazyLock<CommandSet> =
    LazyLock::new(|| cmdset::escpos::command_set().expect("Incomplete ESC/POS command table"));

static STAR: LazyLock<CommandSet> =
    LazyLock::new(|| cmdset::star::command_set(&ESCPOS).expect("Incomplete Star command table"));

/// Supported protocol dialects
///
/// Serialized as [`Dialect::name`] and deserialized through [`Dialect::parse`],
/// so profile files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// Generic Epson-style ESC/POS
    #[default]
    EscPos,
    /// Star Micronics (Star Line mode)
    Star,
}

impl Dialect {
    pub const ALL: [Self; 2] = [Self::EscPos, Self::Star];

    pub fn name(self) -> &'static str {
        match self {
            Self::EscPos => cmdset::escpos::NAME,
            Self::Star => cmdset::star::NAME,
        }
    }

    /// Shared, lazily built command set for this dialect.
    pub fn command_set(self) -> &'static CommandSet {
        match self {
            Self::EscPos => &ESCPOS,
            Self::Star => &STAR,
        }
    }

    /// Build a fresh, owned command set, surfacing table errors as values.
    pub fn build(self) -> Result<CommandSet> {
        let base = cmdset::escpos::command_set()?;
        match self {
            Self::EscPos => Ok(base),
            Self::Star => cmdset::star::command_set(&base),
        }
    }

    /// Parse a profile string.
    ///
    /// Accepts `"escpos"`, `"esc/pos"`, `"generic"`, `"epson"` and `"star"`,
    /// case-insensitively.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "escpos" | "esc/pos" | "generic" | "epson" => Ok(Self::EscPos),
            "star" => Ok(Self::Star),
            _ => Err(DialectError::UnknownDialect(s.to_string())),
        }
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Dialect {
    type Error = DialectError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.name().to_string()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
