//! # Barcode Symbology Registry
//!
//! Payload validation and type selection for 1D barcodes.
//!
//! ## Two Print Commands
//!
//! ESC/POS defines two "print bar code" commands that share the `GS k` prefix
//! but address different symbology ranges:
//!
//! | Table | Format | Symbologies |
//! |-------|--------|-------------|
//! | A | `GS k m data NUL` (m = 0-6) | UPC-A .. NW7 |
//! | B | `GS k m n data` (m = 65-78) | all of A plus CODE93, CODE128, GS1 |
//!
//! CODABAR is another name for NW7 and shares its code in both tables.
//! The registry never guesses which table is active; callers pass it.
//!
//! ## Usage
//!
//! ```
//! use escpos_dialect::protocol::barcode::{self, BarcodeTable, Symbology};
//!
//! let sym: Symbology = "EAN13".parse()?;
//! barcode::validate_payload(sym, "4006381333931")?;
//! let prefix = barcode::type_command(BarcodeTable::B, sym)?;
//! assert_eq!(prefix, vec![0x1D, 0x6B, 67]);
//! # Ok::<(), escpos_dialect::DialectError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::commands::GS;
use crate::error::{DialectError, Result};

// ============================================================================
// SYMBOLOGIES
// ============================================================================

/// 1D barcode symbologies known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symbology {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    /// Interleaved 2 of 5
    Itf,
    Nw7,
    /// Same symbol as NW7
    Codabar,
    Code93,
    Code128,
    Gs1_128,
    Gs1DatabarOmnidirectional,
    Gs1DatabarTruncated,
    Gs1DatabarLimited,
    Gs1DatabarExpanded,
}

impl Symbology {
    pub const ALL: [Self; 15] = [
        Self::UpcA,
        Self::UpcE,
        Self::Ean13,
        Self::Ean8,
        Self::Code39,
        Self::Itf,
        Self::Nw7,
        Self::Codabar,
        Self::Code93,
        Self::Code128,
        Self::Gs1_128,
        Self::Gs1DatabarOmnidirectional,
        Self::Gs1DatabarTruncated,
        Self::Gs1DatabarLimited,
        Self::Gs1DatabarExpanded,
    ];

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Self::UpcA => "UPC-A",
            Self::UpcE => "UPC-E",
            Self::Ean13 => "EAN13",
            Self::Ean8 => "EAN8",
            Self::Code39 => "CODE39",
            Self::Itf => "ITF",
            Self::Nw7 => "NW7",
            Self::Codabar => "CODABAR",
            Self::Code93 => "CODE93",
            Self::Code128 => "CODE128",
            Self::Gs1_128 => "GS1-128",
            Self::Gs1DatabarOmnidirectional => "GS1 DATABAR OMNIDIRECTIONAL",
            Self::Gs1DatabarTruncated => "GS1 DATABAR TRUNCATED",
            Self::Gs1DatabarLimited => "GS1 DATABAR LIMITED",
            Self::Gs1DatabarExpanded => "GS1 DATABAR EXPANDED",
        }
    }

    /// Length ranges and character-set pattern for this symbology
    pub fn format(self) -> &'static BarcodeFormat {
        &FORMATS[self as usize]
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|sym| sym.name() == upper)
            .ok_or_else(|| DialectError::UnknownSymbology(s.to_string()))
    }
}

impl TryFrom<String> for Symbology {
    type Error = DialectError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Symbology> for String {
    fn from(sym: Symbology) -> Self {
        sym.name().to_string()
    }
}

// ============================================================================
// FORMAT DESCRIPTORS
// ============================================================================

/// Data constraints for one symbology
#[derive(Debug)]
pub struct BarcodeFormat {
    /// Inclusive `(min, max)` character counts; a payload must fit at least one
    pub ranges: &'static [(usize, usize)],
    /// Anchored character-set pattern
    pub pattern: &'static str,
}

impl BarcodeFormat {
    pub fn accepts_length(&self, length: usize) -> bool {
        self.ranges
            .iter()
            .any(|&(min, max)| (min..=max).contains(&length))
    }
}

const NW7_PATTERN: &str = r"^[A-Da-d][0-9$+\-./:]+[A-Da-d]$";
const CODE128_PATTERN: &str = r"^\{[A-C][\x00-\x7F]+$";
const DATABAR_PATTERN: &str = r"^[0-9]{13}$";

/// Indexed by `Symbology as usize`
static FORMATS: [BarcodeFormat; 15] = [
    BarcodeFormat {
        ranges: &[(11, 12)],
        pattern: r"^[0-9]{11,12}$",
    },
    BarcodeFormat {
        ranges: &[(7, 8), (11, 12)],
        pattern: r"^([0-9]{7,8}|[0-9]{11,12})$",
    },
    BarcodeFormat {
        ranges: &[(12, 13)],
        pattern: r"^[0-9]{12,13}$",
    },
    BarcodeFormat {
        ranges: &[(7, 8)],
        pattern: r"^[0-9]{7,8}$",
    },
    BarcodeFormat {
        ranges: &[(1, 255)],
        pattern: r"^([0-9A-Z $%+\-./]+|\*[0-9A-Z $%+\-./]+\*)$",
    },
    BarcodeFormat {
        ranges: &[(2, 255)],
        pattern: r"^([0-9]{2})+$",
    },
    BarcodeFormat {
        ranges: &[(1, 255)],
        pattern: NW7_PATTERN,
    },
    BarcodeFormat {
        ranges: &[(1, 255)],
        pattern: NW7_PATTERN,
    },
    BarcodeFormat {
        ranges: &[(1, 255)],
        pattern: r"^[\x00-\x7F]+$",
    },
    BarcodeFormat {
        ranges: &[(2, 255)],
        pattern: CODE128_PATTERN,
    },
    BarcodeFormat {
        ranges: &[(2, 255)],
        pattern: CODE128_PATTERN,
    },
    BarcodeFormat {
        ranges: &[(13, 13)],
        pattern: DATABAR_PATTERN,
    },
    BarcodeFormat {
        ranges: &[(13, 13)],
        pattern: DATABAR_PATTERN,
    },
    BarcodeFormat {
        ranges: &[(13, 13)],
        pattern: r"^[01][0-9]{12}$",
    },
    BarcodeFormat {
        ranges: &[(2, 255)],
        pattern: r#"^\([0-9][A-Za-z0-9 !"%&'()*+,\-./:;<=>?_{]+$"#,
    },
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FORMATS
        .iter()
        .map(|f| Regex::new(f.pattern).expect("Invalid barcode pattern"))
        .collect()
});

/// # Validate Barcode Payload
///
/// Checks the payload length (in characters) against the symbology's ranges,
/// then its character set. Length is checked first.
///
/// ## Errors
///
/// - [`DialectError::BarcodeLength`] when no range admits the length
/// - [`DialectError::BarcodePattern`] when the pattern rejects the payload
pub fn validate_payload(symbology: Symbology, payload: &str) -> Result<()> {
    let format = symbology.format();
    let length = payload.chars().count();

    if !format.accepts_length(length) {
        tracing::debug!(%symbology, length, "barcode payload rejected: length");
        return Err(DialectError::BarcodeLength {
            symbology: symbology.name(),
            length,
        });
    }

    if !PATTERNS[symbology as usize].is_match(payload) {
        tracing::debug!(%symbology, "barcode payload rejected: pattern");
        return Err(DialectError::BarcodePattern {
            symbology: symbology.name(),
        });
    }

    Ok(())
}

// ============================================================================
// TYPE SELECTOR TABLES
// ============================================================================

/// Which print-barcode command encoding is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarcodeTable {
    /// Legacy function A, NUL-terminated data
    #[default]
    A,
    /// Function B, length-prefixed data, extended symbologies
    B,
}

impl BarcodeTable {
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Selector byte for a symbology, `None` if this table cannot address it
    pub fn code(self, symbology: Symbology) -> Option<u8> {
        use Symbology::*;
        match (self, symbology) {
            (Self::A, UpcA) => Some(0),
            (Self::A, UpcE) => Some(1),
            (Self::A, Ean13) => Some(2),
            (Self::A, Ean8) => Some(3),
            (Self::A, Code39) => Some(4),
            (Self::A, Itf) => Some(5),
            (Self::A, Nw7 | Codabar) => Some(6),
            (Self::A, _) => None,
            (Self::B, UpcA) => Some(65),
            (Self::B, UpcE) => Some(66),
            (Self::B, Ean13) => Some(67),
            (Self::B, Ean8) => Some(68),
            (Self::B, Code39) => Some(69),
            (Self::B, Itf) => Some(70),
            (Self::B, Nw7 | Codabar) => Some(71),
            (Self::B, Code93) => Some(72),
            (Self::B, Code128) => Some(73),
            (Self::B, Gs1_128) => Some(74),
            (Self::B, Gs1DatabarOmnidirectional) => Some(75),
            (Self::B, Gs1DatabarTruncated) => Some(76),
            (Self::B, Gs1DatabarLimited) => Some(77),
            (Self::B, Gs1DatabarExpanded) => Some(78),
        }
    }
}

/// Resolve the selector byte `m` for `symbology` under `table`.
///
/// ## Errors
///
/// [`DialectError::UnsupportedSymbology`] if the table cannot address it.
pub fn select_type(table: BarcodeTable, symbology: Symbology) -> Result<u8> {
    table
        .code(symbology)
        .ok_or(DialectError::UnsupportedSymbology {
            table: table.name(),
            symbology: symbology.name(),
        })
}

/// # Barcode Type Prefix (GS k m)
///
/// The common prefix of both print-barcode commands. The caller appends the
/// data (and the NUL or length byte the chosen table requires).
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m |
/// | Hex     | 1D 6B m |
pub fn type_command(table: BarcodeTable, symbology: Symbology) -> Result<Vec<u8>> {
    Ok(vec![GS, b'k', select_type(table, symbology)?])
}

/// Validate the payload, then resolve the selector byte.
pub fn select_checked(table: BarcodeTable, symbology: Symbology, payload: &str) -> Result<u8> {
    validate_payload(symbology, payload)?;
    select_type(table, symbology)
}

// ============================================================================
// HRI AND DIMENSIONS
// ============================================================================

/// HRI (Human Readable Interpretation) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HriPosition {
    #[default]
    Off = 0,
    Above = 1,
    Below = 2,
    Both = 3,
}

/// HRI font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HriFont {
    #[default]
    A = 0,
    B = 1,
}

/// # Set HRI Position (GS H n)
#[inline]
pub fn hri_position(pos: HriPosition) -> Vec<u8> {
    vec![GS, b'H', pos as u8]
}

/// # Set HRI Font (GS f n)
#[inline]
pub fn hri_font(font: HriFont) -> Vec<u8> {
    vec![GS, b'f', font as u8]
}

/// # Set Barcode Height (GS h n)
///
/// `n` is the height in dots, 1-255.
pub fn barcode_height(n: u8) -> Result<Vec<u8>> {
    if n == 0 {
        return Err(DialectError::InvalidCapabilityValue {
            capability: "barcode height",
            value: n.to_string(),
        });
    }
    Ok(vec![GS, b'h', n])
}

/// # Set Barcode Module Width (GS w n)
///
/// `n` is the module width in dots, 2-6.
pub fn barcode_width(n: u8) -> Result<Vec<u8>> {
    if !(2..=6).contains(&n) {
        return Err(DialectError::InvalidCapabilityValue {
            capability: "barcode width",
            value: n.to_string(),
        });
    }
    Ok(vec![GS, b'w', n])
}

// ============================================================================
// QR CODE SETTINGS
// ============================================================================

/// QR code model and error-correction settings
///
/// Only the setting commands live here; symbol data and printing are left to
/// the caller.
pub mod qr {
    use serde::{Deserialize, Serialize};

    use super::GS;

    /// `GS ( k` store-settings prefix
    const QR_FUNCTION: [u8; 3] = [GS, b'(', b'k'];

    /// QR code model selection
    ///
    /// | Model | n | Notes |
    /// |-------|---|-------|
    /// | Model 1 | 1 | Original QR |
    /// | Model 2 | 2 | Enhanced, with alignment patterns |
    /// | Micro | 3 | Micro QR |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum QrModel {
        Model1 = 1,
        #[default]
        Model2 = 2,
        Micro = 3,
    }

    impl QrModel {
        pub const ALL: [Self; 3] = [Self::Model1, Self::Model2, Self::Micro];
    }

    /// QR code error correction level
    ///
    /// | Level | n | Recovery |
    /// |-------|---|----------|
    /// | L | 0 | ~7% |
    /// | M | 1 | ~15% |
    /// | Q | 2 | ~25% |
    /// | H | 3 | ~30% |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub enum QrErrorCorrection {
        L = 0,
        #[default]
        M = 1,
        Q = 2,
        H = 3,
    }

    impl QrErrorCorrection {
        pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];
    }

    /// # Select QR Model (GS ( k 04 00 31 41 n1 n2)
    ///
    /// `n1` is the ASCII digit of the model number (`'1'`-`'3'`), `n2` is 0.
    pub fn set_model(model: QrModel) -> Vec<u8> {
        let mut cmd = QR_FUNCTION.to_vec();
        cmd.extend([0x04, 0x00, 0x31, 0x41, b'0' + model as u8, 0x00]);
        cmd
    }

    /// # Select QR Error Correction (GS ( k 03 00 31 45 n)
    ///
    /// `n` is `'0'` + level.
    pub fn set_error_correction(level: QrErrorCorrection) -> Vec<u8> {
        let mut cmd = QR_FUNCTION.to_vec();
        cmd.extend([0x03, 0x00, 0x31, 0x45, b'0' + level as u8]);
        cmd
    }
}

// ============================================================================
// TESTS
// ============================================================================
