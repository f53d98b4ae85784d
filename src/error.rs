//! # Error Types
//!
//! This module defines error types used throughout the escpos-dialect library.
//!
//! Every validation happens before a single command byte is produced, so an
//! `Err` never comes with partial output attached.

use thiserror::Error;

/// Main error type for command-set and encoder operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialectError {
    /// A raw value outside a capability's declared domain
    #[error("Invalid value {value:?} for capability '{capability}'")]
    InvalidCapabilityValue {
        capability: &'static str,
        value: String,
    },

    /// Custom text size with width or height outside 1..=8
    #[error("Custom text size out of range: width={width}, height={height} (both must be 1-8)")]
    CustomSizeOutOfRange { width: i64, height: i64 },

    /// Barcode payload length outside every declared range
    #[error("Barcode length error: {symbology} does not accept {length} characters")]
    BarcodeLength {
        symbology: &'static str,
        length: usize,
    },

    /// Barcode payload rejected by the symbology's character-set pattern
    #[error("Barcode pattern error: payload does not match {symbology} format")]
    BarcodePattern { symbology: &'static str },

    /// Symbology name not in the registry
    #[error("Unknown barcode symbology: {0}")]
    UnknownSymbology(String),

    /// Symbology exists but is not addressable through the selected table
    #[error("Symbology {symbology} is not supported by barcode table {table}")]
    UnsupportedSymbology {
        table: &'static str,
        symbology: &'static str,
    },

    /// A command set was built without an entry for some capability
    #[error("Command set '{dialect}' has no entry for {capability}")]
    IncompleteCommandSet { dialect: String, capability: String },

    /// Dialect name not recognised by the profile parser
    #[error("Unknown dialect '{0}'. Use 'escpos' or 'star'")]
    UnknownDialect(String),

    /// Malformed JSON style request
    #[error("Style request parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DialectError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, DialectError>;
