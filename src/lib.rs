//! # escpos-dialect - Receipt Printer Command Dialects
//!
//! Byte-level command tables for ESC/POS-family receipt printers and a style
//! encoder that turns text-style requests into command bytes. It provides:
//!
//! - **Command sets**: complete, immutable byte tables per dialect
//! - **Dialects**: baseline ESC/POS and a Star Micronics override
//! - **Style encoding**: delta and full modes with a fixed emission order
//! - **Barcodes**: symbology registry, type tables and payload validation
//!
//! No I/O happens here; callers write the returned bytes to their transport.
//!
//! ## Quick Start
//!
//! ```
//! use escpos_dialect::{Dialect, EncodeMode, StyleRequest};
//! use escpos_dialect::cmdset::CutMode;
//! use escpos_dialect::protocol::capability::SizePreset;
//!
//! let set = Dialect::parse("generic")?.command_set();
//!
//! let mut data = Vec::new();
//! data.extend_from_slice(set.command(escpos_dialect::cmdset::Command::HwInit));
//! data.extend(
//!     StyleRequest::new()
//!         .size(SizePreset::DoubleHeight)
//!         .bold(true)
//!         .encode(EncodeMode::Delta, set)?,
//! );
//! data.extend_from_slice(b"TOTAL 12.00\n");
//! data.extend(set.cut(CutMode::Partial));
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! # Ok::<(), escpos_dialect::DialectError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Control bytes, capability keys, barcodes, status masks |
//! | [`cmdset`] | Command set tables and their builder |
//! | [`dialect`] | Dialect selection and shared command sets |
//! | [`style`] | Style requests and the encoder |
//! | [`error`] | Error types |

pub mod cmdset;
pub mod dialect;
pub mod error;
pub mod protocol;
pub mod style;

// Re-exports for convenience
pub use cmdset::CommandSet;
pub use dialect::Dialect;
pub use error::DialectError;
pub use style::{EncodeMode, StyleRequest, StyleState};
