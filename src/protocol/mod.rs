//! # ESC/POS Protocol Building Blocks
//!
//! Dialect-independent pieces of the protocol: raw control bytes, the
//! capability vocabulary, barcode symbology rules and status masks.
//! Dialect-specific byte tables live in [`crate::cmdset`].
//!
//! ## Module Structure
//!
//! - [`commands`]: Control characters and feed control
//! - [`capability`]: Capability keys and their value domains
//! - [`barcode`]: Symbology registry, type tables A/B, HRI settings
//! - [`status`]: Real-time status requests and masks

pub mod barcode;
pub mod capability;
pub mod commands;
pub mod status;
