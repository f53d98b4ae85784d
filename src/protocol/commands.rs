//! # ESC/POS Control Bytes
//!
//! Raw control characters shared by every dialect. Command tables in
//! [`crate::cmdset`] are assembled from these.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`, `FF`, `HT`, `BEL`
//! - Two bytes: `ESC @`, `ESC E`, `ESC F`
//! - Multi-byte with parameters: `ESC p m t1 t2`, `GS k m data NUL`
//!
//! Labels follow the Epson TM-T20 quick reference.

// ============================================================================
// CONTROL CHARACTERS
// ============================================================================

/// NUL - Terminator for barcode data and filler parameter byte
pub const NUL: u8 = 0x00;

/// EOT (End of Transmission) - Second byte of real-time status requests
pub const EOT: u8 = 0x04;

/// ENQ (Enquiry)
pub const ENQ: u8 = 0x05;

/// BEL - Buzzer on most devices. The exact beep sequence varies by model.
pub const BEL: u8 = 0x07;

/// DLE (Data Link Escape) - Real-time command prefix
pub const DLE: u8 = 0x10;

/// DC4 (Device Control 4)
pub const DC4: u8 = 0x14;

/// CAN (Cancel)
pub const CAN: u8 = 0x18;

/// ESC (Escape) - Command prefix byte
///
/// Most commands begin with ESC (0x1B). This byte signals the start of a
/// control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - Kanji and NV graphics prefix
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - Extended command prefix
///
/// - Hex: 0x1D, Decimal: 29
/// - Star printers combine it as `ESC GS` for alignment and code pages
pub const GS: u8 = 0x1D;

/// RS (Record Separator) - Star configuration prefix (`ESC RS`)
pub const RS: u8 = 0x1E;

// ============================================================================
// FEED CONTROL
// ============================================================================

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = b'\n';

/// FF (Form Feed)
pub const FF: u8 = 0x0C;

/// CR (Carriage Return)
pub const CR: u8 = b'\r';

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = b'\t';

/// VT (Vertical Tab)
pub const VT: u8 = 0x0B;

/// # Set Horizontal Tab Positions (ESC D)
///
/// Prefix only. Tab stops follow as ascending column bytes terminated by NUL.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC D n1 ... nk NUL |
/// | Hex     | 1B 44 n1 ... nk 00 |
pub const SET_HT: [u8; 2] = [ESC, b'D'];

/// Build a full set-tab-positions command from column stops.
///
/// ## Example
///
/// ```
/// use escpos_dialect::protocol::commands::set_tabs;
///
/// assert_eq!(set_tabs(&[8, 16]), vec![0x1B, 0x44, 8, 16, 0x00]);
/// ```
pub fn set_tabs(columns: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(SET_HT.len() + columns.len() + 1);
    cmd.extend_from_slice(&SET_HT);
    cmd.extend_from_slice(columns);
    cmd.push(NUL);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
