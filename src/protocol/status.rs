//! # Real-Time Status
//!
//! Commands that ask the printer for a status byte, and the masks a caller
//! ANDs against the byte it reads back from the transport.
//!
//! | Request | Bytes |
//! |---------|-------|
//! | Online status | DLE EOT 1 |
//! | Paper sensor status | DLE EOT 4 |
//!
//! Reading the byte and acting on it belongs to the caller.

use super::commands::{DLE, EOT};

/// Real-time status request prefix (DLE EOT)
pub const RT_STATUS: [u8; 2] = [DLE, EOT];

/// Printer online status mask
pub const RT_MASK_ONLINE: u8 = 8;
/// Paper present mask
pub const RT_MASK_PAPER: u8 = 18;
/// Paper near-end mask
pub const RT_MASK_LOWPAPER: u8 = 30;
/// Paper absent mask
pub const RT_MASK_NOPAPER: u8 = 114;

/// Which status byte to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRequest {
    /// Printer status (n = 1)
    Online = 1,
    /// Roll paper sensor status (n = 4)
    Paper = 4,
}

impl StatusRequest {
    /// # Transmit Real-Time Status (DLE EOT n)
    ///
    /// ```
    /// use escpos_dialect::protocol::status::StatusRequest;
    ///
    /// assert_eq!(StatusRequest::Paper.command(), [0x10, 0x04, 0x04]);
    /// ```
    pub fn command(self) -> [u8; 3] {
        [RT_STATUS[0], RT_STATUS[1], self as u8]
    }
}

/// Named status bit patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMask {
    Online,
    Paper,
    LowPaper,
    NoPaper,
}

impl StatusMask {
    pub const ALL: [Self; 4] = [Self::Online, Self::Paper, Self::LowPaper, Self::NoPaper];

    #[inline]
    pub fn mask(self) -> u8 {
        match self {
            Self::Online => RT_MASK_ONLINE,
            Self::Paper => RT_MASK_PAPER,
            Self::LowPaper => RT_MASK_LOWPAPER,
            Self::NoPaper => RT_MASK_NOPAPER,
        }
    }

    /// True when every bit of this mask is set in `status`.
    #[inline]
    pub fn matches(self, status: u8) -> bool {
        status & self.mask() == self.mask()
    }
}
