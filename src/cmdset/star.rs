//! # Star Micronics Dialect
//!
//! Star printers in Star Line mode speak an ESC/POS-like protocol with
//! different opcodes for most text styling. This table is derived from the
//! baseline and overrides only the diverging entries.
//!
//! | Style | Baseline | Star |
//! |-------|----------|------|
//! | Bold | ESC E n | ESC E / ESC F |
//! | Size | ESC ! n | ESC i h w |
//! | Font | ESC M n | ESC RS F n |
//! | Align | ESC a n | ESC GS a n |
//! | Invert | GS B n | ESC 4 / ESC 5 |
//! | Density | GS \| n | ESC RS d n |
//! | Cut | GS V n | ESC d 2 / ESC d 3 |
//! | Print and feed | ESC d n | ESC a n |
//! | Code page | ESC t n | ESC GS t n |
//!
//! Flip, smoothing and custom sizes have no Star Line equivalent; their
//! entries are declared empty. The normal-text reset is empty too, since
//! `ESC i` sets both dimensions absolutely. Underline has no 2-dot mode and
//! falls back to 1-dot. Color and the hardware commands are inherited.

use super::{Command, CommandSet, CutMode};
use crate::error::Result;
use crate::protocol::capability::{Alignment, Capability, Density, Font, SizePreset, Underline};
use crate::protocol::commands::{ESC, GS, RS};

pub const NAME: &str = "star";

/// `ESC RS d` parameter per density level 0-8
const DENSITY_PARAM: [u8; 9] = [0x06, 0x05, 0x04, 0x03, 0x03, 0x03, 0x02, 0x01, 0x00];

/// Derive the Star table from `base`.
pub fn command_set(base: &CommandSet) -> Result<CommandSet> {
    let mut builder = base
        .derive(NAME)
        .style(Capability::Bold(false), [ESC, b'F'])
        .style(Capability::Bold(true), [ESC, b'E'])
        .style(Capability::Underline(Underline::Double), [ESC, b'-', 0x01])
        .style(Capability::Size(SizePreset::Normal), [ESC, b'i', 0x00, 0x00])
        .style(Capability::Size(SizePreset::DoubleHeight), [ESC, b'i', 0x01, 0x00])
        .style(Capability::Size(SizePreset::DoubleWidth), [ESC, b'i', 0x00, 0x01])
        .style(Capability::Size(SizePreset::Quad), [ESC, b'i', 0x01, 0x01])
        .style(Capability::Invert(true), [ESC, b'4'])
        .style(Capability::Invert(false), [ESC, b'5'])
        .unsupported(&[
            Capability::Flip(false),
            Capability::Flip(true),
            Capability::Smooth(false),
            Capability::Smooth(true),
        ]);

    for f in Font::ALL {
        builder = builder.style(Capability::Font(f), [ESC, RS, b'F', f as u8]);
    }
    for a in Alignment::ALL {
        builder = builder.style(Capability::Align(a), [ESC, GS, b'a', a as u8]);
    }
    for d in Density::ALL {
        let n = DENSITY_PARAM[d.level() as usize];
        builder = builder.style(Capability::Density(d), [ESC, RS, b'd', n]);
    }

    builder
        .command(Command::NormalText, Vec::new())
        .command(Command::CustomSizePrefix, Vec::new())
        .command(Command::Cut(CutMode::Full), [ESC, b'd', 0x02])
        .command(Command::Cut(CutMode::Partial), [ESC, b'd', 0x03])
        .command(Command::PrintAndFeedPrefix, [ESC, b'a'])
        .command(Command::CodepagePrefix, [ESC, GS, b't'])
        .build()
}

// ============================================================================
// TESTS
// ============================================================================
