//! # Baseline ESC/POS Table
//!
//! Generic Epson-style command bytes. Every other dialect derives from this
//! table and overrides only what its hardware does differently.
//!
//! ## Text Styling
//!
//! | Style | Command |
//! |-------|---------|
//! | Bold | ESC E n |
//! | Underline | ESC - n |
//! | Size | ESC ! n (after a normal-text reset) |
//! | Custom size | GS ! n |
//! | Font | ESC M n |
//! | Align | ESC a n |
//! | Invert | GS B n |
//! | Color | ESC r n |
//! | Flip (upside down) | ESC { n |
//! | Density | GS \| n |
//! | Smoothing | GS b n |
//!
//! ## Density Levels
//!
//! The parameter byte is not monotonic: levels 5-8 map to n = 8, 7, 6, 5
//! (+50% down to +12.5%).

use super::{Command, CommandSet, CutMode, LineSpacingUnit};
use crate::error::Result;
use crate::protocol::capability::{
    Alignment, Capability, Color, Density, Font, SizePreset, Underline,
};
use crate::protocol::commands::{BEL, ESC, GS, LF, NUL};

pub const NAME: &str = "escpos";

/// `ESC ! 0`, the normal-text reset
const TXT_NORMAL: [u8; 3] = [ESC, b'!', 0x00];

/// `GS |` parameter per density level 0-8
const DENSITY_PARAM: [u8; 9] = [0x00, 0x01, 0x02, 0x03, 0x04, 0x08, 0x07, 0x06, 0x05];

fn size_entry(n: u8) -> Vec<u8> {
    let mut cmd = TXT_NORMAL.to_vec();
    cmd.extend([ESC, b'!', n]);
    cmd
}

/// Build the baseline table.
pub fn command_set() -> Result<CommandSet> {
    let mut builder = CommandSet::builder(NAME)
        .style(Capability::Bold(false), [ESC, b'E', 0x00])
        .style(Capability::Bold(true), [ESC, b'E', 0x01])
        .style(Capability::Size(SizePreset::Normal), size_entry(0x00))
        .style(Capability::Size(SizePreset::DoubleHeight), size_entry(0x10))
        .style(Capability::Size(SizePreset::DoubleWidth), size_entry(0x20))
        .style(Capability::Size(SizePreset::Quad), size_entry(0x30))
        .style(Capability::Invert(false), [GS, b'B', 0x00])
        .style(Capability::Invert(true), [GS, b'B', 0x01])
        .style(Capability::Flip(false), [ESC, b'{', 0x00])
        .style(Capability::Flip(true), [ESC, b'{', 0x01])
        .style(Capability::Smooth(false), [GS, b'b', 0x00])
        .style(Capability::Smooth(true), [GS, b'b', 0x01]);

    for u in Underline::ALL {
        builder = builder.style(Capability::Underline(u), [ESC, b'-', u as u8]);
    }
    for f in Font::ALL {
        builder = builder.style(Capability::Font(f), [ESC, b'M', f as u8]);
    }
    for a in Alignment::ALL {
        builder = builder.style(Capability::Align(a), [ESC, b'a', a as u8]);
    }
    for c in Color::ALL {
        builder = builder.style(Capability::Color(c), [ESC, b'r', c as u8]);
    }
    for d in Density::ALL {
        let n = DENSITY_PARAM[d.level() as usize];
        builder = builder.style(Capability::Density(d), [GS, b'|', n]);
    }

    builder
        .command(Command::HwInit, [ESC, b'@'])
        .command(Command::HwSelect, [ESC, b'=', 0x01])
        .command(Command::HwReset, [ESC, b'?', LF, NUL])
        .command(Command::Beep, [BEL])
        .command(Command::NormalText, TXT_NORMAL)
        .command(Command::CustomSizePrefix, [GS, b'!'])
        .command(Command::LineSpacingReset, [ESC, b'2'])
        .command(Command::LineSpacing(LineSpacingUnit::Sixtieths), [ESC, b'A'])
        .command(Command::LineSpacing(LineSpacingUnit::OneEightieths), [ESC, b'3'])
        .command(Command::LineSpacing(LineSpacingUnit::ThreeSixtieths), [ESC, b'+'])
        .command(Command::LineDisplayOpen, [ESC, b'=', 0x02])
        .command(Command::LineDisplayClear, [ESC, b'@'])
        .command(Command::LineDisplayClose, [ESC, b'=', 0x01])
        .command(Command::SheetSlipMode, [ESC, b'c', b'0', 0x04])
        .command(Command::SheetRollMode, [ESC, b'c', b'0', 0x01])
        .command(Command::Cut(CutMode::Full), [GS, b'V', 0x00])
        .command(Command::Cut(CutMode::Partial), [GS, b'V', 0x01])
        .command(Command::PanelButtons(true), [ESC, b'c', b'5', 0x00])
        .command(Command::PanelButtons(false), [ESC, b'c', b'5', 0x01])
        .command(Command::CashDrawerPrefix, [ESC, b'p'])
        .command(Command::CodepagePrefix, [ESC, b't'])
        .command(Command::PrintAndFeedPrefix, [ESC, b'd'])
        .build()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmdset::DrawerPin;
    use pretty_assertions::assert_eq;

    fn set() -> CommandSet {
        command_set().unwrap()
    }

    #[test]
    fn test_builds_complete() {
        assert_eq!(set().name(), "escpos");
    }

    #[test]
    fn test_bold() {
        let s = set();
        assert_eq!(s.resolve(Capability::Bold(true)), [0x1B, 0x45, 0x01]);
        assert_eq!(s.resolve(Capability::Bold(false)), [0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_size_presets_carry_normal_reset() {
        let s = set();
        assert_eq!(
            s.resolve(Capability::Size(SizePreset::Normal)),
            [0x1B, 0x21, 0x00, 0x1B, 0x21, 0x00]
        );
        assert_eq!(
            s.resolve(Capability::Size(SizePreset::DoubleHeight)),
            [0x1B, 0x21, 0x00, 0x1B, 0x21, 0x10]
        );
        assert_eq!(
            s.resolve(Capability::Size(SizePreset::DoubleWidth)),
            [0x1B, 0x21, 0x00, 0x1B, 0x21, 0x20]
        );
        assert_eq!(
            s.resolve(Capability::Size(SizePreset::Quad)),
            [0x1B, 0x21, 0x00, 0x1B, 0x21, 0x30]
        );
    }

    #[test]
    fn test_font_align_underline() {
        let s = set();
        assert_eq!(s.resolve(Capability::Font(Font::B)), [0x1B, 0x4D, 0x01]);
        assert_eq!(s.resolve(Capability::Align(Alignment::Center)), [0x1B, 0x61, 0x01]);
        assert_eq!(s.resolve(Capability::Underline(Underline::Double)), [0x1B, 0x2D, 0x02]);
    }

    #[test]
    fn test_density_mapping() {
        let s = set();
        let params: Vec<u8> = Density::ALL
            .into_iter()
            .map(|d| s.resolve(Capability::Density(d))[2])
            .collect();
        assert_eq!(params, vec![0, 1, 2, 3, 4, 8, 7, 6, 5]);
    }

    #[test]
    fn test_hardware() {
        let s = set();
        assert_eq!(s.command(Command::HwInit), [0x1B, 0x40]);
        assert_eq!(s.command(Command::HwSelect), [0x1B, 0x3D, 0x01]);
        assert_eq!(s.command(Command::HwReset), [0x1B, 0x3F, 0x0A, 0x00]);
        assert_eq!(s.command(Command::Beep), [0x07]);
    }

    #[test]
    fn test_line_display_and_sheet_modes() {
        let s = set();
        assert_eq!(s.command(Command::LineSpacingReset), [0x1B, 0x32]);
        assert_eq!(s.command(Command::LineDisplayOpen), [0x1B, 0x3D, 0x02]);
        assert_eq!(s.command(Command::LineDisplayClear), [0x1B, 0x40]);
        assert_eq!(s.command(Command::LineDisplayClose), [0x1B, 0x3D, 0x01]);
        assert_eq!(s.command(Command::SheetSlipMode), [0x1B, 0x63, 0x30, 0x04]);
        assert_eq!(s.command(Command::SheetRollMode), [0x1B, 0x63, 0x30, 0x01]);
    }

    #[test]
    fn test_cash_drawer() {
        let s = set();
        assert_eq!(s.cash_drawer_kick(DrawerPin::Pin2), vec![0x1B, 0x70, 0x00, 50, 50]);
        assert_eq!(s.cash_drawer_kick(DrawerPin::Pin5), vec![0x1B, 0x70, 0x01, 50, 50]);
        assert_eq!(s.cash_drawer(DrawerPin::Pin2, 0, 255), vec![0x1B, 0x70, 0x00, 0, 255]);
    }

    #[test]
    fn test_cut_and_panel() {
        let s = set();
        assert_eq!(s.cut(CutMode::Full), vec![0x1D, 0x56, 0x00]);
        assert_eq!(s.cut(CutMode::Partial), vec![0x1D, 0x56, 0x01]);
        assert_eq!(s.panel_buttons(true), vec![0x1B, 0x63, 0x35, 0x00]);
        assert_eq!(s.panel_buttons(false), vec![0x1B, 0x63, 0x35, 0x01]);
    }

    #[test]
    fn test_parameterized() {
        let s = set();
        assert_eq!(s.codepage(16), vec![0x1B, 0x74, 16]);
        assert_eq!(s.print_and_feed(3), vec![0x1B, 0x64, 3]);
        assert_eq!(
            s.line_spacing(LineSpacingUnit::Sixtieths, 30),
            vec![0x1B, 0x41, 30]
        );
        assert_eq!(
            s.line_spacing(LineSpacingUnit::OneEightieths, 255),
            vec![0x1B, 0x33, 255]
        );
        assert_eq!(
            s.line_spacing(LineSpacingUnit::ThreeSixtieths, 0),
            vec![0x1B, 0x2B, 0]
        );
    }

    #[test]
    fn test_custom_size_byte() {
        let s = set();
        assert!(s.supports_custom_size());
        assert_eq!(s.custom_size(1, 1), vec![0x1D, 0x21, 0x00]);
        assert_eq!(s.custom_size(8, 7), vec![0x1D, 0x21, 0x76]);
        assert_eq!(s.custom_size(2, 8), vec![0x1D, 0x21, 0x17]);
    }
}
