//! # Command Sets
//!
//! A [`CommandSet`] is the complete, immutable byte table of one protocol
//! dialect: every [`Capability`] and every scalar [`Command`] resolves to a
//! byte sequence (possibly empty, for features a printer family lacks).
//!
//! ## Construction
//!
//! Tables are assembled with a [`CommandSetBuilder`]. `build()` refuses to
//! produce a set with a missing key, so an incomplete dialect fails once at
//! construction instead of at some later encode call.
//!
//! A vendor dialect starts from [`CommandSet::derive`], which seeds a builder
//! with every entry of an existing set; only diverging entries are overridden.
//!
//! ```
//! use escpos_dialect::cmdset::{self, CommandSet};
//! use escpos_dialect::protocol::capability::Capability;
//!
//! let base = cmdset::escpos::command_set()?;
//! let quiet = base
//!     .derive("no-bold")
//!     .style(Capability::Bold(true), Vec::new())
//!     .build()?;
//!
//! assert!(quiet.resolve(Capability::Bold(true)).is_empty());
//! assert_eq!(quiet.resolve(Capability::Bold(false)), base.resolve(Capability::Bold(false)));
//! # Ok::<(), escpos_dialect::DialectError>(())
//! ```

pub mod escpos;
pub mod star;

use std::fmt;

use crate::error::{DialectError, Result};
use crate::protocol::capability::Capability;

// ============================================================================
// SCALAR COMMAND KEYS
// ============================================================================

/// Cash drawer connector pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerPin {
    Pin2 = 0,
    Pin5 = 1,
}

/// Paper cut mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutMode {
    Full = 0,
    Partial = 1,
}

/// Line spacing unit, as a fraction of an inch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSpacingUnit {
    /// n/60 inch
    Sixtieths = 0,
    /// n/180 inch
    OneEightieths = 1,
    /// n/360 inch
    ThreeSixtieths = 2,
}

impl LineSpacingUnit {
    /// Look up the unit for a divisor of 60, 180 or 360.
    pub fn from_divisor(divisor: u16) -> Result<Self> {
        match divisor {
            60 => Ok(Self::Sixtieths),
            180 => Ok(Self::OneEightieths),
            360 => Ok(Self::ThreeSixtieths),
            _ => Err(DialectError::InvalidCapabilityValue {
                capability: "line spacing divisor",
                value: divisor.to_string(),
            }),
        }
    }
}

/// Scalar (non-style) command table keys
///
/// Entries ending in `Prefix` are completed by a parameterized builder on
/// [`CommandSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Clear buffer and reset modes
    HwInit,
    HwSelect,
    /// Reset printer hardware
    HwReset,
    Beep,
    /// Normal text reset, emitted before preset sizes
    NormalText,
    /// Custom text size; empty when unsupported
    CustomSizePrefix,
    LineSpacingReset,
    LineSpacing(LineSpacingUnit),
    LineDisplayOpen,
    LineDisplayClear,
    LineDisplayClose,
    SheetSlipMode,
    SheetRollMode,
    Cut(CutMode),
    /// `true` enables all panel buttons
    PanelButtons(bool),
    CashDrawerPrefix,
    CodepagePrefix,
    PrintAndFeedPrefix,
}

impl Command {
    pub const COUNT: usize = 22;

    /// Every key, in table order (`ALL[i].index() == i`).
    pub const ALL: [Self; Self::COUNT] = [
        Self::HwInit,
        Self::HwSelect,
        Self::HwReset,
        Self::Beep,
        Self::NormalText,
        Self::CustomSizePrefix,
        Self::LineSpacingReset,
        Self::LineSpacing(LineSpacingUnit::Sixtieths),
        Self::LineSpacing(LineSpacingUnit::OneEightieths),
        Self::LineSpacing(LineSpacingUnit::ThreeSixtieths),
        Self::LineDisplayOpen,
        Self::LineDisplayClear,
        Self::LineDisplayClose,
        Self::SheetSlipMode,
        Self::SheetRollMode,
        Self::Cut(CutMode::Full),
        Self::Cut(CutMode::Partial),
        Self::PanelButtons(false),
        Self::PanelButtons(true),
        Self::CashDrawerPrefix,
        Self::CodepagePrefix,
        Self::PrintAndFeedPrefix,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::HwInit => 0,
            Self::HwSelect => 1,
            Self::HwReset => 2,
            Self::Beep => 3,
            Self::NormalText => 4,
            Self::CustomSizePrefix => 5,
            Self::LineSpacingReset => 6,
            Self::LineSpacing(unit) => 7 + unit as usize,
            Self::LineDisplayOpen => 10,
            Self::LineDisplayClear => 11,
            Self::LineDisplayClose => 12,
            Self::SheetSlipMode => 13,
            Self::SheetRollMode => 14,
            Self::Cut(mode) => 15 + mode as usize,
            Self::PanelButtons(enable) => 17 + enable as usize,
            Self::CashDrawerPrefix => 19,
            Self::CodepagePrefix => 20,
            Self::PrintAndFeedPrefix => 21,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ============================================================================
// COMMAND SET
// ============================================================================

/// Complete byte table for one dialect
///
/// Immutable after [`CommandSetBuilder::build`]; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSet {
    name: String,
    styles: Vec<Vec<u8>>,
    commands: Vec<Vec<u8>>,
}

impl CommandSet {
    /// Start an empty builder.
    pub fn builder(name: impl Into<String>) -> CommandSetBuilder {
        CommandSetBuilder::new(name)
    }

    /// Start a builder holding a copy of every entry in this set.
    pub fn derive(&self, name: impl Into<String>) -> CommandSetBuilder {
        CommandSetBuilder {
            name: name.into(),
            styles: self.styles.iter().cloned().map(Some).collect(),
            commands: self.commands.iter().cloned().map(Some).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bytes for a `(capability, value)` key.
    #[inline]
    pub fn resolve(&self, capability: Capability) -> &[u8] {
        &self.styles[capability.index()]
    }

    /// Bytes for a scalar command key.
    #[inline]
    pub fn command(&self, command: Command) -> &[u8] {
        &self.commands[command.index()]
    }

    /// Capabilities whose bytes differ between two sets.
    pub fn diverging_capabilities(&self, other: &CommandSet) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|&cap| self.resolve(cap) != other.resolve(cap))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Parameterized builders
    // ------------------------------------------------------------------------

    /// # Cash Drawer Pulse (ESC p m t1 t2)
    ///
    /// `on` and `off` are pulse timing units; the protocol accepts 0-255.
    pub fn cash_drawer(&self, pin: DrawerPin, on: u8, off: u8) -> Vec<u8> {
        let mut cmd = self.command(Command::CashDrawerPrefix).to_vec();
        cmd.extend([pin as u8, on, off]);
        cmd
    }

    /// Cash drawer pulse with the customary 50/50 timing
    #[inline]
    pub fn cash_drawer_kick(&self, pin: DrawerPin) -> Vec<u8> {
        self.cash_drawer(pin, 50, 50)
    }

    /// Fully caller-specified five-byte drawer sequence, for drawers that
    /// document their kick command as decimal values.
    pub fn cash_drawer_raw(esc: u8, p: u8, m: u8, t1: u8, t2: u8) -> Vec<u8> {
        vec![esc, p, m, t1, t2]
    }

    /// # Select Code Page
    ///
    /// Prefix plus page index. Only the selection is emitted; the character
    /// mapping is the caller's concern.
    pub fn codepage(&self, page: u8) -> Vec<u8> {
        let mut cmd = self.command(Command::CodepagePrefix).to_vec();
        cmd.push(page);
        cmd
    }

    pub fn supports_custom_size(&self) -> bool {
        !self.command(Command::CustomSizePrefix).is_empty()
    }

    /// # Custom Character Size
    ///
    /// One byte combining a width nibble `(width - 1) << 4` and a height
    /// nibble `height - 1`. Width and height must already be in 1..=8; this
    /// builder does not re-validate them, but debug builds assert it. Empty on
    /// dialects without the command.
    pub fn custom_size(&self, width: u8, height: u8) -> Vec<u8> {
        debug_assert!(
            (1..=8).contains(&width) && (1..=8).contains(&height),
            "custom size {width}x{height} outside 1..=8"
        );
        if !self.supports_custom_size() {
            tracing::trace!(dialect = %self.name, "custom size unsupported, emitting nothing");
            return Vec::new();
        }
        let w = width.saturating_sub(1) & 0x07;
        let h = height.saturating_sub(1) & 0x07;
        let mut cmd = self.command(Command::CustomSizePrefix).to_vec();
        cmd.push((w << 4) + h);
        cmd
    }

    /// # Set Line Spacing
    ///
    /// `n` units of 1/60, 1/180 or 1/360 inch depending on `unit`.
    pub fn line_spacing(&self, unit: LineSpacingUnit, n: u8) -> Vec<u8> {
        let mut cmd = self.command(Command::LineSpacing(unit)).to_vec();
        cmd.push(n);
        cmd
    }

    /// # Print and Feed n Lines
    pub fn print_and_feed(&self, lines: u8) -> Vec<u8> {
        let mut cmd = self.command(Command::PrintAndFeedPrefix).to_vec();
        cmd.push(lines);
        cmd
    }

    #[inline]
    pub fn cut(&self, mode: CutMode) -> Vec<u8> {
        self.command(Command::Cut(mode)).to_vec()
    }

    #[inline]
    pub fn panel_buttons(&self, enable: bool) -> Vec<u8> {
        self.command(Command::PanelButtons(enable)).to_vec()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects table entries sparsely; checks completeness on `build()`.
#[derive(Debug, Clone)]
pub struct CommandSetBuilder {
    name: String,
    styles: Vec<Option<Vec<u8>>>,
    commands: Vec<Option<Vec<u8>>>,
}

impl CommandSetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: vec![None; Capability::COUNT],
            commands: vec![None; Command::COUNT],
        }
    }

    /// Set the bytes for a style key. Pass empty bytes for "unsupported".
    pub fn style(mut self, capability: Capability, bytes: impl Into<Vec<u8>>) -> Self {
        self.styles[capability.index()] = Some(bytes.into());
        self
    }

    /// Set the bytes for a scalar command key.
    pub fn command(mut self, command: Command, bytes: impl Into<Vec<u8>>) -> Self {
        self.commands[command.index()] = Some(bytes.into());
        self
    }

    /// Declare a capability unsupported for every one of its values.
    pub fn unsupported(mut self, keys: &[Capability]) -> Self {
        for &cap in keys {
            self = self.style(cap, Vec::new());
        }
        self
    }

    /// Every key still without an entry, as display strings.
    pub fn missing_capabilities(&self) -> Vec<String> {
        let styles = Capability::ALL
            .into_iter()
            .filter(|cap| self.styles[cap.index()].is_none())
            .map(|cap| cap.to_string());
        let commands = Command::ALL
            .into_iter()
            .filter(|cmd| self.commands[cmd.index()].is_none())
            .map(|cmd| cmd.to_string());
        styles.chain(commands).collect()
    }

    /// Finish the table.
    ///
    /// ## Errors
    ///
    /// [`DialectError::IncompleteCommandSet`] naming the first missing key.
    pub fn build(self) -> Result<CommandSet> {
        let name = self.name;
        let incomplete = |key: String| DialectError::IncompleteCommandSet {
            dialect: name.clone(),
            capability: key,
        };

        let styles = self
            .styles
            .into_iter()
            .zip(Capability::ALL)
            .map(|(entry, cap)| entry.ok_or_else(|| incomplete(cap.to_string())))
            .collect::<Result<Vec<_>>>()?;
        let commands = self
            .commands
            .into_iter()
            .zip(Command::ALL)
            .map(|(entry, cmd)| entry.ok_or_else(|| incomplete(cmd.to_string())))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(dialect = %name, "command set built");
        Ok(CommandSet {
            name,
            styles,
            commands,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
