//! # Text Capabilities
//!
//! The closed key domain of every command table. A [`Capability`] pairs a
//! capability name with one of its legal values, so an out-of-domain lookup
//! cannot be expressed once a value has been converted into these types.
//!
//! | Capability | Values |
//! |------------|--------|
//! | bold | on, off |
//! | underline | 0, 1, 2 |
//! | size | normal, 2h, 2w, 2x |
//! | font | a, b |
//! | align | left, center, right |
//! | invert | on, off |
//! | color | black, red |
//! | flip | on, off |
//! | density | 0-8 |
//! | smooth | on, off |
//!
//! Raw caller values (strings from configuration, integers from JSON) enter
//! through `FromStr` / `TryFrom<u8>` and fail with
//! [`DialectError::InvalidCapabilityValue`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialectError;

fn invalid(capability: &'static str, value: impl fmt::Debug) -> DialectError {
    DialectError::InvalidCapabilityValue {
        capability,
        value: format!("{value:?}"),
    }
}

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];
}

impl FromStr for Alignment {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(invalid("align", s)),
        }
    }
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// Font A, the wide default font
    #[default]
    A = 0,
    /// Font B, the condensed font
    B = 1,
}

impl Font {
    pub const ALL: [Self; 2] = [Self::A, Self::B];
}

impl FromStr for Font {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "0" => Ok(Self::A),
            "b" | "1" => Ok(Self::B),
            _ => Err(invalid("font", s)),
        }
    }
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Underline {
    #[default]
    Off = 0,
    /// 1-dot underline
    Single = 1,
    /// 2-dot underline
    Double = 2,
}

impl Underline {
    pub const ALL: [Self; 3] = [Self::Off, Self::Single, Self::Double];
}

impl TryFrom<u8> for Underline {
    type Error = DialectError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Off),
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            _ => Err(invalid("underline", n)),
        }
    }
}

impl From<Underline> for u8 {
    fn from(u: Underline) -> Self {
        u as u8
    }
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Preset character sizes available as table entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizePreset {
    #[default]
    #[serde(rename = "normal")]
    Normal = 0,
    #[serde(rename = "2h")]
    DoubleHeight = 1,
    #[serde(rename = "2w")]
    DoubleWidth = 2,
    /// Double width and double height
    #[serde(rename = "2x")]
    Quad = 3,
}

impl SizePreset {
    pub const ALL: [Self; 4] = [
        Self::Normal,
        Self::DoubleHeight,
        Self::DoubleWidth,
        Self::Quad,
    ];

    /// Pick the preset matching a pair of double-width / double-height flags.
    pub fn from_flags(double_width: bool, double_height: bool) -> Self {
        match (double_width, double_height) {
            (true, true) => Self::Quad,
            (true, false) => Self::DoubleWidth,
            (false, true) => Self::DoubleHeight,
            (false, false) => Self::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::DoubleHeight => "2h",
            Self::DoubleWidth => "2w",
            Self::Quad => "2x",
        }
    }
}

impl FromStr for SizePreset {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "2h" => Ok(Self::DoubleHeight),
            "2w" => Ok(Self::DoubleWidth),
            "2x" => Ok(Self::Quad),
            _ => Err(invalid("size", s)),
        }
    }
}

// ============================================================================
// COLOR
// ============================================================================

/// Ink color for two-color printers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black = 0,
    /// Alternative color, usually red
    Red = 1,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::Black, Self::Red];
}

impl FromStr for Color {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            _ => Err(invalid("color", s)),
        }
    }
}

// ============================================================================
// PRINT DENSITY
// ============================================================================

/// Print density level, 0 (lightest, -50%) to 8
///
/// Levels 0-4 step from -50% to 0%; levels 5-8 step back down from +50% to
/// +12.5%. The mapping to wire bytes lives in each command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Density(u8);

impl Density {
    pub const MAX: u8 = 8;

    pub const ALL: [Self; 9] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    pub fn new(level: u8) -> Result<Self, DialectError> {
        Self::try_from(level)
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Density {
    type Error = DialectError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if level <= Self::MAX {
            Ok(Self(level))
        } else {
            Err(invalid("density", level))
        }
    }
}

impl From<Density> for u8 {
    fn from(d: Density) -> Self {
        d.0
    }
}

// ============================================================================
// CAPABILITY KEY
// ============================================================================

/// One `(capability, value)` key of a command table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Bold(bool),
    Underline(Underline),
    Size(SizePreset),
    Font(Font),
    Align(Alignment),
    Invert(bool),
    Color(Color),
    Flip(bool),
    Density(Density),
    Smooth(bool),
}

impl Capability {
    /// Number of keys in the full domain.
    pub const COUNT: usize = 31;

    /// Every key, in table order (`ALL[i].index() == i`).
    pub const ALL: [Self; Self::COUNT] = [
        Self::Bold(false),
        Self::Bold(true),
        Self::Underline(Underline::Off),
        Self::Underline(Underline::Single),
        Self::Underline(Underline::Double),
        Self::Size(SizePreset::Normal),
        Self::Size(SizePreset::DoubleHeight),
        Self::Size(SizePreset::DoubleWidth),
        Self::Size(SizePreset::Quad),
        Self::Font(Font::A),
        Self::Font(Font::B),
        Self::Align(Alignment::Left),
        Self::Align(Alignment::Center),
        Self::Align(Alignment::Right),
        Self::Invert(false),
        Self::Invert(true),
        Self::Color(Color::Black),
        Self::Color(Color::Red),
        Self::Flip(false),
        Self::Flip(true),
        Self::Density(Density::ALL[0]),
        Self::Density(Density::ALL[1]),
        Self::Density(Density::ALL[2]),
        Self::Density(Density::ALL[3]),
        Self::Density(Density::ALL[4]),
        Self::Density(Density::ALL[5]),
        Self::Density(Density::ALL[6]),
        Self::Density(Density::ALL[7]),
        Self::Density(Density::ALL[8]),
        Self::Smooth(false),
        Self::Smooth(true),
    ];

    /// Capability name without its value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold(_) => "bold",
            Self::Underline(_) => "underline",
            Self::Size(_) => "size",
            Self::Font(_) => "font",
            Self::Align(_) => "align",
            Self::Invert(_) => "invert",
            Self::Color(_) => "color",
            Self::Flip(_) => "flip",
            Self::Density(_) => "density",
            Self::Smooth(_) => "smooth",
        }
    }

    /// Dense position of this key in a command table.
    pub fn index(self) -> usize {
        match self {
            Self::Bold(on) => on as usize,
            Self::Underline(u) => 2 + u as usize,
            Self::Size(s) => 5 + s as usize,
            Self::Font(f) => 9 + f as usize,
            Self::Align(a) => 11 + a as usize,
            Self::Invert(on) => 14 + on as usize,
            Self::Color(c) => 16 + c as usize,
            Self::Flip(on) => 18 + on as usize,
            Self::Density(d) => 20 + d.level() as usize,
            Self::Smooth(on) => 29 + on as usize,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |on: bool| if on { "on" } else { "off" };
        match *self {
            Self::Bold(on) | Self::Invert(on) | Self::Flip(on) | Self::Smooth(on) => {
                write!(f, "{}={}", self.name(), on_off(on))
            }
            Self::Underline(u) => write!(f, "underline={}", u as u8),
            Self::Size(s) => write!(f, "size={}", s.as_str()),
            Self::Font(font) => write!(f, "font={}", if font == Font::A { "a" } else { "b" }),
            Self::Align(a) => write!(f, "align={}", format!("{a:?}").to_lowercase()),
            Self::Color(c) => write!(f, "color={}", format!("{c:?}").to_lowercase()),
            Self::Density(d) => write!(f, "density={}", d.level()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
