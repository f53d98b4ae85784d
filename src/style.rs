//! # Style Encoder
//!
//! Turns a [`StyleRequest`] into the command bytes of a [`CommandSet`].
//!
//! ## Emission Order
//!
//! Both modes emit in this fixed order, one command per capability:
//!
//! ```text
//! size → flip → smooth → bold → underline → font → align → [density] → invert
//! ```
//!
//! Color is not part of the sequence; see [`encode_color`].
//!
//! ## Modes
//!
//! | Mode | Unset fields | Density unset |
//! |------|--------------|---------------|
//! | [`EncodeMode::Delta`] | skipped | skipped |
//! | [`EncodeMode::Full`] | replaced by defaults | skipped |
//!
//! A preset size is emitted as the dialect's normal-text reset followed by the
//! size entry. A custom size is emitted as the custom-size command alone.
//!
//! ## Example
//!
//! ```
//! use escpos_dialect::Dialect;
//! use escpos_dialect::protocol::capability::Alignment;
//! use escpos_dialect::style::{EncodeMode, StyleRequest};
//!
//! let set = Dialect::EscPos.command_set();
//! let bytes = StyleRequest::new()
//!     .bold(true)
//!     .align(Alignment::Center)
//!     .encode(EncodeMode::Delta, set)?;
//!
//! assert_eq!(bytes, vec![0x1B, 0x45, 0x01, 0x1B, 0x61, 0x01]);
//! # Ok::<(), escpos_dialect::DialectError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::cmdset::{Command, CommandSet};
use crate::error::{DialectError, Result};
use crate::protocol::capability::{
    Alignment, Capability, Color, Density, Font, SizePreset, Underline,
};

// ============================================================================
// REQUEST
// ============================================================================

/// Requested character size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeRequest {
    /// One of the table presets
    Preset(SizePreset),
    /// Arbitrary multipliers; both must be 1-8. Missing JSON fields read as 0.
    Custom {
        #[serde(default)]
        width: i64,
        #[serde(default)]
        height: i64,
    },
}

impl SizeRequest {
    /// Preset for a pair of double-width / double-height flags.
    pub fn from_flags(double_width: bool, double_height: bool) -> Self {
        Self::Preset(SizePreset::from_flags(double_width, double_height))
    }
}

impl Default for SizeRequest {
    fn default() -> Self {
        Self::Preset(SizePreset::Normal)
    }
}

/// One style change request. `None` means "no change requested".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleRequest {
    pub size: Option<SizeRequest>,
    pub flip: Option<bool>,
    pub smooth: Option<bool>,
    pub bold: Option<bool>,
    pub underline: Option<Underline>,
    pub font: Option<Font>,
    pub align: Option<Alignment>,
    pub density: Option<Density>,
    pub invert: Option<bool>,
    /// Carried for the caller; emitted only through [`encode_color`].
    pub color: Option<Color>,
}

impl StyleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON style request such as `{"bold": true, "size": "2h"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn size(mut self, preset: SizePreset) -> Self {
        self.size = Some(SizeRequest::Preset(preset));
        self
    }

    pub fn custom_size(mut self, width: i64, height: i64) -> Self {
        self.size = Some(SizeRequest::Custom { width, height });
        self
    }

    pub fn flip(mut self, enabled: bool) -> Self {
        self.flip = Some(enabled);
        self
    }

    pub fn smooth(mut self, enabled: bool) -> Self {
        self.smooth = Some(enabled);
        self
    }

    pub fn bold(mut self, enabled: bool) -> Self {
        self.bold = Some(enabled);
        self
    }

    pub fn underline(mut self, u: Underline) -> Self {
        self.underline = Some(u);
        self
    }

    pub fn font(mut self, f: Font) -> Self {
        self.font = Some(f);
        self
    }

    pub fn align(mut self, a: Alignment) -> Self {
        self.align = Some(a);
        self
    }

    pub fn density(mut self, d: Density) -> Self {
        self.density = Some(d);
        self
    }

    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = Some(enabled);
        self
    }

    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fill every unset field except density (and color) with its default.
    pub fn with_defaults(&self) -> Self {
        Self {
            size: Some(self.size.unwrap_or_default()),
            flip: Some(self.flip.unwrap_or(false)),
            smooth: Some(self.smooth.unwrap_or(false)),
            bold: Some(self.bold.unwrap_or(false)),
            underline: Some(self.underline.unwrap_or_default()),
            font: Some(self.font.unwrap_or_default()),
            align: Some(self.align.unwrap_or_default()),
            density: self.density,
            invert: Some(self.invert.unwrap_or(false)),
            color: self.color,
        }
    }

    /// Drop every field that `state` already has.
    pub fn changes_from(&self, state: &StyleState) -> Self {
        fn keep<T: PartialEq>(requested: Option<T>, current: T) -> Option<T> {
            requested.filter(|v| *v != current)
        }
        Self {
            size: keep(self.size, state.size),
            flip: keep(self.flip, state.flip),
            smooth: keep(self.smooth, state.smooth),
            bold: keep(self.bold, state.bold),
            underline: keep(self.underline, state.underline),
            font: keep(self.font, state.font),
            align: keep(self.align, state.align),
            density: self.density.filter(|d| state.density != Some(*d)),
            invert: keep(self.invert, state.invert),
            color: keep(self.color, state.color),
        }
    }

    /// Encode with the given mode; see [`encode`].
    pub fn encode(&self, mode: EncodeMode, set: &CommandSet) -> Result<Vec<u8>> {
        encode(self, mode, set)
    }
}

// ============================================================================
// ENCODER
// ============================================================================

/// Whether unset fields are skipped or reset to defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    /// Emit only the fields that are set
    #[default]
    Delta,
    /// Reset to normal text and emit every capability
    Full,
}

impl From<bool> for EncodeMode {
    /// `true` requests a baseline reset (full mode).
    fn from(baseline_reset: bool) -> Self {
        if baseline_reset { Self::Full } else { Self::Delta }
    }
}

/// Check custom size multipliers, returning them as bytes.
///
/// ## Errors
///
/// [`DialectError::CustomSizeOutOfRange`] unless both are in 1..=8.
pub fn check_custom_size(width: i64, height: i64) -> Result<(u8, u8)> {
    match (u8::try_from(width), u8::try_from(height)) {
        (Ok(w @ 1..=8), Ok(h @ 1..=8)) => Ok((w, h)),
        _ => {
            tracing::debug!(width, height, "custom size rejected");
            Err(DialectError::CustomSizeOutOfRange { width, height })
        }
    }
}

/// # Encode a Style Request
///
/// Validates first, then emits commands in the fixed order. On error no bytes
/// are produced.
///
/// ## Errors
///
/// [`DialectError::CustomSizeOutOfRange`] for a custom size outside 1..=8.
pub fn encode(request: &StyleRequest, mode: EncodeMode, set: &CommandSet) -> Result<Vec<u8>> {
    let custom = match request.size {
        Some(SizeRequest::Custom { width, height }) => Some(check_custom_size(width, height)?),
        _ => None,
    };

    let request = match mode {
        EncodeMode::Delta => request.clone(),
        EncodeMode::Full => request.with_defaults(),
    };

    let mut out = Vec::new();
    match (request.size, custom) {
        (Some(SizeRequest::Custom { .. }), Some((w, h))) => {
            out.extend(set.custom_size(w, h));
        }
        (Some(SizeRequest::Preset(preset)), _) => {
            out.extend_from_slice(set.command(Command::NormalText));
            out.extend_from_slice(set.resolve(Capability::Size(preset)));
        }
        _ => {}
    }

    let ordered = [
        request.flip.map(Capability::Flip),
        request.smooth.map(Capability::Smooth),
        request.bold.map(Capability::Bold),
        request.underline.map(Capability::Underline),
        request.font.map(Capability::Font),
        request.align.map(Capability::Align),
        request.density.map(Capability::Density),
        request.invert.map(Capability::Invert),
    ];
    for cap in ordered.into_iter().flatten() {
        let bytes = set.resolve(cap);
        if bytes.is_empty() {
            tracing::trace!(dialect = set.name(), %cap, "unsupported, emitting nothing");
        }
        out.extend_from_slice(bytes);
    }

    tracing::trace!(dialect = set.name(), ?mode, len = out.len(), "style encoded");
    Ok(out)
}

/// # Encode a Color Change
///
/// Independent single-capability path; never part of [`encode`].
pub fn encode_color(color: Color, set: &CommandSet) -> Vec<u8> {
    set.resolve(Capability::Color(color)).to_vec()
}

// ============================================================================
// STYLE STATE
// ============================================================================

/// The style a caller believes the printer is in
///
/// Owned by the caller and passed in explicitly; the encoder keeps no state
/// between calls. `density: None` means it was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub size: SizeRequest,
    pub flip: bool,
    pub smooth: bool,
    pub bold: bool,
    pub underline: Underline,
    pub font: Font,
    pub align: Alignment,
    pub density: Option<Density>,
    pub invert: bool,
    pub color: Color,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            size: SizeRequest::default(),
            flip: false,
            smooth: false,
            bold: false,
            underline: Underline::Off,
            font: Font::A,
            align: Alignment::Left,
            density: None,
            invert: false,
            color: Color::Black,
        }
    }
}

impl StyleState {
    /// The snapshot after `request` has been applied.
    pub fn apply(&self, request: &StyleRequest) -> Result<Self> {
        if let Some(SizeRequest::Custom { width, height }) = request.size {
            check_custom_size(width, height)?;
        }
        Ok(Self {
            size: request.size.unwrap_or(self.size),
            flip: request.flip.unwrap_or(self.flip),
            smooth: request.smooth.unwrap_or(self.smooth),
            bold: request.bold.unwrap_or(self.bold),
            underline: request.underline.unwrap_or(self.underline),
            font: request.font.unwrap_or(self.font),
            align: request.align.unwrap_or(self.align),
            density: request.density.or(self.density),
            invert: request.invert.unwrap_or(self.invert),
            color: request.color.unwrap_or(self.color),
        })
    }

    /// Minimal bytes to move from this snapshot to `target`, plus the new
    /// snapshot.
    ///
    /// Fields already in effect are skipped. When a preset size is emitted on
    /// a dialect whose normal-text reset is not empty, that reset also clears
    /// bold, underline and font, so any of those that should stay on are
    /// emitted again. A color change, if any, follows the style bytes.
    pub fn transition(&self, target: &StyleRequest, set: &CommandSet) -> Result<(Vec<u8>, Self)> {
        let next = self.apply(target)?;
        let mut delta = target.changes_from(self);

        let resets_text = !set.command(Command::NormalText).is_empty();
        if resets_text && matches!(delta.size, Some(SizeRequest::Preset(_))) {
            if next.bold {
                delta.bold.get_or_insert(true);
            }
            if next.underline != Underline::Off {
                delta.underline.get_or_insert(next.underline);
            }
            if next.font != Font::A {
                delta.font.get_or_insert(next.font);
            }
        }

        let mut bytes = encode(&delta, EncodeMode::Delta, set)?;
        if let Some(color) = delta.color {
            bytes.extend(encode_color(color, set));
        }
        Ok((bytes, next))
    }
}

impl From<StyleState> for StyleRequest {
    fn from(state: StyleState) -> Self {
        Self {
            size: Some(state.size),
            flip: Some(state.flip),
            smooth: Some(state.smooth),
            bold: Some(state.bold),
            underline: Some(state.underline),
            font: Some(state.font),
            align: Some(state.align),
            density: state.density,
            invert: Some(state.invert),
            color: Some(state.color),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dialect;
    use pretty_assertions::assert_eq;

    fn escpos() -> &'static CommandSet {
        Dialect::EscPos.command_set()
    }

    fn star() -> &'static CommandSet {
        Dialect::Star.command_set()
    }

    /// Full-mode bytes with `changes` substituted into the default sequence.
    fn expected_full(set: &CommandSet, changes: &[Capability]) -> Vec<u8> {
        let mut caps = vec![
            Capability::Flip(false),
            Capability::Smooth(false),
            Capability::Bold(false),
            Capability::Underline(Underline::Off),
            Capability::Font(Font::A),
            Capability::Align(Alignment::Left),
            Capability::Invert(false),
        ];
        let mut size = SizePreset::Normal;
        for &change in changes {
            match change {
                Capability::Size(preset) => size = preset,
                Capability::Density(_) => caps.insert(caps.len() - 1, change),
                _ => {
                    if let Some(slot) = caps.iter_mut().find(|k| k.name() == change.name()) {
                        *slot = change;
                    }
                }
            }
        }
        let mut out = set.command(Command::NormalText).to_vec();
        out.extend_from_slice(set.resolve(Capability::Size(size)));
        for cap in caps {
            out.extend_from_slice(set.resolve(cap));
        }
        out
    }

    fn full(request: StyleRequest, set: &CommandSet) -> Vec<u8> {
        request.encode(EncodeMode::Full, set).unwrap()
    }

    fn delta(request: StyleRequest, set: &CommandSet) -> Vec<u8> {
        request.encode(EncodeMode::Delta, set).unwrap()
    }

    #[test]
    fn test_delta_empty_request_emits_nothing() {
        for dialect in Dialect::ALL {
            assert_eq!(delta(StyleRequest::new(), dialect.command_set()), Vec::<u8>::new());
        }
        assert!(StyleRequest::new().is_empty());
    }

    #[test]
    fn test_full_defaults_exact_bytes() {
        let expected = [
            &[0x1B, 0x21, 0x00][..],             // normal text reset
            &[0x1B, 0x21, 0x00, 0x1B, 0x21, 0x00], // size normal
            &[0x1B, 0x7B, 0x00],                 // flip off
            &[0x1D, 0x62, 0x00],                 // smooth off
            &[0x1B, 0x45, 0x00],                 // bold off
            &[0x1B, 0x2D, 0x00],                 // underline off
            &[0x1B, 0x4D, 0x00],                 // font a
            &[0x1B, 0x61, 0x00],                 // align left
            &[0x1D, 0x42, 0x00],                 // invert off
        ]
        .concat();
        assert_eq!(full(StyleRequest::new(), escpos()), expected);
        assert_eq!(full(StyleRequest::new(), escpos()), expected_full(escpos(), &[]));
    }

    #[test]
    fn test_full_defaults_have_no_density() {
        for dialect in Dialect::ALL {
            let set = dialect.command_set();
            let bytes = full(StyleRequest::new(), set);
            assert_eq!(bytes, expected_full(set, &[]));
        }
    }

    #[test]
    fn test_size_presets() {
        for preset in SizePreset::ALL {
            let set = escpos();
            assert_eq!(
                full(StyleRequest::new().size(preset), set),
                expected_full(set, &[Capability::Size(preset)])
            );
            let expected_delta = [
                set.command(Command::NormalText),
                set.resolve(Capability::Size(preset)),
            ]
            .concat();
            assert_eq!(delta(StyleRequest::new().size(preset), set), expected_delta);
        }
    }

    #[test]
    fn test_size_from_flags() {
        let request = StyleRequest {
            size: Some(SizeRequest::from_flags(true, true)),
            ..Default::default()
        };
        assert_eq!(
            delta(request, escpos()),
            vec![0x1B, 0x21, 0x00, 0x1B, 0x21, 0x00, 0x1B, 0x21, 0x30]
        );
    }

    #[test]
    fn test_custom_size_full_skips_normal_reset() {
        let set = escpos();
        let mut expected = set.custom_size(8, 7);
        let defaults = expected_full(set, &[]);
        let reset_and_size = set.command(Command::NormalText).len()
            + set.resolve(Capability::Size(SizePreset::Normal)).len();
        expected.extend_from_slice(&defaults[reset_and_size..]);

        assert_eq!(full(StyleRequest::new().custom_size(8, 7), set), expected);
        assert_eq!(&expected[..3], &[0x1D, 0x21, 0x76]);
    }

    #[test]
    fn test_custom_size_delta_corners() {
        for width in [1, 8] {
            for height in [1, 8] {
                let byte = ((width as u8 - 1) << 4) + (height as u8 - 1);
                assert_eq!(
                    delta(StyleRequest::new().custom_size(width, height), escpos()),
                    vec![0x1D, 0x21, byte]
                );
            }
        }
    }

    #[test]
    fn test_custom_size_out_of_range() {
        let values = [0, 9, 10, 4444, -1, i64::MIN, i64::MAX];
        for dialect in Dialect::ALL {
            let set = dialect.command_set();
            for &width in &values {
                for &height in values.iter().chain(&[1, 8]) {
                    for mode in [EncodeMode::Delta, EncodeMode::Full] {
                        let request = StyleRequest::new().custom_size(width, height).bold(true);
                        assert_eq!(
                            request.encode(mode, set),
                            Err(DialectError::CustomSizeOutOfRange { width, height })
                        );
                        let swapped = StyleRequest::new().custom_size(height, width);
                        assert!(swapped.encode(mode, set).is_err());
                    }
                }
            }
        }
    }

    #[test]
    fn test_flip_and_smooth() {
        let set = escpos();
        assert_eq!(
            full(StyleRequest::new().flip(true), set),
            expected_full(set, &[Capability::Flip(true)])
        );
        assert_eq!(delta(StyleRequest::new().flip(true), set), vec![0x1B, 0x7B, 0x01]);
        assert_eq!(
            full(StyleRequest::new().smooth(true), set),
            expected_full(set, &[Capability::Smooth(true)])
        );
    }

    #[test]
    fn test_text_styles_full() {
        let set = escpos();
        let cases = [
            (StyleRequest::new().bold(true), Capability::Bold(true)),
            (
                StyleRequest::new().underline(Underline::Single),
                Capability::Underline(Underline::Single),
            ),
            (
                StyleRequest::new().underline(Underline::Double),
                Capability::Underline(Underline::Double),
            ),
            (StyleRequest::new().font(Font::B), Capability::Font(Font::B)),
            (
                StyleRequest::new().align(Alignment::Center),
                Capability::Align(Alignment::Center),
            ),
            (
                StyleRequest::new().align(Alignment::Right),
                Capability::Align(Alignment::Right),
            ),
            (StyleRequest::new().invert(true), Capability::Invert(true)),
        ];
        for (request, cap) in cases {
            assert_eq!(full(request, set), expected_full(set, &[cap]), "{cap}");
        }
    }

    #[test]
    fn test_delta_order() {
        let set = escpos();
        let request = StyleRequest::new()
            .invert(true)
            .align(Alignment::Right)
            .bold(true)
            .size(SizePreset::DoubleWidth)
            .density(Density::ALL[2]);
        let expected = [
            set.command(Command::NormalText),
            set.resolve(Capability::Size(SizePreset::DoubleWidth)),
            set.resolve(Capability::Bold(true)),
            set.resolve(Capability::Align(Alignment::Right)),
            set.resolve(Capability::Density(Density::ALL[2])),
            set.resolve(Capability::Invert(true)),
        ]
        .concat();
        assert_eq!(delta(request, set), expected);
    }

    #[test]
    fn test_densities_precede_invert() {
        for dialect in Dialect::ALL {
            let set = dialect.command_set();
            for d in Density::ALL {
                let bytes = full(StyleRequest::new().density(d), set);
                assert_eq!(bytes, expected_full(set, &[Capability::Density(d)]));

                let invert = set.resolve(Capability::Invert(false));
                let density = set.resolve(Capability::Density(d));
                let tail = [density, invert].concat();
                assert!(bytes.ends_with(&tail), "density {} on {dialect}", d.level());
            }
        }
    }

    #[test]
    fn test_boolean_styles_round_trip() {
        for dialect in Dialect::ALL {
            let set = dialect.command_set();
            let toggles: [(fn(StyleRequest, bool) -> StyleRequest, fn(bool) -> Capability); 4] = [
                (StyleRequest::bold, Capability::Bold),
                (StyleRequest::invert, Capability::Invert),
                (StyleRequest::flip, Capability::Flip),
                (StyleRequest::smooth, Capability::Smooth),
            ];
            for (set_field, cap) in toggles {
                let off = delta(set_field(StyleRequest::new(), false), set);
                assert_eq!(off, set.resolve(cap(false)));
                assert_eq!(
                    full(set_field(StyleRequest::new(), false), set),
                    full(StyleRequest::new(), set)
                );
                let on = delta(set_field(StyleRequest::new(), true), set);
                assert_eq!(on, set.resolve(cap(true)));
            }
        }
    }

    #[test]
    fn test_dialects_diverge() {
        let request = StyleRequest::new().bold(true).align(Alignment::Center);
        assert_ne!(full(request.clone(), escpos()), full(request.clone(), star()));
        assert_eq!(
            delta(request, star()),
            vec![0x1B, 0x45, 0x1B, 0x1D, 0x61, 0x01]
        );
    }

    #[test]
    fn test_star_unsupported_always_empty() {
        let set = star();
        for on in [true, false] {
            assert!(delta(StyleRequest::new().flip(on), set).is_empty());
            assert!(delta(StyleRequest::new().smooth(on), set).is_empty());
        }
        for (w, h) in [(1, 1), (4, 2), (8, 8)] {
            assert!(delta(StyleRequest::new().custom_size(w, h), set).is_empty());
        }
        assert_eq!(
            full(StyleRequest::new().flip(true).smooth(true), set),
            full(StyleRequest::new(), set)
        );
    }

    #[test]
    fn test_star_full_defaults() {
        let expected = [
            &[0x1B, 0x69, 0x00, 0x00][..], // size normal, no reset
            &[0x1B, 0x46],                 // bold off
            &[0x1B, 0x2D, 0x00],           // underline off
            &[0x1B, 0x1E, 0x46, 0x00],     // font a
            &[0x1B, 0x1D, 0x61, 0x00],     // align left
            &[0x1B, 0x35],                 // invert off
        ]
        .concat();
        assert_eq!(full(StyleRequest::new(), star()), expected);
    }

    #[test]
    fn test_color_is_separate() {
        for dialect in Dialect::ALL {
            let set = dialect.command_set();
            assert!(delta(StyleRequest::new().color(Color::Red), set).is_empty());
            assert_eq!(
                full(StyleRequest::new().color(Color::Red), set),
                full(StyleRequest::new(), set)
            );
            assert_eq!(encode_color(Color::Red, set), vec![0x1B, 0x72, 0x01]);
            assert_eq!(encode_color(Color::Black, set), vec![0x1B, 0x72, 0x00]);
        }
    }

    #[test]
    fn test_mode_from_bool() {
        assert_eq!(EncodeMode::from(true), EncodeMode::Full);
        assert_eq!(EncodeMode::from(false), EncodeMode::Delta);
    }

    #[test]
    fn test_from_json() {
        let request = StyleRequest::from_json(
            r#"{"bold": true, "size": "2h", "underline": 2, "align": "center", "density": 5}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            StyleRequest::new()
                .bold(true)
                .size(SizePreset::DoubleHeight)
                .underline(Underline::Double)
                .align(Alignment::Center)
                .density(Density::ALL[5])
        );

        let custom = StyleRequest::from_json(r#"{"size": {"width": 3, "height": 2}}"#).unwrap();
        assert_eq!(custom.size, Some(SizeRequest::Custom { width: 3, height: 2 }));

        let missing = StyleRequest::from_json(r#"{"size": {"width": 3}}"#).unwrap();
        assert_eq!(
            missing.encode(EncodeMode::Delta, escpos()),
            Err(DialectError::CustomSizeOutOfRange { width: 3, height: 0 })
        );

        assert!(matches!(
            StyleRequest::from_json(r#"{"blink": true}"#),
            Err(DialectError::Parse(_))
        ));
        assert!(matches!(
            StyleRequest::from_json(r#"{"density": 9}"#),
            Err(DialectError::Parse(_))
        ));
    }

    #[test]
    fn test_state_apply_and_changes() {
        let state = StyleState::default().apply(&StyleRequest::new().bold(true)).unwrap();
        assert!(state.bold);

        let request = StyleRequest::new().bold(true).align(Alignment::Right);
        assert_eq!(
            request.changes_from(&state),
            StyleRequest::new().align(Alignment::Right)
        );

        assert!(
            StyleState::default()
                .apply(&StyleRequest::new().custom_size(0, 3))
                .is_err()
        );
    }

    #[test]
    fn test_transition_skips_current_fields() {
        let state = StyleState {
            bold: true,
            ..Default::default()
        };
        let (bytes, next) = state
            .transition(&StyleRequest::new().bold(true), escpos())
            .unwrap();
        assert!(bytes.is_empty());
        assert_eq!(next, state);
    }

    #[test]
    fn test_transition_reasserts_after_text_reset() {
        let state = StyleState {
            bold: true,
            font: Font::B,
            ..Default::default()
        };
        let target = StyleRequest::new().size(SizePreset::Quad);

        let set = escpos();
        let (bytes, next) = state.transition(&target, set).unwrap();
        let expected = [
            set.command(Command::NormalText),
            set.resolve(Capability::Size(SizePreset::Quad)),
            set.resolve(Capability::Bold(true)),
            set.resolve(Capability::Font(Font::B)),
        ]
        .concat();
        assert_eq!(bytes, expected);
        assert_eq!(next.size, SizeRequest::Preset(SizePreset::Quad));

        // Star's size command leaves other modes alone
        let (bytes, _) = state.transition(&target, star()).unwrap();
        assert_eq!(bytes, vec![0x1B, 0x69, 0x01, 0x01]);
    }

    #[test]
    fn test_transition_appends_color() {
        let (bytes, next) = StyleState::default()
            .transition(&StyleRequest::new().invert(true).color(Color::Red), escpos())
            .unwrap();
        assert_eq!(bytes, vec![0x1D, 0x42, 0x01, 0x1B, 0x72, 0x01]);
        assert_eq!(next.color, Color::Red);
    }

    #[test]
    fn test_state_into_full_request() {
        let state = StyleState::default();
        let request = StyleRequest::from(state);
        assert_eq!(
            delta(request, escpos()),
            full(StyleRequest::new().color(Color::Black), escpos())
        );
    }
}
