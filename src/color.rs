//! Color parsing and WCAG 2.1 contrast math.
//!
//! Computed styles arrive from the harness as CSS color strings. Parsing is
//! strict: `rgb(r, g, b)` with integer channels, or `#RRGGBB`. Formatting
//! back to hex is lenient and clamps, so diagnostic output never fails.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Minimum contrast ratio for normal text (WCAG 2.1 AA).
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// Minimum contrast ratio for large text (WCAG 2.1 AA).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

/// A color in 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Relative luminance per WCAG 2.1: channels normalized to `[0, 1]`,
    /// linearized, then weighted `0.2126 R + 0.7152 G + 0.0722 B`.
    pub fn relative_luminance(&self) -> f64 {
        let r = srgb_to_linear(f64::from(self.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.b) / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Contrast ratio against another color, `(lighter + 0.05) / (darker + 0.05)`.
    /// Symmetric; ranges from 1.0 to 21.0.
    pub fn contrast_ratio(&self, other: &Rgb) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Parses the `rgb(r, g, b)` functional form. The function name is
/// case-insensitive and whitespace around channels is ignored, but anything
/// else, including alpha forms and `+`-signed channels, is rejected rather
/// than guessed at. Negative or oversized channel values report as
/// out-of-range channels, not format errors.
pub fn parse_rgb(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let body = trimmed
        .get(..4)
        .filter(|prefix| prefix.eq_ignore_ascii_case("rgb("))
        .and_then(|_| trimmed.strip_suffix(')'))
        .map(|rest| &rest[4..])
        .ok_or_else(|| MatchError::color_format(input))?;

    let mut channels = [0u8; 3];
    let mut parts = body.split(',');
    for (slot, name) in channels.iter_mut().zip(['r', 'g', 'b']) {
        let text = parts
            .next()
            .ok_or_else(|| MatchError::color_format(input))?
            .trim();
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MatchError::color_format(input));
        }
        // Past the digit check a parse failure can only be overflow, an
        // out-of-range magnitude like any other.
        match text.parse::<i64>() {
            Ok(value) if (0..=255).contains(&value) => *slot = value as u8,
            _ => {
                return Err(MatchError::ColorChannel {
                    channel: name,
                    value: text.to_string(),
                })
            }
        }
    }
    if parts.next().is_some() {
        return Err(MatchError::color_format(input));
    }

    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Parses a `#RRGGBB` hex color, case-insensitive.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| MatchError::color_format(input))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| MatchError::color_format(input))
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Formats raw channel values as `#RRGGBB`, silently clamping each to
/// `[0, 255]`. The lenient counterpart to [`parse_rgb`]'s strict validation,
/// so out-of-range inputs still render into diagnostics.
pub fn hex_from_components(r: i64, g: i64, b: i64) -> String {
    let clamp = |value: i64| value.clamp(0, 255) as u8;
    Rgb::new(clamp(r), clamp(g), clamp(b)).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_functional_rgb_with_flexible_whitespace() {
        assert_eq!(parse_rgb("rgb(0, 128, 255)").unwrap(), Rgb::new(0, 128, 255));
        assert_eq!(parse_rgb("rgb(1,2,3)").unwrap(), Rgb::new(1, 2, 3));
        assert_eq!(parse_rgb("RGB( 10 , 20 , 30 )").unwrap(), Rgb::new(10, 20, 30));
        assert_eq!(parse_rgb("  rgb(255, 255, 255)  ").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn rejects_alpha_and_foreign_forms() {
        assert!(matches!(
            parse_rgb("rgba(1, 2, 3, 1)"),
            Err(MatchError::ColorFormat { .. })
        ));
        assert!(matches!(
            parse_rgb("hsl(120, 50%, 50%)"),
            Err(MatchError::ColorFormat { .. })
        ));
        assert!(matches!(
            parse_rgb("rgb(1, 2, 3, 4)"),
            Err(MatchError::ColorFormat { .. })
        ));
        assert!(matches!(parse_rgb("1, 2, 3"), Err(MatchError::ColorFormat { .. })));
        assert!(matches!(parse_rgb("rgb(1, 2)"), Err(MatchError::ColorFormat { .. })));
        assert!(matches!(
            parse_rgb("rgb(1.5, 2, 3)"),
            Err(MatchError::ColorFormat { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_channels_naming_the_channel() {
        match parse_rgb("rgb(0, 300, 0)") {
            Err(MatchError::ColorChannel { channel, value }) => {
                assert_eq!(channel, 'g');
                assert_eq!(value, "300");
            }
            other => panic!("expected channel error, got {other:?}"),
        }
        match parse_rgb("rgb(-1, 0, 0)") {
            Err(MatchError::ColorChannel { channel, value }) => {
                assert_eq!(channel, 'r');
                assert_eq!(value, "-1");
            }
            other => panic!("expected channel error, got {other:?}"),
        }
    }

    #[test]
    fn overflowing_channel_values_are_range_errors() {
        match parse_rgb("rgb(99999999999999999999, 0, 0)") {
            Err(MatchError::ColorChannel { channel, value }) => {
                assert_eq!(channel, 'r');
                assert_eq!(value, "99999999999999999999");
            }
            other => panic!("expected channel error, got {other:?}"),
        }
        assert!(matches!(
            parse_rgb("rgb(0, 0, -99999999999999999999)"),
            Err(MatchError::ColorChannel { channel: 'b', .. })
        ));
    }

    #[test]
    fn rejects_plus_signed_channels() {
        assert!(matches!(
            parse_rgb("rgb(+10, 0, 0)"),
            Err(MatchError::ColorFormat { .. })
        ));
        assert!(matches!(
            parse_rgb("rgb(10, +0, 0)"),
            Err(MatchError::ColorFormat { .. })
        ));
        assert!(matches!(parse_hex("#+12345"), Err(MatchError::ColorFormat { .. })));
    }

    #[test]
    fn parses_hex_in_either_case() {
        assert_eq!(parse_hex("#1E293B").unwrap(), Rgb::new(0x1E, 0x29, 0x3B));
        assert_eq!(parse_hex("#ffffff").unwrap(), Rgb::WHITE);
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("1E293B").is_err());
        assert!(parse_hex("#GG0000").is_err());
    }

    #[test]
    fn hex_output_is_uppercase_and_clamped() {
        assert_eq!(Rgb::new(10, 11, 12).to_hex(), "#0A0B0C");
        assert_eq!(hex_from_components(-10, 300, 128), "#00FF80");
        assert_eq!(hex_from_components(0, 0, 0), "#000000");
    }

    #[test]
    fn hex_round_trips_through_parse() {
        let color = Rgb::new(118, 118, 118);
        assert_eq!(parse_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn luminance_spans_black_to_white() {
        assert!(Rgb::new(0, 0, 0).relative_luminance().abs() < 1e-9);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = Rgb::new(0, 0, 0).contrast_ratio(&Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn gray_on_white_matches_reference_value() {
        // colord: 4.54
        let ratio = Rgb::new(0x76, 0x76, 0x76).contrast_ratio(&Rgb::WHITE);
        assert!((ratio - 4.54).abs() < 0.1);
    }

    #[test]
    fn red_on_white_matches_reference_value() {
        // colord: 3.99
        let ratio = Rgb::new(255, 0, 0).contrast_ratio(&Rgb::WHITE);
        assert!((ratio - 3.99).abs() < 0.1);
    }

    #[test]
    fn contrast_is_order_independent() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::WHITE;
        assert!((a.contrast_ratio(&b) - b.contrast_ratio(&a)).abs() < 1e-9);
    }
}
