// crates/flagdb-core/src/color.rs

//! # Color distance
//!
//! Plain Euclidean distance over 8-bit RGB components. No gamma correction
//! and no perceptual color space: the filter only needs a cheap tolerance
//! test between a flag's literal colors and the palette swatches.

use crate::model::FlagRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum distance (exclusive) at which two colors count as the same swatch.
pub const COLOR_MATCH_THRESHOLD: f64 = 60.0;

/// An 8-bit RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `RRGGBB` (hex digits in either case).
    ///
    /// Anything else, including the 3-digit shorthand, yields `None`.
    ///
    /// ```rust
    /// use flagdb_core::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#E53935"), Some(Rgb::new(0xE5, 0x39, 0x35)));
    /// assert_eq!(Rgb::from_hex("ffffff"), Some(Rgb::new(255, 255, 255)));
    /// assert_eq!(Rgb::from_hex("#FFF"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Euclidean distance to `other` in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Distance between two hex colors; `f64::INFINITY` if either is malformed.
pub fn color_distance(a: &str, b: &str) -> f64 {
    match (Rgb::from_hex(a), Rgb::from_hex(b)) {
        (Some(a), Some(b)) => a.distance(b),
        _ => f64::INFINITY,
    }
}

/// True if any of the flag's colors lies strictly within `threshold` of `color`.
pub fn flag_contains_color(flag: &FlagRecord, color: &str, threshold: f64) -> bool {
    let Some(target) = Rgb::from_hex(color) else {
        return false;
    };
    flag.colors
        .iter()
        .filter_map(|c| Rgb::from_hex(c))
        .any(|c| c.distance(target) < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_have_zero_distance() {
        assert_eq!(color_distance("#FFFFFF", "#FFFFFF"), 0.0);
    }

    #[test]
    fn black_and_white_are_far_apart() {
        let d = color_distance("#000000", "#FFFFFF");
        assert!((d - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
        assert!((d - 441.67).abs() < 0.01);
        assert!(d > COLOR_MATCH_THRESHOLD);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        assert_eq!(color_distance("#000000", "#00003C"), COLOR_MATCH_THRESHOLD);
        let at = FlagRecord::new("AT", "At", "Asia", "A", vec!["#00003C".into()]);
        let below = FlagRecord::new("BE", "Below", "Asia", "B", vec!["#00003B".into()]);
        assert!(!flag_contains_color(&at, "#000000", COLOR_MATCH_THRESHOLD));
        assert!(flag_contains_color(&below, "#000000", COLOR_MATCH_THRESHOLD));
    }

    #[test]
    fn hex_parsing_accepts_optional_hash_and_any_case() {
        assert_eq!(Rgb::from_hex("#0a3161"), Rgb::from_hex("0A3161"));
        assert_eq!(Rgb::from_hex("#0A3161"), Some(Rgb::new(0x0A, 0x31, 0x61)));
    }

    #[test]
    fn malformed_hex_is_infinitely_distant() {
        for bad in ["", "#", "#12345", "#1234567", "#GGGGGG", "red", "##FFFFFF", "#FF FF F"] {
            assert_eq!(Rgb::from_hex(bad), None, "{bad:?} should not parse");
            assert!(color_distance(bad, "#FFFFFF").is_infinite());
        }
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(Rgb::from_hex("#ÄÄÄ"), None);
    }

    #[test]
    fn display_round_trips_to_uppercase_hex() {
        assert_eq!(Rgb::new(0xe5, 0x39, 0x35).to_hex(), "#E53935");
    }
}
