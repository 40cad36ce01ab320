// crates/flagdb-core/src/palette.rs
use crate::color::{flag_contains_color, Rgb, COLOR_MATCH_THRESHOLD};
use crate::model::FlagRecord;
use serde::Serialize;

/// A named swatch offered as a color filter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

impl PaletteColor {
    pub fn rgb(&self) -> Rgb {
        // Palette entries are compile-time constants, checked in tests.
        Rgb::from_hex(self.hex).unwrap_or(Rgb::new(0, 0, 0))
    }
}

/// The reference palette, in display order.
pub const PALETTE: [PaletteColor; 14] = [
    PaletteColor { name: "Red", hex: "#E53935" },
    PaletteColor { name: "Blue", hex: "#1E88E5" },
    PaletteColor { name: "Green", hex: "#43A047" },
    PaletteColor { name: "Yellow", hex: "#FDD835" },
    PaletteColor { name: "White", hex: "#FFFFFF" },
    PaletteColor { name: "Black", hex: "#212121" },
    PaletteColor { name: "Orange", hex: "#FB8C00" },
    PaletteColor { name: "Light Blue", hex: "#4FC3F7" },
    PaletteColor { name: "Maroon", hex: "#8B0000" },
    PaletteColor { name: "Gold", hex: "#FFD700" },
    PaletteColor { name: "Brown", hex: "#795548" },
    PaletteColor { name: "Pink", hex: "#E91E63" },
    PaletteColor { name: "Purple", hex: "#7B1FA2" },
    PaletteColor { name: "Teal", hex: "#009688" },
];

/// Case-insensitive lookup by swatch name. Spaces, dashes and underscores
/// are interchangeable, so `light-blue` finds "Light Blue".
pub fn find_by_name(name: &str) -> Option<&'static PaletteColor> {
    let wanted = normalize_name(name);
    PALETTE.iter().find(|c| normalize_name(c.name) == wanted)
}

/// Lookup by hex value, ignoring case and the leading `#`.
pub fn find_by_hex(hex: &str) -> Option<&'static PaletteColor> {
    let wanted = Rgb::from_hex(hex)?;
    PALETTE.iter().find(|c| c.rgb() == wanted)
}

/// Resolves either a swatch name or a hex value to the palette's hex string.
pub fn resolve(name_or_hex: &str) -> Option<&'static str> {
    find_by_name(name_or_hex)
        .or_else(|| find_by_hex(name_or_hex))
        .map(|c| c.hex)
}

/// For each palette color, how many of `flags` contain it.
pub fn color_stats<'a, I>(flags: I) -> Vec<(&'static PaletteColor, usize)>
where
    I: IntoIterator<Item = &'a FlagRecord>,
    I::IntoIter: Clone,
{
    let flags = flags.into_iter();
    PALETTE
        .iter()
        .map(|color| {
            let count = flags
                .clone()
                .filter(|f| flag_contains_color(f, color.hex, COLOR_MATCH_THRESHOLD))
                .count();
            (color, count)
        })
        .collect()
}

fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_entry_is_valid_hex() {
        for c in PALETTE {
            assert!(Rgb::from_hex(c.hex).is_some(), "{} has bad hex", c.name);
        }
    }

    #[test]
    fn name_lookup_is_forgiving() {
        assert_eq!(find_by_name("light blue").map(|c| c.hex), Some("#4FC3F7"));
        assert_eq!(find_by_name("Light-Blue").map(|c| c.hex), Some("#4FC3F7"));
        assert_eq!(find_by_name(" RED ").map(|c| c.hex), Some("#E53935"));
        assert!(find_by_name("chartreuse").is_none());
    }

    #[test]
    fn resolve_accepts_names_and_hex() {
        assert_eq!(resolve("white"), Some("#FFFFFF"));
        assert_eq!(resolve("ffffff"), Some("#FFFFFF"));
        assert_eq!(resolve("#123456"), None);
    }
}
