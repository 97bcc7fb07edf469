//! Built-in color themes

use serde::Serialize;

use super::HexColor;
use crate::{Error, Result};

/// A named foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    pub foreground: HexColor,
    pub background: HexColor,
}

static PRESETS: [ColorPreset; 6] = [
    ColorPreset {
        name: "Classique",
        foreground: HexColor::from_rgb(0x00, 0x00, 0x00),
        background: HexColor::from_rgb(0xFF, 0xFF, 0xFF),
    },
    ColorPreset {
        name: "Ocean",
        foreground: HexColor::from_rgb(0x00, 0x77, 0xB6),
        background: HexColor::from_rgb(0xCA, 0xF0, 0xF8),
    },
    ColorPreset {
        name: "Sunset",
        foreground: HexColor::from_rgb(0xD6, 0x28, 0x28),
        background: HexColor::from_rgb(0xFC, 0xBF, 0x49),
    },
    ColorPreset {
        name: "Forest",
        foreground: HexColor::from_rgb(0x2D, 0x6A, 0x4F),
        background: HexColor::from_rgb(0xD8, 0xF3, 0xDC),
    },
    ColorPreset {
        name: "Purple",
        foreground: HexColor::from_rgb(0x7B, 0x2C, 0xBF),
        background: HexColor::from_rgb(0xE0, 0xAA, 0xFF),
    },
    ColorPreset {
        name: "Dark",
        foreground: HexColor::from_rgb(0xF8, 0xF9, 0xFA),
        background: HexColor::from_rgb(0x21, 0x25, 0x29),
    },
];

/// All presets, in display order
pub fn presets() -> &'static [ColorPreset] {
    &PRESETS
}

/// Look up a preset by name, ignoring case
pub fn find_preset(name: &str) -> Result<&'static ColorPreset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::UnknownPreset(name.to_string()))
}

/// Presets as a pretty JSON array
pub fn presets_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(presets())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_presets_in_order() {
        let names: Vec<_> = presets().iter().map(|p| p.name).collect();
        assert_eq!(names, ["Classique", "Ocean", "Sunset", "Forest", "Purple", "Dark"]);
    }

    #[test]
    fn test_find_preset() {
        let dark = find_preset("dark").unwrap();
        assert_eq!(dark.foreground.to_string(), "#F8F9FA");
        assert_eq!(dark.background.to_string(), "#212529");

        assert!(matches!(find_preset("Neon"), Err(Error::UnknownPreset(_))));
    }

    #[test]
    fn test_presets_json() {
        let json: serde_json::Value = serde_json::from_str(&presets_json().unwrap()).unwrap();
        assert_eq!(json[1]["name"], "Ocean");
        assert_eq!(json[1]["foreground"], "#0077B6");
        assert_eq!(json[1]["background"], "#CAF0F8");
    }

    #[test]
    fn test_preset_pairs_are_distinct() {
        for (i, a) in presets().iter().enumerate() {
            for b in &presets()[i + 1..] {
                assert!((a.foreground, a.background) != (b.foreground, b.background));
            }
        }
    }
}
