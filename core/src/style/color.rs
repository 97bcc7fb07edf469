//! Hex color values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An opaque RGB color written as `#RRGGBB`.
///
/// A `HexColor` can only be built from a well-formed hex string or raw
/// channels, so a color held by the form is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    rgb: [u8; 3],
}

impl HexColor {
    /// Build from raw channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Parse `#RRGGBB` (hex digits in either case)
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Red, green and blue channels
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Channels with a fully opaque alpha
    pub fn to_rgba(&self) -> [u8; 4] {
        let [r, g, b] = self.rgb;
        [r, g, b, 0xFF]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Serialized as the bare `#RRGGBB` string
impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let color = HexColor::parse("#0077b6").unwrap();
        assert_eq!(color.rgb(), [0x00, 0x77, 0xB6]);
        assert_eq!(color.to_string(), "#0077B6");
    }

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(
            HexColor::parse("#f8f9fa").unwrap(),
            HexColor::parse("#F8F9FA").unwrap()
        );
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "#", "000000", "#00000", "#0000000", "#GG0000", "#12 456", "red"] {
            assert!(
                matches!(HexColor::parse(bad), Err(Error::InvalidColor(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_serde_as_string() {
        let color = HexColor::from_rgb(0x21, 0x25, 0x29);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#212529\"");

        let parsed: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);

        assert!(serde_json::from_str::<HexColor>("\"#xyz\"").is_err());
    }
}
