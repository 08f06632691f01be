//! RGB text colours.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-bit colour used for run text.
///
/// Serialized as an uppercase six-digit hex string (`"2C3E50"`), which is
/// also the form DOCX expects in `w:color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// White.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Hex representation without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Parse a six-digit hex string, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid hex colour: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb(44, 62, 80).to_hex(), "2C3E50");
        assert_eq!(Rgb::WHITE.to_hex(), "FFFFFF");
        assert_eq!(Rgb(0, 128, 0).to_string(), "008000");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("C47800"), Some(Rgb(196, 120, 0)));
        assert_eq!(Rgb::from_hex("#1e1e1e"), Some(Rgb(30, 30, 30)));
        assert_eq!(Rgb::from_hex("12345"), None);
        assert_eq!(Rgb::from_hex("GGGGGG"), None);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb(192, 0, 0)).unwrap();
        assert_eq!(json, "\"C00000\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb(192, 0, 0));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
