use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// Named tokens accepted in place of a hex color, with the hex they resolve to
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("neutral", (0x6b, 0x72, 0x80)),
    ("gray", (0x6b, 0x72, 0x80)),
    ("slate", (0x64, 0x74, 0x8b)),
    ("red", (0xdc, 0x26, 0x26)),
    ("orange", (0xea, 0x58, 0x0c)),
    ("yellow", (0xca, 0x8a, 0x04)),
    ("green", (0x16, 0xa3, 0x4a)),
    ("teal", (0x08, 0x91, 0xb2)),
    ("blue", (0x25, 0x63, 0xeb)),
    ("purple", (0x8b, 0x5c, 0xf6)),
];

/// Display color of a classification entry
///
/// Either a literal RGB value or a symbolic token that is resolved to RGB when
/// rendered. Serialized as its textual form (`#rrggbb` or the token name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ColorToken {
    Rgb(u8, u8, u8),
    Named(&'static str),
}

impl ColorToken {
    /// Resolve to an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorToken::Rgb(r, g, b) => (*r, *g, *b),
            ColorToken::Named(name) => NAMED_COLORS
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, rgb)| *rgb)
                .unwrap_or((0x6b, 0x72, 0x80)),
        }
    }

    /// Resolve to a lowercase `#rrggbb` string
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

fn parse_hex_digit_pair(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

impl FromStr for ColorToken {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ClassifyError::InvalidColor(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            return match hex.len() {
                3 => {
                    // #abc expands to #aabbcc
                    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                    match (digit(0), digit(1), digit(2)) {
                        (Some(r), Some(g), Some(b)) => Ok(ColorToken::Rgb(r, g, b)),
                        _ => Err(invalid()),
                    }
                }
                6 => match (
                    parse_hex_digit_pair(&hex[0..2]),
                    parse_hex_digit_pair(&hex[2..4]),
                    parse_hex_digit_pair(&hex[4..6]),
                ) {
                    (Some(r), Some(g), Some(b)) => Ok(ColorToken::Rgb(r, g, b)),
                    _ => Err(invalid()),
                },
                _ => Err(invalid()),
            };
        }

        let lower = trimmed.to_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(name, _)| ColorToken::Named(*name))
            .ok_or_else(invalid)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Rgb(..) => f.write_str(&self.to_hex()),
            ColorToken::Named(name) => f.write_str(name),
        }
    }
}

impl From<ColorToken> for String {
    fn from(color: ColorToken) -> Self {
        color.to_string()
    }
}

// Named tokens come back as the `&'static str` from NAMED_COLORS, never borrowed from the input
impl<'de> Deserialize<'de> for ColorToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
