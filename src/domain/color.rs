//! Color type used by plots and render options
//!
//! Colors are written as hex strings (`#rgb`, `#rrggbb`, `#rrggbbaa`) or a
//! small set of CSS names.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Category10 palette, assigned to glyphs that do not set a color
pub const CATEGORY10: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Palette color for the glyph at `index`, cycling through Category10
    pub fn palette(index: usize) -> Self {
        CATEGORY10[index % CATEGORY10.len()]
    }

    /// Parse a hex or named color
    ///
    /// # Errors
    /// Returns `DomainError::InvalidColor` if the string is not recognized
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        let invalid = || DomainError::InvalidColor(value.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
            return match hex.len() {
                3 => {
                    let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                    Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
                }
                6 | 8 => {
                    let mut color =
                        Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?);
                    if hex.len() == 8 {
                        color.a = channel(&hex[6..8])?;
                    }
                    Ok(color)
                }
                _ => Err(invalid()),
            };
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::rgb(0xff, 0, 0)),
            "green" => Ok(Self::rgb(0, 0x80, 0)),
            "blue" => Ok(Self::rgb(0, 0, 0xff)),
            "gray" | "grey" => Ok(Self::rgb(0x80, 0x80, 0x80)),
            "navy" => Ok(Self::rgb(0, 0, 0x80)),
            "orange" => Ok(Self::rgb(0xff, 0xa5, 0)),
            "firebrick" => Ok(Self::rgb(0xb2, 0x22, 0x22)),
            "transparent" => Ok(Self {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            }),
            _ => Err(invalid()),
        }
    }

    /// Hex representation (`#rrggbb`, or `#rrggbbaa` when not opaque)
    pub fn to_hex(&self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Alpha as a fraction (0.0-1.0)
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
