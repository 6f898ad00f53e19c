//! The canonical color value and its literal forms.

use crate::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Same color with the alpha channel forced to 255.
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (case-insensitive).
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize, len: usize| -> Option<u8> {
            let part = digits.get(i * len..(i + 1) * len)?;
            let value = u8::from_str_radix(part, 16).ok()?;
            // #abc expands each digit to a pair: a -> aa
            Some(if len == 1 { value * 17 } else { value })
        };
        match digits.len() {
            3 => Some(Self::rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            4 => Some(Self::rgba(
                channel(0, 1)?,
                channel(1, 1)?,
                channel(2, 1)?,
                channel(3, 1)?,
            )),
            6 => Some(Self::rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::rgba(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Literal form of the color in the given format.
    pub fn to_literal(&self, format: ColorFormat) -> Literal {
        let channel = |value: u8| Literal::Int(i64::from(value));
        match format {
            ColorFormat::RgbTuple => {
                Literal::Tuple(vec![channel(self.r), channel(self.g), channel(self.b)])
            }
            ColorFormat::RgbaTuple => Literal::Tuple(vec![
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a),
            ]),
            ColorFormat::HexString => Literal::Str(self.to_hex()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color Format
// ─────────────────────────────────────────────────────────────────────────────

/// Canonical shape colors are normalized to and exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorFormat {
    /// `(r, g, b)`; alpha is dropped
    #[default]
    RgbTuple,
    /// `(r, g, b, a)`
    RgbaTuple,
    /// `'#rrggbb'` or `'#rrggbbaa'`
    HexString,
}

impl ColorFormat {
    /// Apply the format's alpha policy to a color.
    pub fn apply(&self, color: Color) -> Color {
        match self {
            ColorFormat::RgbTuple => color.opaque(),
            ColorFormat::RgbaTuple | ColorFormat::HexString => color,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorFormat::RgbTuple => "RGB tuple",
            ColorFormat::RgbaTuple => "RGBA tuple",
            ColorFormat::HexString => "Hex string",
        }
    }
}
