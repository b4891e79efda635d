use std::fmt;

/// 24-bit sRGB colour, rendered as `#rrggbb` in Pango markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Neutral colour used when a value cannot be classified.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string: `#RRGGBB`, `0xRRGGBB` (Alacritty style) or
    /// either form with a trailing alpha byte, which is ignored.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 | 8 => Some(Self {
                r: byte(&hex[0..2])?,
                g: byte(&hex[2..4])?,
                b: byte(&hex[4..6])?,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
