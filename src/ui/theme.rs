//! Named color palette and the semantic theme built on it

use ratatui::style::Color;
use thiserror::Error;

/// Palette consumed by the utility-class resolver, as `(name, #rrggbb)`
pub const PALETTE: &[(&str, &str)] = &[
    ("brand", "#d80700"),
    ("primary", "#222330"),
    ("accent1", "#006fc2"),
    ("accent2", "#f2c5c4"),
    ("neutralLight", "#f1f5f9"),
    ("neutralMid", "#6b6e96"),
    ("neutralDark", "#464863"),
    ("limeGreen", "#32cd32"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),
}

/// Hex string of a palette entry
pub fn palette_hex(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, hex)| *hex)
}

/// Palette entry as a terminal color
pub fn palette_color(name: &str) -> Option<Color> {
    palette_hex(name).and_then(|hex| parse_hex(hex).ok())
}

/// Parse `#rrggbb` into an RGB color
pub fn parse_hex(hex: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub brand: Color,
    pub accent: Color,    // Blue
    pub highlight: Color, // Soft pink
    pub muted: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub success: Color,   // Green
    pub bar_bg: Color,
}

// Same values as the palette entries named in the comments.
pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(0x22, 0x23, 0x30),             // primary
    fg: Color::Rgb(0xf1, 0xf5, 0xf9),             // neutralLight
    brand: Color::Rgb(0xd8, 0x07, 0x00),          // brand
    accent: Color::Rgb(0x00, 0x6f, 0xc2),         // accent1
    highlight: Color::Rgb(0xf2, 0xc5, 0xc4),      // accent2
    muted: Color::Rgb(0x6b, 0x6e, 0x96),          // neutralMid
    border_focused: Color::Rgb(0xf2, 0xc5, 0xc4), // accent2
    border_normal: Color::Rgb(0x46, 0x48, 0x63),  // neutralDark
    success: Color::Rgb(0x32, 0xcd, 0x32),        // limeGreen
    bar_bg: Color::Rgb(0x46, 0x48, 0x63),         // neutralDark
};
