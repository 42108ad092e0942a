//! RGB color type used by palettes.

use std::fmt;

/// An opaque 8-bit-per-channel color.
///
/// Palettes are configured as `#rrggbb` strings; this is the parsed form used
/// by renderers.
///
/// # Examples
///
/// ```
/// use pixelpad::grid::Color;
/// let orange = Color::from_hex("#ff4500").unwrap();
/// assert_eq!(orange, Color::new(0xff, 0x45, 0x00));
/// assert_eq!(orange.to_string(), "#ff4500");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb` or the short `#rgb` form (case-insensitive).
    ///
    /// Returns `None` for anything else.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let digits = raw.trim().strip_prefix('#').unwrap_or(raw.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let expand = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
                Some(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    /// Returns the lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
