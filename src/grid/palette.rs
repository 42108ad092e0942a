//! Named color palettes.
//!
//! Palettes are static configuration: only the palette *name* is stored with a
//! drawing, and it is resolved back to colors through a [`PaletteSet`].

use super::color::Color;

/// Name of the palette used when nothing else is configured.
pub const DEFAULT_PALETTE: &str = "classic";

const CLASSIC: [&str; 8] = [
    "#000000", "#ff4500", "#ff0000", "#8a2be2", "#0066ff", "#00ff00", "#ffff00", "#ffffff",
];

const PASTEL: [&str; 8] = [
    "#ffb3ba", "#ffdfba", "#ffffba", "#baffc9", "#bae1ff", "#d7baff", "#f4f4f4", "#5b5b5b",
];

const GAMEBOY: [&str; 4] = ["#0f380f", "#306230", "#8bac0f", "#9bbc0f"];

const GRAYSCALE: [&str; 6] = [
    "#000000", "#333333", "#666666", "#999999", "#cccccc", "#ffffff",
];

/// An ordered, named list of colors. Cell value `k` refers to `colors[k - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Builds a palette from hex strings, skipping entries that fail to parse.
    ///
    /// Returns the palette together with the rejected entries so callers can
    /// report them.
    pub fn from_hex_list<S: AsRef<str>>(name: impl Into<String>, hex: &[S]) -> (Self, Vec<String>) {
        let mut colors = Vec::with_capacity(hex.len());
        let mut rejected = Vec::new();
        for entry in hex {
            match Color::from_hex(entry.as_ref()) {
                Some(color) => colors.push(color),
                None => rejected.push(entry.as_ref().to_string()),
            }
        }
        (Self::new(name, colors), rejected)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at a zero-based palette index.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Color for a stored cell value; `None` for empty cells and for values
    /// beyond this palette.
    pub fn color_for_cell(&self, value: u32) -> Option<Color> {
        let index = usize::try_from(value).ok()?.checked_sub(1)?;
        self.get(index)
    }
}

/// The configured set of palettes, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSet {
    palettes: Vec<Palette>,
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PaletteSet {
    /// The palettes that ship with the editor.
    pub fn builtin() -> Self {
        let builtin = |name: &str, hex: &[&str]| Palette::from_hex_list(name, hex).0;
        Self {
            palettes: vec![
                builtin(DEFAULT_PALETTE, &CLASSIC[..]),
                builtin("pastel", &PASTEL[..]),
                builtin("gameboy", &GAMEBOY[..]),
                builtin("grayscale", &GRAYSCALE[..]),
            ],
        }
    }

    /// Adds a palette, replacing any existing palette with the same name.
    ///
    /// Empty palettes are ignored; returns whether the set changed.
    pub fn insert(&mut self, palette: Palette) -> bool {
        if palette.is_empty() {
            return false;
        }
        match self.palettes.iter_mut().find(|p| p.name == palette.name) {
            Some(existing) => *existing = palette,
            None => self.palettes.push(palette),
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolves a palette name, falling back to the default palette (and then
    /// the first configured one) for unknown names.
    pub fn resolve(&self, name: &str) -> Option<&Palette> {
        self.get(name)
            .or_else(|| self.get(DEFAULT_PALETTE))
            .or_else(|| self.palettes.first())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
