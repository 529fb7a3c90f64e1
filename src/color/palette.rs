//! Built-in color palette used by tech files.
//!
//! Names are matched exactly and case-sensitively. The table is fixed at
//! compile time and exposes no way to mutate it.

use super::Rgb;

/// A named palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    /// Key matched against cell values.
    pub name: &'static str,
    /// Channel values for this color.
    pub rgb: Rgb,
}

const fn entry(name: &'static str, red: u8, green: u8, blue: u8) -> ColorEntry {
    ColorEntry {
        name,
        rgb: Rgb::new(red, green, blue),
    }
}

/// Palette colors in declaration order.
pub const PALETTE: &[ColorEntry] = &[
    entry("green", 0, 204, 102),
    entry("red", 255, 0, 0),
    entry("yellow", 255, 255, 0),
    entry("tan", 255, 230, 191),
    entry("blue", 0, 0, 255),
    entry("gold", 217, 204, 0),
    entry("magenta", 255, 0, 255),
    entry("orange", 255, 128, 0),
    entry("lilac", 255, 180, 250),
    entry("purple", 153, 0, 230),
    entry("turquoise", 43, 206, 231),
    entry("pink", 255, 191, 242),
    entry("maroon", 230, 31, 13),
    entry("lightBlue", 51, 179, 255),
    entry("violet", 94, 0, 230),
    // Not pure white so it stays visible on a light background
    entry("white", 240, 240, 240),
];

/// Look up a color by its exact name.
///
/// No trimming or case folding is applied: `"Green"` and `" green"` are not
/// palette colors.
pub fn lookup(name: &str) -> Option<Rgb> {
    PALETTE
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.rgb)
}
