//! Fixed drawing color palette.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color from the overlay's fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
}

impl PaletteColor {
    /// Every palette entry, in picker order.
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Purple,
        PaletteColor::White,
    ];

    /// Lowercase identifier, e.g. `"black"`.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
            PaletteColor::White => "white",
        }
    }

    /// RGBA value of this entry.
    pub fn color(self) -> Color {
        let (r, g, b) = match self {
            PaletteColor::Black => (0, 0, 0),
            PaletteColor::Red => (239, 68, 68),
            PaletteColor::Orange => (249, 115, 22),
            PaletteColor::Yellow => (234, 179, 8),
            PaletteColor::Green => (34, 197, 94),
            PaletteColor::Blue => (59, 130, 246),
            PaletteColor::Purple => (168, 85, 247),
            PaletteColor::White => (255, 255, 255),
        };
        Color::from_rgba8(r, g, b, 255)
    }

    /// CSS hex form (`#rrggbb`) of this entry.
    pub fn hex(self) -> String {
        css_color(self.color())
    }
}

/// CSS form of a color: `#rrggbb` when opaque, `rgba(...)` otherwise.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PaletteColor::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| format!("unknown palette color: {s}"))
    }
}

impl From<PaletteColor> for Color {
    fn from(color: PaletteColor) -> Self {
        color.color()
    }
}
