use std::{fmt, str::FromStr};

use crate::FixtureError;

/// Colors a fixture can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
    Gray,
    Orange,
    Purple,
    Cyan,
    Magenta,
    Pink,
}

impl NamedColor {
    pub const ALL: [NamedColor; 12] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Gray,
        NamedColor::Orange,
        NamedColor::Purple,
        NamedColor::Cyan,
        NamedColor::Magenta,
        NamedColor::Pink,
    ];

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
            NamedColor::Orange => "orange",
            NamedColor::Purple => "purple",
            NamedColor::Cyan => "cyan",
            NamedColor::Magenta => "magenta",
            NamedColor::Pink => "pink",
        }
    }

    /// CSS/X11 RGB triple. Note `green` is the CSS `(0, 128, 0)`, not full green.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            NamedColor::Red => [255, 0, 0],
            NamedColor::Green => [0, 128, 0],
            NamedColor::Blue => [0, 0, 255],
            NamedColor::Yellow => [255, 255, 0],
            NamedColor::Black => [0, 0, 0],
            NamedColor::White => [255, 255, 255],
            NamedColor::Gray => [128, 128, 128],
            NamedColor::Orange => [255, 165, 0],
            NamedColor::Purple => [128, 0, 128],
            NamedColor::Cyan => [0, 255, 255],
            NamedColor::Magenta => [255, 0, 255],
            NamedColor::Pink => [255, 192, 203],
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "grey" {
            return Ok(NamedColor::Gray);
        }
        NamedColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| FixtureError::UnknownColor(s.to_string()))
    }
}
