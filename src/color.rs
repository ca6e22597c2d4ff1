use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr, VariantArray};

/// The palette of flows a level may use.
///
/// Colors are opaque identifiers to the engine; the letter and RGB value exist for front ends only.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[derive(VariantArray, Display, IntoStaticStr, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Cyan,
    Magenta,
    Purple,
    White,
}

impl Color {
    /// The letter used for this color in text renderings.
    /// Termini print it uppercase, path cells lowercase.
    pub fn letter(&self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Cyan => 'C',
            Self::Magenta => 'M',
            Self::Purple => 'P',
            Self::White => 'W',
        }
    }

    /// Display color as an `(r, g, b)` triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 80, 80),
            Self::Green => (80, 220, 150),
            Self::Blue => (80, 140, 255),
            Self::Yellow => (255, 230, 120),
            Self::Orange => (255, 160, 80),
            Self::Cyan => (90, 220, 235),
            Self::Magenta => (235, 90, 220),
            Self::Purple => (150, 90, 230),
            Self::White => (240, 240, 240),
        }
    }
}
