use std::collections::HashSet;

use crate::color::Color;
use crate::shape::SquareStep;

/// What occupies a single location of a rendered grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// One of the two fixed endpoints of `color`.
    Terminus { color: Color },
    /// A location some drawn path of `color` passes through.
    Path { color: Color },
    /// Nothing drawn here.
    #[default]
    Empty,
}

impl Cell {
    /// Text rendering of this cell: termini uppercase, paths lowercase, `.` otherwise.
    pub fn glyph(&self) -> char {
        match self {
            Self::Terminus { color } => color.letter().to_ascii_uppercase(),
            Self::Path { color } => color.letter().to_ascii_lowercase(),
            Self::Empty => '.',
        }
    }
}

/// Cells, frozen for output or printing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FrozenCell {
    /// Directions in which a drawn path leaves this location.
    pub exits: HashSet<SquareStep>,
    /// What the location shows.
    pub cell_type: Cell,
}
