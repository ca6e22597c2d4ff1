//! Grid geometry: step directions and how they move between [`Location`]s.

use std::hash::Hash;

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::location::Location;

/// Functionality that must be implemented on a case-by-case basis for any grid shape.
///
/// [`SquareStep`] is the built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the grid; callers check it against the level.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions should be those which, upon stepping from one location to another, cause the destination location to be indexed higher than the origin location.
    /// For example, for [`SquareStep`] and given the row-major ordering of the cell array, [`Down`](SquareStep::Down) and [`Right`](SquareStep::Right) are forward directions.
    const FORWARD_VARIANTS: &'static [Self];
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
    /// Dump the specified [`ndarray::Array2`], laying out individual characters based on the geometry of the shape [`Self`].
    fn print(board: Array2<char>) -> String;
}

/// The square cell type and rectangular grid shape of Flow Free.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
        }
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn print(board: Array2<char>) -> String {
        let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

        for row in board.rows() {
            for col in row {
                out.push(*col);
            }
            out.push('\n');
        }

        out
    }
}

/// Functionality on top of [`Step`] with identical implementation across all shapes.
pub trait BoardShape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// Convert this [`Self`] to a "forward" direction, if it is not already such a direction.
    ///
    /// For the definition of forward directions, see [`Step::FORWARD_VARIANTS`].
    fn ensure_forward(&self) -> Self;
}

impl<Sh> BoardShape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn ensure_forward(&self) -> Self {
        match Self::FORWARD_VARIANTS.contains(self) {
            true => *self,
            false => self.invert(),
        }
    }
}
