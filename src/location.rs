use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;
use serde::{Deserialize, Serialize};

pub(crate) type Coord = usize;
/// A nonzero grid extent, i.e. a number of rows or columns.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
/// A location `(row, col)` on a level. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies inside a grid of `dims`, given as `(rows, cols)`.
    pub fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }

    /// Taxicab distance between two locations; 4-neighbours are exactly 1 apart.
    pub fn manhattan_distance(&self, other: Location) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
