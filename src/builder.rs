//! Validation and construction of [`Level`]s.

use std::collections::{BTreeMap, HashMap};
use std::num::NonZero;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use thiserror::Error;
use tracing::{debug, warn};
use unordered_pair::UnorderedPair;

use crate::color::Color;
use crate::level::Level;
use crate::location::{Dimension, Location};
use crate::shape::{BoardShape, SquareStep};

/// The largest number of locations a level may have.
pub const MAX_CELLS: usize = 1 << 16;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum LevelInvalidReason {
    /// The grid has more than [`MAX_CELLS`] locations.
    #[error("a {rows}x{cols} grid exceeds the limit of {} locations", MAX_CELLS)]
    TooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A terminus was placed outside the bounds given by `dims` on the builder.
    #[error("{color} terminus at {location} lies outside the grid")]
    OutOfBounds {
        /// Flow being added.
        color: Color,
        /// The offending terminus.
        location: Location,
    },
    /// Both termini of a color were placed on the same location.
    #[error("both {color} termini are at {location}")]
    DegenerateTermini {
        /// Flow being added.
        color: Color,
        /// Where both termini sit.
        location: Location,
    },
    /// A terminus was placed where another terminus already sits.
    #[error("{color} terminus at {location} overlaps another terminus")]
    OverlappingTermini {
        /// The color being added, not the one already there.
        color: Color,
        /// The contested location.
        location: Location,
    },
    /// A color was given a second pair of termini.
    #[error("{color} was given termini more than once")]
    DuplicateColor {
        /// The repeated color.
        color: Color,
    },
    /// A color was described with some number of termini other than two.
    #[error("{color} has {count} termini, expected 2")]
    WrongTerminusCount {
        /// Flow being added.
        color: Color,
        /// How many termini were given.
        count: usize,
    },
    /// The level has no flows at all and would count as solved before any move.
    #[error("level has no flows")]
    NoTermini,
}

/// Why a level was refused.
///
/// The builder stops at the first problem it finds, so this holds exactly one reason.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid level: {}", join_reasons(.0))]
pub struct LevelError(pub Vec<LevelInvalidReason>);

fn join_reasons(reasons: &[LevelInvalidReason]) -> String {
    reasons.iter().join("; ")
}

/// A builder for rectangular levels, i.e. the square-celled grids found in Flow Free.
///
/// The builder mutates itself while building but can be [`Clone`]d to save its state at some point.
/// Once a problem has been recorded every further mutation is ignored; [`Self::build`] reports what went wrong.
#[derive(Clone)]
pub struct LevelBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    // insertion order, so pop_termini knows what came last
    termini: Vec<(Color, UnorderedPair<Location>)>,
    invalid_reasons: Vec<LevelInvalidReason>,
}

impl Default for LevelBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl LevelBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    ///
    /// Grids with more than [`MAX_CELLS`] locations leave the builder invalid from the start.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        let mut builder = Self {
            dims,
            termini: Default::default(),
            invalid_reasons: Default::default(),
        };

        let (rows, cols) = (dims.0.get(), dims.1.get());
        if rows.checked_mul(cols).map_or(true, |cells| cells > MAX_CELLS) {
            builder.invalidate(LevelInvalidReason::TooLarge { rows, cols });
        }

        builder
    }

    fn invalidate(&mut self, reason: LevelInvalidReason) -> &mut Self {
        warn!(%reason, "level rejected");
        self.invalid_reasons.push(reason);
        self
    }

    fn occupant(&self, location: Location) -> Option<Color> {
        self.termini.iter()
            .find(|(_, UnorderedPair(a, b))| *a == location || *b == location)
            .map(|(color, _)| *color)
    }

    /// Add termini or "flow endpoints" for `color`. The order in which `locations` are specified does not matter.
    ///
    /// Invalidates the builder if either location is out of bounds, if both are the same location,
    /// if `color` already has termini, or if either location already holds a terminus.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_termini(&mut self, color: Color, locations: (Location, Location)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !location.within(self.dims) {
                return self.invalidate(LevelInvalidReason::OutOfBounds { color, location });
            }
        }

        if locations.0 == locations.1 {
            return self.invalidate(LevelInvalidReason::DegenerateTermini { color, location: locations.0 });
        }

        if self.termini.iter().any(|(existing, _)| *existing == color) {
            return self.invalidate(LevelInvalidReason::DuplicateColor { color });
        }

        for location in [locations.0, locations.1] {
            if self.occupant(location).is_some() {
                return self.invalidate(LevelInvalidReason::OverlappingTermini { color, location });
            }
        }

        self.termini.push((color, UnorderedPair::from(locations)));
        self
    }

    /// Like [`Self::add_termini`], but takes any number of locations and invalidates the builder unless there are exactly two.
    pub fn add_flow(&mut self, color: Color, locations: &[Location]) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match locations {
            [a, b] => self.add_termini(color, (*a, *b)),
            _ => self.invalidate(LevelInvalidReason::WrongTerminusCount { color, count: locations.len() }),
        }
    }

    /// Remove the most recently added pair of termini.
    ///
    /// If the builder is in an invalid state or no termini are present, this function does nothing.
    pub fn pop_termini(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.termini.pop();
        self
    }

    /// Check the validity of this builder, ensuring no [`LevelInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<LevelInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<LevelInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Level`].
    /// If the builder is invalid for any reason, the [`LevelError`] lists why.
    pub fn build(&self) -> Result<Level, LevelError> {
        if !self.invalid_reasons.is_empty() {
            return Err(LevelError(self.invalid_reasons.clone()));
        }

        if self.termini.is_empty() {
            warn!(reason = %LevelInvalidReason::NoTermini, "level rejected");
            return Err(LevelError(vec![LevelInvalidReason::NoTermini]));
        }

        // with_dims bounds rows * cols, so none of this overflows
        let (rows, cols) = (self.dims.0.get(), self.dims.1.get());
        let mut graph = UnGraphMap::with_capacity(
            rows * cols,
            // "horizontal" edges
            (cols - 1) * rows
                // "vertical" edges
                + (rows - 1) * cols,
        );

        for (row, col) in (0..rows).cartesian_product(0..cols) {
            let location = Location(row, col);
            graph.add_node(location);

            for (direction, neighbor) in SquareStep::neighbors_of(location) {
                if neighbor.within(self.dims) {
                    // edges are labelled with the direction away from the lower indexed location
                    graph.add_edge(location, neighbor, direction.ensure_forward());
                }
            }
        }

        let termini: BTreeMap<Color, UnorderedPair<Location>> = self.termini.iter().copied().collect();
        let terminus_lookup: HashMap<Location, Color> = self.termini.iter()
            .flat_map(|(color, UnorderedPair(a, b))| [(*a, *color), (*b, *color)])
            .collect();

        debug!(rows, cols, flows = termini.len(), "built level");

        Ok(Level {
            graph,
            dims: self.dims,
            termini,
            terminus_lookup,
        })
    }
}
