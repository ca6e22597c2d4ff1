use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};
use unordered_pair::UnorderedPair;

use crate::builder::{LevelBuilder, LevelError};
use crate::cell::Cell;
use crate::color::Color;
use crate::location::{Dimension, Location};
use crate::shape::{SquareStep, Step};

/// An immutable puzzle: grid dimensions and one pair of termini per [`Color`].
///
/// [`Level`]s can only be produced by a [`LevelBuilder`] (directly, via [`LevelConfig`], or via [`Level::classic`]),
/// so every [`Level`] in existence has passed validation.
#[derive(Clone)]
pub struct Level {
    // 4-neighbour adjacency, edges labelled with the direction away from the lower indexed end
    pub(crate) graph: UnGraphMap<Location, SquareStep>,
    // rows, cols
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) termini: BTreeMap<Color, UnorderedPair<Location>>,
    pub(crate) terminus_lookup: HashMap<Location, Color>,
}

impl Level {
    /// The 5x5 level the game ships with.
    pub fn classic() -> Self {
        LevelBuilder::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
            .add_termini(Color::Red, (Location(0, 0), Location(0, 4)))
            .add_termini(Color::Blue, (Location(1, 1), Location(3, 1)))
            .add_termini(Color::Green, (Location(1, 4), Location(3, 3)))
            .add_termini(Color::Orange, (Location(4, 0), Location(2, 3)))
            .add_termini(Color::Yellow, (Location(4, 4), Location(3, 4)))
            .build()
            .expect("the classic level is well formed")
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Every color with termini on this level, in palette order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.termini.keys().copied()
    }

    /// Number of flows, i.e. how many completed paths solve the level.
    pub fn flow_count(&self) -> usize {
        self.termini.len()
    }

    /// The two termini of `color`, or [`None`] if the level does not use it.
    pub fn termini(&self, color: Color) -> Option<(Location, Location)> {
        self.termini.get(&color).map(|UnorderedPair(a, b)| (*a, *b))
    }

    /// The color whose terminus sits at `location`, if any.
    pub fn terminus_at(&self, location: Location) -> Option<Color> {
        self.terminus_lookup.get(&location).copied()
    }

    /// Given one terminus of `color`, the terminus a path starting there has to reach.
    pub fn partner_of(&self, color: Color, location: Location) -> Option<Location> {
        let UnorderedPair(a, b) = self.termini.get(&color)?;
        match location {
            l if l == *a => Some(*b),
            l if l == *b => Some(*a),
            _ => None,
        }
    }

    /// Whether `location` lies on the grid.
    pub fn contains(&self, location: Location) -> bool {
        self.graph.contains_node(location)
    }

    /// Whether a path may step directly from `a` to `b`.
    pub fn adjacent(&self, a: Location, b: Location) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// The direction of the step from `from` to its neighbour `to`, read off the edge label.
    pub(crate) fn step_between(&self, from: Location, to: Location) -> Option<SquareStep> {
        let forward = *self.graph.edge_weight(from, to)?;
        match forward.attempt_from(from) == to {
            true => Some(forward),
            false => Some(forward.invert()),
        }
    }

    pub(crate) fn blank_array<T: Clone + Default>(&self) -> Array2<T> {
        Array2::from_elem((self.dims.0.get(), self.dims.1.get()), T::default())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("dims", &self.dims)
            .field("termini", &self.termini.iter().map(|(color, UnorderedPair(a, b))| (color, a, b)).collect_vec())
            .finish()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut cells: Array2<Cell> = self.blank_array();
        for (location, color) in &self.terminus_lookup {
            cells[location.as_index()] = Cell::Terminus { color: *color };
        }

        write!(f, "{}", SquareStep::print(cells.map(Cell::glyph)))
    }
}

/// A single flow within a [`LevelConfig`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Color of the flow.
    pub color: Color,
    /// Should hold exactly two locations; anything else is rejected on conversion.
    pub termini: Vec<Location>,
}

/// Serializable description of a level, e.g.
/// `{"rows": 1, "cols": 2, "flows": [{"color": "Red", "termini": [[0, 0], [0, 1]]}]}`.
///
/// Convert it with [`Level::try_from`], which runs it through a [`LevelBuilder`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Row count.
    pub rows: Dimension,
    /// Column count.
    pub cols: Dimension,
    /// One entry per color.
    pub flows: Vec<FlowConfig>,
}

impl TryFrom<LevelConfig> for Level {
    type Error = LevelError;

    fn try_from(config: LevelConfig) -> Result<Self, Self::Error> {
        let mut builder = LevelBuilder::with_dims((config.rows, config.cols));
        for flow in &config.flows {
            builder.add_flow(flow.color, &flow.termini);
        }

        builder.build()
    }
}

impl From<&Level> for LevelConfig {
    fn from(level: &Level) -> Self {
        Self {
            rows: level.dims.0,
            cols: level.dims.1,
            flows: level.termini.iter()
                .map(|(color, UnorderedPair(a, b))| FlowConfig { color: *color, termini: vec![*a, *b] })
                .collect(),
        }
    }
}
