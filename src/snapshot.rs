use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::cell::{Cell, FrozenCell};
use crate::color::Color;
use crate::level::Level;
use crate::path::Path;
use crate::shape::{SquareStep, Step};

/// A read-only view of a [`PathEngine`](crate::PathEngine), taken once per presentation refresh.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    level: &'a Level,
    completed: &'a BTreeMap<Color, Path>,
    active: Option<&'a Path>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(level: &'a Level, completed: &'a BTreeMap<Color, Path>, active: Option<&'a Path>) -> Self {
        Self { level, completed, active }
    }

    /// The level being played.
    pub fn level(&self) -> &'a Level {
        self.level
    }

    /// Committed paths, keyed by color.
    pub fn completed(&self) -> &'a BTreeMap<Color, Path> {
        self.completed
    }

    /// The path being dragged, if any.
    pub fn active(&self) -> Option<&'a Path> {
        self.active
    }

    /// Same as [`PathEngine::is_solved`](crate::PathEngine::is_solved) at the time the snapshot was taken.
    pub fn is_solved(&self) -> bool {
        self.completed.len() == self.level.flow_count()
    }

    /// Lay every path out on the grid.
    ///
    /// Completed paths go down in palette order and the active path last, so where paths of different colors
    /// cross, the later one is what the location shows. Termini always stay termini of their own color.
    pub fn to_array(&self) -> Array2<FrozenCell> {
        let mut ret: Array2<FrozenCell> = self.level.blank_array();

        for (location, color) in &self.level.terminus_lookup {
            ret[location.as_index()].cell_type = Cell::Terminus { color: *color };
        }

        for path in self.completed.values().chain(self.active) {
            for location in path {
                let cell = &mut ret[location.as_index()];
                cell.exits.clear();
                if !matches!(cell.cell_type, Cell::Terminus { .. }) {
                    cell.cell_type = Cell::Path { color: path.color() };
                }
            }

            for (from, to) in path.steps() {
                if let Some(direction) = self.level.step_between(from, to) {
                    ret[from.as_index()].exits.insert(direction);
                    ret[to.as_index()].exits.insert(direction.invert());
                }
            }
        }

        ret
    }
}

impl Display for Snapshot<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", SquareStep::print(self.to_array().map(|cell| cell.cell_type.glyph())))
    }
}
