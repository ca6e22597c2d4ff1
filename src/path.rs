use std::slice::Iter;

use itertools::Itertools;

use crate::color::Color;
use crate::location::Location;

/// An ordered run of locations drawn for one [`Color`].
///
/// Only the [`PathEngine`](crate::PathEngine) grows paths, so every [`Path`] handed out starts at a terminus of its color,
/// never repeats a location, and only ever steps between 4-neighbours.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Path {
    color: Color,
    locations: Vec<Location>,
}

impl Path {
    pub(crate) fn new(color: Color, start: Location) -> Self {
        Self {
            color,
            locations: vec![start],
        }
    }

    pub(crate) fn push(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// The flow this path belongs to.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Every location in drawing order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Iterate locations in drawing order.
    pub fn iter(&self) -> Iter<'_, Location> {
        self.locations.iter()
    }

    /// The terminus this path was started from.
    pub fn first(&self) -> Location {
        self.locations[0]
    }

    /// Where the path currently ends.
    pub fn last(&self) -> Location {
        self.locations[self.locations.len() - 1]
    }

    /// Number of locations, termini included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false`: a path holds at least the terminus it started from.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Whether the path passes through `location`.
    pub fn contains(&self, location: Location) -> bool {
        self.locations.contains(&location)
    }

    /// Consecutive `(from, to)` steps along the path.
    pub fn steps(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.locations.iter().copied().tuple_windows()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Location;
    type IntoIter = Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
