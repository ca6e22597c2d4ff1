use std::collections::BTreeMap;

use tracing::{debug, info, trace};

use crate::color::Color;
use crate::input::InputEvent;
use crate::level::Level;
use crate::location::Location;
use crate::path::Path;
use crate::snapshot::Snapshot;

/// Owns a [`Level`] and the paths drawn on it so far.
///
/// At most one path is being dragged (the "active" path) at any time.
/// It lives apart from the completed paths until [`commit_path`](Self::commit_path) either stores or discards it.
///
/// Every operation is total: input that makes no sense for the current state is ignored rather than reported,
/// so a front end can forward raw pointer events without filtering them first.
#[derive(Clone, Debug)]
pub struct PathEngine {
    level: Level,
    completed: BTreeMap<Color, Path>,
    active: Option<Path>,
}

impl From<Level> for PathEngine {
    fn from(level: Level) -> Self {
        Self::new(level)
    }
}

impl PathEngine {
    /// Start playing `level` with nothing drawn.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            completed: BTreeMap::new(),
            active: None,
        }
    }

    /// The level being played.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Committed paths, one per solved color.
    pub fn completed(&self) -> &BTreeMap<Color, Path> {
        &self.completed
    }

    /// The committed path of `color`, if any.
    pub fn completed_path(&self, color: Color) -> Option<&Path> {
        self.completed.get(&color)
    }

    /// The path currently being dragged, if any.
    pub fn active(&self) -> Option<&Path> {
        self.active.as_ref()
    }

    /// Whether a path is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Start dragging from `location` if it is a terminus.
    ///
    /// A path already being dragged is dropped without being committed.
    /// Does nothing if `location` is not a terminus of any color.
    pub fn begin_path(&mut self, location: Location) {
        let Some(color) = self.level.terminus_at(location) else {
            trace!(%location, "pointer down away from any terminus");
            return;
        };

        if let Some(dropped) = self.active.replace(Path::new(color, location)) {
            debug!(color = %dropped.color(), len = dropped.len(), "dropped unfinished path");
        }
        debug!(%color, %location, "began path");
    }

    /// Grow the active path by `location`.
    ///
    /// Ignored while idle, and whenever `location` is off the grid, already on the active path,
    /// or not a 4-neighbour of the active path's last location.
    pub fn extend_path(&mut self, location: Location) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if !self.level.contains(location)
            || active.contains(location)
            || !self.level.adjacent(active.last(), location) {
            return;
        }

        active.push(location);
        trace!(color = %active.color(), %location, len = active.len(), "extended path");
    }

    /// Finish dragging.
    ///
    /// The active path is stored as the completed path of its color, replacing any earlier one,
    /// if it ends on the terminus it did not start from. Otherwise it is discarded.
    /// Either way the engine is idle afterwards.
    pub fn commit_path(&mut self) {
        let Some(path) = self.active.take() else {
            return;
        };

        let color = path.color();
        let reached_partner = self.level.partner_of(color, path.first()) == Some(path.last());
        if !reached_partner || path.len() < 2 {
            debug!(%color, len = path.len(), last = %path.last(), "discarded path");
            return;
        }

        debug!(%color, len = path.len(), "committed path");
        if self.completed.insert(color, path).is_some() {
            debug!(%color, "replaced earlier path");
        }

        if self.is_solved() {
            info!(flows = self.level.flow_count(), "puzzle solved");
        }
    }

    /// Whether every color of the level has a completed path.
    pub fn is_solved(&self) -> bool {
        self.completed.len() == self.level.flow_count()
    }

    /// `(completed flows, total flows)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.completed.len(), self.level.flow_count())
    }

    /// Forget every drawn path, keeping the level.
    pub fn reset(&mut self) {
        debug!(completed = self.completed.len(), dragging = self.active.is_some(), "reset");
        self.completed.clear();
        self.active = None;
    }

    /// Apply one input event, mapping it onto exactly one operation.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(location) => self.begin_path(location),
            InputEvent::PointerMove(location) => self.extend_path(location),
            InputEvent::PointerUp => self.commit_path(),
            InputEvent::Restart => self.reset(),
        }
    }

    /// Read-only view for one presentation refresh.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.level, &self.completed, self.active.as_ref())
    }
}
