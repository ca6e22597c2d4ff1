#![warn(missing_docs)]

//! # `flowpath`
//!
//! The interactive core of [Flow Free](https://en.wikipedia.org/wiki/Flow_Free): connect every pair of colored termini on a grid by dragging paths between them.
//! Begin by building a [`Level`] with a [`LevelBuilder`], from a serialized [`LevelConfig`], or take the bundled [`Level::classic()`].
//! Hand it to a [`PathEngine`], forward pointer input to it as [`InputEvent`]s (or call its operations directly),
//! and draw whatever [`PathEngine::snapshot`] shows after each event.
//!
//! # Internals
//! A level is validated once, when it is built; a malformed level never reaches the engine.
//! At that point the grid is expressed as an undirected graph whose vertices are locations and whose edges join 4-neighbours,
//! and each terminus location is indexed by its color so a press resolves to a flow in constant time.
//!
//! The engine then follows a small state machine:
//! 1. Idle. A press on a terminus starts an active path of that color; a press anywhere else does nothing.
//! 2. Dragging. Each location the pointer passes over is appended if it is an unvisited graph neighbour of the path's last location, and ignored otherwise.
//! Releasing the pointer stores the path as its color's completed path if it ended on the *other* terminus of that color, and discards it if not.
//! Either way the engine returns to idle.
//!
//! The puzzle is solved once every color has a completed path. Paths of different colors are allowed to cross.

pub use builder::{LevelBuilder, LevelError, LevelInvalidReason};
pub use cell::{Cell, FrozenCell};
pub use color::Color;
pub use engine::PathEngine;
pub use input::InputEvent;
pub use level::{FlowConfig, Level, LevelConfig};
pub use location::{Dimension, Location};
pub use path::Path;
pub use snapshot::Snapshot;

pub mod builder;
pub(crate) mod cell;
pub(crate) mod color;
pub(crate) mod engine;
pub(crate) mod input;
pub(crate) mod level;
pub(crate) mod location;
pub(crate) mod path;
pub mod shape;
pub(crate) mod snapshot;
#[cfg(feature = "wasm")]
pub mod wasm;
