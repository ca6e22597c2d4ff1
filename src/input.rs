use crate::location::Location;

/// Input as produced by whatever polls the pointer, already translated into grid locations.
///
/// Each event maps onto one [`PathEngine`](crate::PathEngine) operation through [`PathEngine::handle`](crate::PathEngine::handle).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InputEvent {
    /// Press on a location; starts a path if it is a terminus.
    PointerDown(Location),
    /// Pointer dragged over a location while pressed; ignored while no path is active.
    PointerMove(Location),
    /// Pointer released; commits or discards the active path.
    PointerUp,
    /// Clear the board, typically after a win.
    Restart,
}
