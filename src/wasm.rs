//! Browser bindings, available with the `wasm` feature.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::level::{Level, LevelConfig};
use crate::location::Location;
use crate::{InputEvent, PathEngine};

/// Browser-facing wrapper around a [`PathEngine`].
///
/// The page owns the event loop and drawing; it converts pixels to `(row, col)` and forwards pointer events here.
#[wasm_bindgen]
pub struct FlowGame {
    engine: PathEngine,
}

#[wasm_bindgen]
impl FlowGame {
    /// Load a level from its JSON [`LevelConfig`] form.
    #[wasm_bindgen(constructor)]
    pub fn new(level_json: &str) -> Result<FlowGame, JsError> {
        let config: LevelConfig = serde_json::from_str(level_json)?;
        let level = Level::try_from(config)?;
        Ok(Self { engine: PathEngine::new(level) })
    }

    /// Play the bundled 5x5 level.
    pub fn classic() -> FlowGame {
        Self { engine: PathEngine::new(Level::classic()) }
    }

    /// Press at `(row, col)`.
    pub fn pointer_down(&mut self, row: usize, col: usize) {
        self.engine.handle(InputEvent::PointerDown(Location(row, col)));
    }

    /// Drag over `(row, col)`.
    pub fn pointer_move(&mut self, row: usize, col: usize) {
        self.engine.handle(InputEvent::PointerMove(Location(row, col)));
    }

    /// Release the pointer.
    pub fn pointer_up(&mut self) {
        self.engine.handle(InputEvent::PointerUp);
    }

    /// Clear every drawn path.
    pub fn restart(&mut self) {
        self.engine.handle(InputEvent::Restart);
    }

    /// Whether every flow is connected.
    pub fn is_solved(&self) -> bool {
        self.engine.is_solved()
    }

    /// Name of the color being dragged, for highlighting the board.
    pub fn active_color(&self) -> Option<String> {
        self.engine.active().map(|path| path.color().to_string())
    }

    /// Names of the colors with a committed path, in palette order.
    pub fn completed_colors(&self) -> Array {
        self.engine.completed().keys()
            .map(|color| JsValue::from_str(<&'static str>::from(*color)))
            .collect()
    }

    /// Text rendering of the board, one row per line.
    pub fn render(&self) -> String {
        self.engine.snapshot().to_string()
    }
}
