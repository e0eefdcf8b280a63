//! Key state owned by the engine.
//!
//! The host's input adapter writes transitions as they arrive; the update
//! phase copies the state once per frame. Last writer wins per key.

use serde::{Deserialize, Serialize};

use voidrunner_core::commands::InputEvent;
use voidrunner_core::enums::Key;

/// Which control keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn apply(&mut self, event: InputEvent) {
        let held = event.is_pressed();
        match event.key() {
            Key::ArrowUp => self.up = held,
            Key::ArrowDown => self.down = held,
            Key::ArrowLeft => self.left = held,
            Key::ArrowRight => self.right = held,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::ArrowUp => self.up,
            Key::ArrowDown => self.down,
            Key::ArrowLeft => self.left,
            Key::ArrowRight => self.right,
        }
    }
}
