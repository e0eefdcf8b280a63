//! Keyboard adapter: turns macroquad key transitions into `InputEvent`s.

use macroquad::input::{is_key_pressed, is_key_released, KeyCode};

use voidrunner_core::commands::InputEvent;
use voidrunner_core::enums::Key;

/// Physical keys and the simulation keys they drive.
pub const BINDINGS: [(KeyCode, Key); 4] = [
    (KeyCode::Up, Key::ArrowUp),
    (KeyCode::Down, Key::ArrowDown),
    (KeyCode::Left, Key::ArrowLeft),
    (KeyCode::Right, Key::ArrowRight),
];

pub fn key_for(code: KeyCode) -> Option<Key> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|&(_, key)| key)
}

/// Transitions since the previous frame, presses before releases.
pub fn poll() -> Vec<InputEvent> {
    let mut events = Vec::new();
    for (code, key) in BINDINGS {
        if is_key_pressed(code) {
            events.push(InputEvent::KeyDown(key));
        }
    }
    for (code, key) in BINDINGS {
        if is_key_released(code) {
            events.push(InputEvent::KeyUp(key));
        }
    }
    events
}
