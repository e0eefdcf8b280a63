//! Input commands sent from the host to the simulation.
//!
//! Events may arrive at any point between frames. The engine folds them
//! into its input state; the update phase reads that state once per frame.

use serde::{Deserialize, Serialize};

use crate::enums::Key;

/// A key transition reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "key")]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// Build an event from a symbolic key name.
    /// Keys the simulation does not use yield `None`.
    pub fn from_key_name(name: &str, pressed: bool) -> Option<Self> {
        let key = Key::from_name(name)?;
        Some(if pressed {
            InputEvent::KeyDown(key)
        } else {
            InputEvent::KeyUp(key)
        })
    }

    pub fn key(&self) -> Key {
        match *self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, InputEvent::KeyDown(_))
    }
}
