//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Rgba;

/// Black hole size class. Each class maps to a fixed preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlackHoleClass {
    #[default]
    Stellar,
    Intermediate,
    Supermassive,
}

/// Physical and visual parameters of a black hole class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHolePreset {
    pub mass: f64,
    pub radius: f64,
    pub event_horizon_color: Rgba,
}

const STELLAR: BlackHolePreset = BlackHolePreset {
    mass: 10.0,
    radius: 30.0,
    event_horizon_color: Rgba::new(255, 255, 0, 0.8),
};

const INTERMEDIATE: BlackHolePreset = BlackHolePreset {
    mass: 100.0,
    radius: 50.0,
    event_horizon_color: Rgba::new(255, 215, 0, 0.8),
};

const SUPERMASSIVE: BlackHolePreset = BlackHolePreset {
    mass: 1_000_000.0,
    radius: 150.0,
    event_horizon_color: Rgba::new(255, 165, 0, 0.8),
};

impl BlackHoleClass {
    pub fn preset(self) -> BlackHolePreset {
        match self {
            BlackHoleClass::Stellar => STELLAR,
            BlackHoleClass::Intermediate => INTERMEDIATE,
            BlackHoleClass::Supermassive => SUPERMASSIVE,
        }
    }

    /// Look up a class by name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "stellar" => Some(BlackHoleClass::Stellar),
            "intermediate" => Some(BlackHoleClass::Intermediate),
            "supermassive" => Some(BlackHoleClass::Supermassive),
            _ => None,
        }
    }

    /// Look up a class by name, falling back to `Stellar`.
    pub fn parse(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

/// Keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Map a symbolic key name such as `ArrowUp` to a key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// Steering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    /// Counter-clockwise on screen.
    Left,
    /// Clockwise on screen.
    Right,
}

/// Thruster direction relative to the ship's heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Thrust {
    Forward,
    Backward,
}

/// Image assets the renderer may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Ship,
}

/// Load state of an asynchronously loaded asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// Which half of a ring ellipse to stroke.
/// The back half is drawn before the planet body, the front half after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EllipseHalf {
    Back,
    Front,
}
