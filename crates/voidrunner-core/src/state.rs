//! Game state snapshot: the visible state reported to the host each frame.

use serde::{Deserialize, Serialize};

use crate::components::Ship;
use crate::types::{SimTime, Vec2, Viewport};

/// Complete game state after a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub ship: ShipView,
    /// Top-left of the visible area in world coordinates.
    pub camera: Vec2,
    pub viewport: Viewport,
    pub hud: HudView,
    /// Planets that passed viewport culling.
    pub visible_planets: usize,
    /// Asteroids and black holes that passed viewport culling.
    pub visible_objects: usize,
}

/// Ship state for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f64,
    pub speed: f64,
    pub disabled: bool,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        Self {
            position: ship.position,
            velocity: ship.velocity,
            angle: ship.angle,
            speed: ship.speed_magnitude(),
            disabled: ship.is_disabled(),
        }
    }
}

/// Heads-up display readout. Integer percentages of current over max.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    pub fuel_pct: i64,
    pub shields_pct: i64,
    pub health_pct: i64,
}

impl HudView {
    pub fn from_ship(ship: &Ship) -> Self {
        Self {
            fuel_pct: percent(ship.fuel, ship.max_fuel),
            shields_pct: percent(ship.shields, ship.max_shields),
            health_pct: percent(ship.health, ship.max_health),
        }
    }

    /// The three HUD lines, top to bottom.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Fuel: {}%", self.fuel_pct),
            format!("Shields: {}%", self.shields_pct),
            format!("Health: {}%", self.health_pct),
        ]
    }
}

fn percent(current: f64, max: f64) -> i64 {
    if max <= 0.0 {
        return 0;
    }
    (current / max * 100.0).round() as i64
}
