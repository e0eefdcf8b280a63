//! World entities.
//!
//! Components are plain data. Game logic lives in the simulation crate's
//! systems; the only behaviour here is the geometry each entity exposes
//! through [`Body`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::{Body, Rgba, Vec2};

/// Background star. Drawn with parallax, never culled, never collides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub position: Vec2,
    /// Radius in pixels, in [1, 3).
    pub size: f64,
    /// Opacity, in [0.2, 1.0).
    pub brightness: f64,
    /// Fraction of camera motion the star follows, in [0.1, 0.3).
    pub parallax_factor: f64,
}

/// Optional ring system around a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetRings {
    pub color: Rgba,
    pub width: f64,
    /// Tilt of the ring ellipse (radians).
    pub angle: f64,
}

/// Decorative planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Center of the planet.
    pub position: Vec2,
    /// Radius in [20, 100).
    pub radius: f64,
    pub color: Rgba,
    pub rings: Option<PlanetRings>,
}

impl Body for Planet {
    fn anchor(&self) -> Vec2 {
        self.position
    }

    fn extent(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }
}

/// Static rectangular obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Top-left corner.
    pub position: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Body for Asteroid {
    fn anchor(&self) -> Vec2 {
        self.position
    }

    fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Gravity source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlackHole {
    /// Center of the black hole.
    pub position: Vec2,
    pub mass: f64,
    /// Visual radius of the dark core.
    pub radius: f64,
    pub event_horizon_color: Rgba,
    /// Phase of the pulsing pull ring. Visual only.
    pub pulse_offset: f64,
}

impl BlackHole {
    /// Distance within which the black hole attracts the ship.
    pub fn pull_radius(&self) -> f64 {
        self.radius * PULL_RADIUS_FACTOR
    }
}

impl Body for BlackHole {
    fn anchor(&self) -> Vec2 {
        self.position
    }

    fn extent(&self) -> Vec2 {
        Vec2::splat(self.radius * BLACK_HOLE_EXTENT_FACTOR)
    }
}

/// Marks a world entity the ship can collide with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider;

/// The player's ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner.
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f64,
    pub height: f64,
    pub health: f64,
    pub max_health: f64,
    pub shields: f64,
    pub max_shields: f64,
    pub fuel: f64,
    pub max_fuel: f64,
    /// Orientation in radians; 0 points up the screen.
    pub angle: f64,
    /// Angular velocity from collisions (rad/frame).
    pub spin: f64,
    pub mass: f64,
    /// Thrust impulse per frame.
    pub speed: f64,
    /// Steering rate per frame.
    pub rotation_speed: f64,
}

impl Ship {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            health: SHIP_MAX_HEALTH,
            max_health: SHIP_MAX_HEALTH,
            shields: SHIP_MAX_SHIELDS,
            max_shields: SHIP_MAX_SHIELDS,
            fuel: SHIP_MAX_FUEL,
            max_fuel: SHIP_MAX_FUEL,
            angle: 0.0,
            spin: 0.0,
            mass: SHIP_MASS,
            speed: SHIP_THRUST,
            rotation_speed: SHIP_ROTATION_SPEED,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(self.width, self.height) * 0.5
    }

    pub fn speed_magnitude(&self) -> f64 {
        self.velocity.length()
    }

    pub fn is_disabled(&self) -> bool {
        self.health <= 0.0
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new(Vec2::new(SHIP_START_X, SHIP_START_Y))
    }
}

impl Body for Ship {
    fn anchor(&self) -> Vec2 {
        self.position
    }

    fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
