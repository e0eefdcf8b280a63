//! Configuration for starting a new simulation.

use std::fmt;

use voidrunner_core::constants::{NUM_PLANETS, NUM_STARS, WORLD_HEIGHT, WORLD_WIDTH};
use voidrunner_core::types::Viewport;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same world and same bounces.
    pub seed: u64,
    pub world_width: f64,
    pub world_height: f64,
    pub num_stars: usize,
    pub num_planets: usize,
    /// Initial drawing surface size. The host updates it through `resize`.
    pub viewport: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            num_stars: NUM_STARS,
            num_planets: NUM_PLANETS,
            viewport: Viewport::default(),
        }
    }
}

impl SimConfig {
    /// Reject dimensions the camera and generators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(is_positive(self.world_width) && is_positive(self.world_height)) {
            return Err(ConfigError::InvalidWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }
        validate_viewport(self.viewport)
    }
}

/// Reject a non-positive or non-finite drawing surface.
pub fn validate_viewport(viewport: Viewport) -> Result<(), ConfigError> {
    if !(is_positive(viewport.width) && is_positive(viewport.height)) {
        return Err(ConfigError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Invalid simulation configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidWorldSize { width: f64, height: f64 },
    InvalidViewport { width: f64, height: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWorldSize { width, height } => {
                write!(f, "world size must be positive, got {width}x{height}")
            }
            ConfigError::InvalidViewport { width, height } => {
                write!(f, "viewport size must be positive, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
