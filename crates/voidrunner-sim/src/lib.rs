//! Simulation engine for VOIDRUNNER.
//!
//! Owns the hecs world of stars, planets and obstacles plus the player's
//! ship, runs the per-frame systems, and produces a display list and a
//! `GameStateSnapshot` for the host.

pub mod camera;
pub mod clock;
pub mod config;
pub mod engine;
pub mod input;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
