//! VOIDRUNNER desktop host.
//!
//! Opens a macroquad window, feeds keyboard transitions into the
//! simulation engine, and replays each frame's display list.

pub mod canvas;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;

pub use voidrunner_core as core;
