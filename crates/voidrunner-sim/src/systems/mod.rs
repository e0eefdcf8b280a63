//! Systems that operate on the ship and the world each frame.
//!
//! Systems are plain functions over borrowed state. They do not own
//! state; everything lives in the engine, the ship, or hecs components.
//! Per-frame tuning values are multiplied (additive terms) or raised to
//! the power of (retention factors) the frame scale.

pub mod collision;
pub mod control;
pub mod damage;
pub mod gravity;
pub mod kinematics;
pub mod render;
pub mod snapshot;
