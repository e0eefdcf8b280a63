//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Something that happened during an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The ship hit a collider and took damage.
    Collision {
        position: Vec2,
        shields: f64,
        health: f64,
    },
    /// Health reached zero this frame.
    ShipDisabled { tick: u64 },
}
