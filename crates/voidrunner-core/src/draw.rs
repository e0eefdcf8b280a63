//! Display list produced by the render pass.
//!
//! The simulation never talks to a graphics API. Each frame it emits a list
//! of screen-space draw commands that the host replays in order.

use serde::{Deserialize, Serialize};

use crate::enums::{EllipseHalf, SpriteId};
use crate::types::{Rgba, Vec2};

/// One screen-space drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: Rgba },
    FillCircle {
        center: Vec2,
        radius: f64,
        color: Rgba,
    },
    /// Radial gradient between two radii, shaped by [`glow_alpha`].
    RadialGlow {
        center: Vec2,
        inner_radius: f64,
        outer_radius: f64,
        color: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f64,
        thickness: f64,
        color: Rgba,
    },
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    /// Half of a rotated ellipse outline.
    HalfEllipse {
        center: Vec2,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        half: EllipseHalf,
        thickness: f64,
        color: Rgba,
    },
    /// Image centered on `center`, rotated by `rotation` radians.
    Sprite {
        sprite: SpriteId,
        center: Vec2,
        size: Vec2,
        rotation: f64,
    },
    /// Filled convex polygon.
    Polygon { points: Vec<Vec2>, color: Rgba },
    /// Text with its baseline starting at `position`.
    Text {
        text: String,
        position: Vec2,
        size: f64,
        color: Rgba,
    },
}

/// All draw commands for one frame, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Opacity multiplier of a radial glow at normalized radius `t` in [0, 1].
///
/// Transparent at the inner edge, fully lit at `peak`, transparent again
/// at the outer edge. Linear between stops.
pub fn glow_alpha(t: f64, peak: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t <= peak {
        if peak <= 0.0 {
            1.0
        } else {
            t / peak
        }
    } else if peak >= 1.0 {
        1.0
    } else {
        (1.0 - t) / (1.0 - peak)
    }
}
