//! Camera / viewport model.
//!
//! The camera stores the world-space top-left of the visible area. It
//! follows the ship but never shows anything outside the world bounds.

use serde::{Deserialize, Serialize};

use voidrunner_core::types::{Body, BoundingBox, Vec2, Viewport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec2,
}

impl Camera {
    /// Recenter on `target` (the ship's stored corner), clamped so the
    /// viewport stays inside `[0, world]`. A viewport larger than the world
    /// pins the camera to 0 on that axis.
    pub fn follow(&mut self, target: Vec2, viewport: Viewport, world: Vec2) {
        let max_x = (world.x - viewport.width).max(0.0);
        let max_y = (world.y - viewport.height).max(0.0);
        self.position = Vec2::new(
            (target.x - viewport.width / 2.0).clamp(0.0, max_x),
            (target.y - viewport.height / 2.0).clamp(0.0, max_y),
        );
    }

    /// The visible rectangle in world coordinates.
    pub fn view_box(&self, viewport: Viewport) -> BoundingBox {
        BoundingBox::from_corner(self.position, viewport.size())
    }

    /// Whether a body's center-anchored box overlaps the visible rectangle.
    pub fn is_in_viewport(&self, body: &impl Body, viewport: Viewport) -> bool {
        body.cull_box().intersects(&self.view_box(viewport))
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.position
    }
}
