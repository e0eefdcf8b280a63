//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in world or screen space (x = right, y = down).
pub type Vec2 = glam::DVec2;

/// Colour with 8-bit channels and a fractional alpha, CSS `rgba()` style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Axis-aligned box in world coordinates.
///
/// Entities anchor their `{x, y, width, height}` differently depending on
/// use: collision treats the anchor as the top-left corner, viewport culling
/// treats it as the center. Both go through an explicit constructor so the
/// convention is visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Box whose top-left corner is `origin`.
    pub fn from_corner(origin: Vec2, size: Vec2) -> Self {
        Self {
            min_x: origin.x,
            min_y: origin.y,
            max_x: origin.x + size.x,
            max_y: origin.y + size.y,
        }
    }

    /// Box centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min_x: center.x - half.x,
            min_y: center.y - half.y,
            max_x: center.x + half.x,
            max_y: center.y + half.y,
        }
    }

    /// Strict overlap test. Boxes that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Anything placed in the world with a rectangular extent.
pub trait Body {
    /// The `{x, y}` the entity stores.
    fn anchor(&self) -> Vec2;

    /// The `{width, height}` the entity stores.
    fn extent(&self) -> Vec2;

    /// Top-left anchored box used for ship collision checks.
    fn collision_box(&self) -> BoundingBox {
        BoundingBox::from_corner(self.anchor(), self.extent())
    }

    /// Center anchored box used for viewport culling.
    fn cull_box(&self) -> BoundingBox {
        BoundingBox::from_center(self.anchor(), self.extent())
    }
}

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of update steps run so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update step of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}
