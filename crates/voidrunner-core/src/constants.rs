//! Simulation constants and tuning parameters.
//!
//! Per-frame values are expressed at the reference frame rate. The engine
//! scales them by the measured frame interval.

/// Frame rate the per-frame tuning values were authored against (Hz).
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Upper bound on the frame scale applied in a single update.
/// A stalled host (tab in background, debugger break) is treated as four frames.
pub const MAX_FRAME_SCALE: f64 = 4.0;

// --- World ---

/// World width in world units.
pub const WORLD_WIDTH: f64 = 5000.0;

/// World height in world units.
pub const WORLD_HEIGHT: f64 = 5000.0;

/// Number of background stars.
pub const NUM_STARS: usize = 400;

/// Number of planets scattered across the world.
pub const NUM_PLANETS: usize = 100;

// --- Ship ---

pub const SHIP_START_X: f64 = 400.0;
pub const SHIP_START_Y: f64 = 300.0;
pub const SHIP_WIDTH: f64 = 40.0;
pub const SHIP_HEIGHT: f64 = 40.0;
pub const SHIP_MAX_HEALTH: f64 = 100.0;
pub const SHIP_MAX_SHIELDS: f64 = 100.0;
pub const SHIP_MAX_FUEL: f64 = 100.0;
pub const SHIP_MASS: f64 = 10.0;

/// Velocity impulse per frame of thrust.
pub const SHIP_THRUST: f64 = 0.05;

/// Rotation per frame of steering (radians).
pub const SHIP_ROTATION_SPEED: f64 = 0.05;

/// Velocity retained per frame.
pub const FRICTION: f64 = 0.99;

/// Spin retained per frame.
pub const SPIN_DECAY: f64 = 0.95;

// --- Collision ---

/// Damage taken per collider per frame of contact.
pub const COLLISION_DAMAGE: f64 = 10.0;

/// Fraction of velocity kept (and reversed) after a bounce.
pub const BOUNCE_RESTITUTION: f64 = 0.8;

/// Half-range of the random spin imparted by a bounce (rad/frame).
pub const BOUNCE_SPIN: f64 = 0.1;

// --- Gravity ---

/// Gravitational constant (tuned for feel, not physics).
pub const GRAVITY_CONSTANT: f64 = 0.1;

/// Pull radius as a multiple of the black hole's visual radius.
pub const PULL_RADIUS_FACTOR: f64 = 5.0;

/// Speed limit enforced after gravity is applied.
pub const MAX_VELOCITY: f64 = 5.0;

/// Distance from the center inside which velocity is damped.
pub const DAMPING_DISTANCE: f64 = 20.0;

/// Velocity retained per frame inside the damping distance.
pub const DAMPING_FACTOR: f64 = 0.9;

/// Below this distance the force term is skipped entirely.
pub const GRAVITY_MIN_DISTANCE: f64 = 1e-3;

// --- Black holes ---

/// Culling extent as a multiple of radius (covers the outer glow).
pub const BLACK_HOLE_EXTENT_FACTOR: f64 = 5.0;

/// Outer radius of the event-horizon glow as a multiple of radius.
pub const GLOW_RADIUS_FACTOR: f64 = 2.5;

/// Position of the glow's brightest stop along the gradient.
pub const GLOW_PEAK: f64 = 0.7;

/// Base radius of the pulsing ring as a multiple of radius.
pub const PULSE_RING_FACTOR: f64 = 3.0;

/// Amplitude of the pulsing ring (world units).
pub const PULSE_AMPLITUDE: f64 = 10.0;

/// Pulse phase advance per rendered frame (radians).
pub const PULSE_STEP: f64 = 0.02;

pub const DEFAULT_BLACK_HOLE_X: f64 = 700.0;
pub const DEFAULT_BLACK_HOLE_Y: f64 = 300.0;
pub const DEFAULT_BLACK_HOLE_MASS: f64 = 60.0;
pub const DEFAULT_BLACK_HOLE_RADIUS: f64 = 20.0;

// --- Asteroids ---

pub const DEFAULT_ASTEROID_X: f64 = 200.0;
pub const DEFAULT_ASTEROID_Y: f64 = 200.0;
pub const DEFAULT_ASTEROID_SIZE: f64 = 50.0;

// --- Planets ---

pub const PLANET_MIN_RADIUS: f64 = 20.0;
pub const PLANET_RADIUS_RANGE: f64 = 80.0;
pub const PLANET_RING_CHANCE: f64 = 0.25;

/// Ring width as a fraction of planet radius.
pub const PLANET_RING_WIDTH_FACTOR: f64 = 0.3;

/// Ring ellipse minor axis as a fraction of planet radius.
pub const PLANET_RING_FLATTEN: f64 = 0.5;

// --- Stars ---

pub const STAR_MIN_SIZE: f64 = 1.0;
pub const STAR_SIZE_RANGE: f64 = 2.0;
pub const STAR_MIN_BRIGHTNESS: f64 = 0.2;
pub const STAR_BRIGHTNESS_RANGE: f64 = 0.8;
pub const STAR_MIN_PARALLAX: f64 = 0.1;
pub const STAR_PARALLAX_RANGE: f64 = 0.2;

// --- HUD ---

pub const HUD_X: f64 = 10.0;
pub const HUD_FIRST_LINE_Y: f64 = 20.0;
pub const HUD_LINE_SPACING: f64 = 20.0;
pub const HUD_FONT_SIZE: f64 = 16.0;

/// Default asset path of the ship sprite.
pub const SHIP_SPRITE_PATH: &str = "assets/images/spaceship.png";
