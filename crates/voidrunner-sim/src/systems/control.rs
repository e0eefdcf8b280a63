//! Player steering and thrust.

use std::f64::consts::FRAC_PI_2;

use voidrunner_core::components::Ship;
use voidrunner_core::enums::{Rotation, Thrust};
use voidrunner_core::types::Vec2;

use crate::input::InputState;

/// Turn the ship by its rotation speed. The angle is left unwrapped.
pub fn rotate(ship: &mut Ship, direction: Rotation, scale: f64) {
    let step = ship.rotation_speed * scale;
    match direction {
        Rotation::Left => ship.angle -= step,
        Rotation::Right => ship.angle += step,
    }
}

/// Instantaneous velocity change along the heading. Angle 0 points up.
/// Does not consume fuel.
pub fn thrust(ship: &mut Ship, direction: Thrust, scale: f64) {
    let impulse = heading_offset(ship.angle) * ship.speed * scale;
    match direction {
        Thrust::Forward => ship.velocity -= impulse,
        Thrust::Backward => ship.velocity += impulse,
    }
}

/// `(cos, sin)` of the angle rotated a quarter turn; forward is the negation.
fn heading_offset(angle: f64) -> Vec2 {
    let a = angle + FRAC_PI_2;
    Vec2::new(a.cos(), a.sin())
}

/// Apply the held keys: rotation first (right, then left), then thrust.
pub fn run(ship: &mut Ship, input: &InputState, scale: f64) {
    if input.right {
        rotate(ship, Rotation::Right, scale);
    }
    if input.left {
        rotate(ship, Rotation::Left, scale);
    }
    if input.up {
        thrust(ship, Thrust::Forward, scale);
    }
    if input.down {
        thrust(ship, Thrust::Backward, scale);
    }
}
