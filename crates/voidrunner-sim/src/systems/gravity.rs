//! Black hole attraction.
//!
//! Single-source pairwise pull on the ship only. Distance is measured from
//! the ship's center to the black hole's center.

use voidrunner_core::components::{BlackHole, Ship};
use voidrunner_core::constants::{
    DAMPING_DISTANCE, DAMPING_FACTOR, GRAVITY_CONSTANT, GRAVITY_MIN_DISTANCE, MAX_VELOCITY,
};

use crate::clock::decay;

/// Apply one black hole's pull to the ship's velocity.
///
/// Outside the pull radius nothing changes. Inside it the velocity gains
/// `G·m·M/d²` toward the center, is clamped to `MAX_VELOCITY`, and is
/// damped when closer than `DAMPING_DISTANCE`. At (near) zero distance the
/// direction is undefined, so only the clamp and damping apply.
pub fn apply(ship: &mut Ship, source: &BlackHole, scale: f64) {
    let delta = source.position - ship.center();
    let distance = delta.length();

    if distance.is_nan() || distance >= source.pull_radius() {
        return;
    }

    if distance >= GRAVITY_MIN_DISTANCE {
        let force = GRAVITY_CONSTANT * ship.mass * source.mass / (distance * distance);
        ship.velocity += delta / distance * force * scale;
    }

    clamp_speed(ship, MAX_VELOCITY);

    if distance < DAMPING_DISTANCE {
        ship.velocity *= decay(DAMPING_FACTOR, scale);
    }
}

/// Uniformly rescale velocity so its magnitude does not exceed `max`.
pub fn clamp_speed(ship: &mut Ship, max: f64) {
    let speed = ship.velocity.length();
    if speed > max {
        ship.velocity *= max / speed;
    }
}

/// Apply every source in order.
pub fn run<'a>(ship: &mut Ship, sources: impl IntoIterator<Item = &'a BlackHole>, scale: f64) {
    for source in sources {
        apply(ship, source, scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidrunner_core::types::{Rgba, Vec2};

    fn hole_at(center: Vec2, mass: f64, radius: f64) -> BlackHole {
        BlackHole {
            position: center,
            mass,
            radius,
            event_horizon_color: Rgba::new(255, 255, 0, 0.8),
            pulse_offset: 0.0,
        }
    }

    /// Ship whose center sits at `center`.
    fn ship_centered(center: Vec2) -> Ship {
        let mut ship = Ship::default();
        ship.position = center - Vec2::new(ship.width, ship.height) * 0.5;
        ship
    }

    #[test]
    fn out_of_range_leaves_velocity_unchanged() {
        let hole = hole_at(Vec2::new(1000.0, 1000.0), 60.0, 20.0);
        let mut ship = ship_centered(Vec2::new(1100.0, 1000.0));
        ship.velocity = Vec2::new(7.0, -3.0);
        apply(&mut ship, &hole, 1.0);
        assert_eq!(ship.velocity, Vec2::new(7.0, -3.0));
    }

    #[test]
    fn pulls_toward_center() {
        let hole = hole_at(Vec2::new(1000.0, 1000.0), 60.0, 20.0);
        let mut ship = ship_centered(Vec2::new(950.0, 1000.0));
        apply(&mut ship, &hole, 1.0);

        // G * 10 * 60 / 50^2 = 0.024
        assert!((ship.velocity.x - 0.024).abs() < 1e-9);
        assert!(ship.velocity.y.abs() < 1e-9);
    }

    #[test]
    fn speed_clamped_for_extreme_masses() {
        let hole = hole_at(Vec2::new(0.0, 0.0), 1_000_000.0, 150.0);
        for d in [25.0, 60.0, 149.0, 300.0, 700.0] {
            let mut ship = ship_centered(Vec2::new(d, 0.0));
            ship.velocity = Vec2::new(0.0, 40.0);
            apply(&mut ship, &hole, 1.0);
            assert!(ship.velocity.length() <= MAX_VELOCITY + 1e-9, "d = {d}");
        }
    }

    #[test]
    fn damping_applies_inside_damping_distance() {
        let hole = hole_at(Vec2::new(500.0, 500.0), 60.0, 20.0);
        let mut ship = ship_centered(Vec2::new(490.0, 500.0));
        ship.velocity = Vec2::new(0.0, 1.0);

        let mut undamped = ship;
        let delta = hole.position - undamped.center();
        let d = delta.length();
        undamped.velocity += delta / d * (GRAVITY_CONSTANT * ship.mass * hole.mass / (d * d));
        clamp_speed(&mut undamped, MAX_VELOCITY);

        apply(&mut ship, &hole, 1.0);
        assert!(ship.velocity.length() < undamped.velocity.length());
        assert!((ship.velocity.length() - undamped.velocity.length() * 0.9).abs() < 1e-9);
    }

    #[test]
    fn zero_distance_is_finite() {
        let hole = hole_at(Vec2::new(500.0, 500.0), 60.0, 20.0);
        let mut ship = ship_centered(Vec2::new(500.0, 500.0));
        ship.velocity = Vec2::new(3.0, 4.0);
        apply(&mut ship, &hole, 1.0);
        assert!(ship.velocity.x.is_finite() && ship.velocity.y.is_finite());
        assert!((ship.velocity.length() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn run_applies_all_sources() {
        let a = hole_at(Vec2::new(0.0, 0.0), 60.0, 20.0);
        let b = hole_at(Vec2::new(100.0, 0.0), 60.0, 20.0);
        let mut ship = ship_centered(Vec2::new(50.0, 0.0));
        run(&mut ship, [&a, &b], 1.0);
        // Symmetric pulls cancel.
        assert!(ship.velocity.length() < 1e-12);
    }
}
