//! Ship collision checks and bounce response.

use rand::Rng;

use voidrunner_core::components::Ship;
use voidrunner_core::constants::{BOUNCE_RESTITUTION, BOUNCE_SPIN};
use voidrunner_core::types::{Body, BoundingBox};

/// Overlap test between the ship and another body.
/// Both boxes are top-left anchored, whatever the body's visual shape.
pub fn check_collision(ship: &Ship, other: &impl Body) -> bool {
    ship.collision_box().intersects(&other.collision_box())
}

/// Same test against a precomputed collider box.
pub fn overlaps(ship: &Ship, collider: &BoundingBox) -> bool {
    ship.collision_box().intersects(collider)
}

/// Inelastic reflection: reverse and shrink velocity, add a random spin in
/// `[-BOUNCE_SPIN, BOUNCE_SPIN)`.
pub fn bounce(ship: &mut Ship, rng: &mut impl Rng) {
    ship.velocity = -ship.velocity * BOUNCE_RESTITUTION;
    ship.spin = rng.gen_range(-BOUNCE_SPIN..BOUNCE_SPIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use voidrunner_core::components::Asteroid;
    use voidrunner_core::types::Vec2;

    fn asteroid(x: f64, y: f64, w: f64, h: f64) -> Asteroid {
        Asteroid {
            position: Vec2::new(x, y),
            width: w,
            height: h,
        }
    }

    #[test]
    fn overlapping_boxes_collide() {
        let mut ship = Ship::default();
        ship.position = Vec2::new(220.0, 220.0);
        assert!(check_collision(&ship, &asteroid(200.0, 200.0, 50.0, 50.0)));
    }

    #[test]
    fn corner_anchor_is_used() {
        // Ship spans 160..200; the asteroid starts at 200. Touching only.
        let mut ship = Ship::default();
        ship.position = Vec2::new(160.0, 210.0);
        assert!(!check_collision(&ship, &asteroid(200.0, 200.0, 50.0, 50.0)));
    }

    #[test]
    fn collision_is_symmetric() {
        let mut a = Ship::default();
        a.position = Vec2::new(10.0, 10.0);
        let mut b = Ship::default();
        b.position = Vec2::new(30.0, 45.0);
        assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
        assert!(check_collision(&a, &a));

        b.position = Vec2::new(60.0, 10.0);
        assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
    }

    #[test]
    fn bounce_reverses_and_spins() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ship = Ship::default();
        ship.velocity = Vec2::new(2.0, -1.0);
        bounce(&mut ship, &mut rng);
        assert!((ship.velocity.x + 1.6).abs() < 1e-12);
        assert!((ship.velocity.y - 0.8).abs() < 1e-12);
        assert!(ship.spin >= -BOUNCE_SPIN && ship.spin < BOUNCE_SPIN);
    }

    #[test]
    fn bounce_spin_is_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let mut ship_a = Ship::default();
        let mut ship_b = Ship::default();
        bounce(&mut ship_a, &mut a);
        bounce(&mut ship_b, &mut b);
        assert_eq!(ship_a.spin, ship_b.spin);
    }
}
