//! Ship integration step.
//!
//! Resolves collisions against every collider, then integrates position
//! from velocity and applies friction and spin decay.

use rand::Rng;

use voidrunner_core::components::Ship;
use voidrunner_core::constants::{COLLISION_DAMAGE, FRICTION, SPIN_DECAY};
use voidrunner_core::events::SimEvent;
use voidrunner_core::types::BoundingBox;

use crate::clock::decay;
use crate::systems::{collision, damage};

/// Run one update of the ship against `colliders` (top-left anchored boxes).
///
/// Each overlapping collider independently deals damage and bounces the
/// ship, so two simultaneous contacts hit twice in the same frame. Contact
/// damage is proportional to `scale`; an update with zero scale resolves no
/// collisions.
pub fn update(
    ship: &mut Ship,
    colliders: &[BoundingBox],
    scale: f64,
    rng: &mut impl Rng,
    events: &mut Vec<SimEvent>,
    tick: u64,
) {
    let was_disabled = ship.is_disabled();

    let contacts: &[BoundingBox] = if scale > 0.0 { colliders } else { &[] };
    for collider in contacts {
        if collision::overlaps(ship, collider) {
            damage::take_damage(ship, COLLISION_DAMAGE * scale);
            collision::bounce(ship, rng);
            tracing::debug!(
                x = ship.position.x,
                y = ship.position.y,
                shields = ship.shields,
                health = ship.health,
                "collision detected"
            );
            events.push(SimEvent::Collision {
                position: ship.position,
                shields: ship.shields,
                health: ship.health,
            });
        }
    }

    if !was_disabled && ship.is_disabled() {
        tracing::warn!(tick, "ship disabled");
        events.push(SimEvent::ShipDisabled { tick });
    }

    ship.position += ship.velocity * scale;
    ship.velocity *= decay(FRICTION, scale);
    ship.angle += ship.spin * scale;
    ship.spin *= decay(SPIN_DECAY, scale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use voidrunner_core::types::Vec2;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    #[test]
    fn free_flight_integrates_then_decays() {
        let mut ship = Ship::default();
        ship.velocity = Vec2::new(2.0, -1.0);
        let mut events = Vec::new();
        update(&mut ship, &[], 1.0, &mut rng(), &mut events, 0);

        assert_eq!(ship.position, Vec2::new(402.0, 299.0));
        assert!((ship.velocity.x - 1.98).abs() < 1e-12);
        assert!((ship.velocity.y + 0.99).abs() < 1e-12);
        assert!(events.is_empty());
    }

    #[test]
    fn spin_turns_and_decays() {
        let mut ship = Ship::default();
        ship.spin = 0.1;
        update(&mut ship, &[], 1.0, &mut rng(), &mut Vec::new(), 0);
        assert!((ship.angle - 0.1).abs() < 1e-12);
        assert!((ship.spin - 0.095).abs() < 1e-12);
    }

    #[test]
    fn each_collider_hits_independently() {
        let mut ship = Ship::default();
        ship.velocity = Vec2::new(1.0, 0.0);
        let boxes = [
            BoundingBox::from_corner(Vec2::new(390.0, 290.0), Vec2::new(30.0, 30.0)),
            BoundingBox::from_corner(Vec2::new(420.0, 320.0), Vec2::new(30.0, 30.0)),
        ];
        let mut events = Vec::new();
        update(&mut ship, &boxes, 1.0, &mut rng(), &mut events, 0);

        assert_eq!(ship.shields, 80.0);
        assert_eq!(events.len(), 2);
        // Two bounces: +1 -> -0.8 -> +0.64, then moved and decayed.
        assert!((ship.position.x - 400.64).abs() < 1e-9);
    }

    #[test]
    fn contact_damage_follows_scale() {
        let mut ship = Ship::default();
        let boxes = [BoundingBox::from_corner(Vec2::new(390.0, 290.0), Vec2::splat(30.0))];
        let mut events = Vec::new();
        update(&mut ship, &boxes, 0.5, &mut rng(), &mut events, 0);

        assert!((ship.shields - 95.0).abs() < 1e-12);
        assert!(matches!(
            events[0],
            SimEvent::Collision { shields, .. } if (shields - 95.0).abs() < 1e-12
        ));
    }

    #[test]
    fn zero_scale_ignores_contact() {
        let mut ship = Ship::default();
        ship.velocity = Vec2::new(1.0, 0.0);
        let boxes = [BoundingBox::from_corner(Vec2::new(390.0, 290.0), Vec2::splat(30.0))];
        let mut events = Vec::new();
        for tick in 0..5 {
            update(&mut ship, &boxes, 0.0, &mut rng(), &mut events, tick);
        }

        assert_eq!(ship.shields, 100.0);
        assert_eq!(ship.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(ship.spin, 0.0);
        assert_eq!(ship.position, Vec2::new(400.0, 300.0));
        assert!(events.is_empty());
    }

    #[test]
    fn disabling_blow_emits_event_once() {
        let mut ship = Ship::default();
        ship.shields = 0.0;
        ship.health = 10.0;
        let boxes = [BoundingBox::from_corner(ship.position, Vec2::splat(10.0))];
        let mut events = Vec::new();

        update(&mut ship, &boxes, 1.0, &mut rng(), &mut events, 5);
        assert!(ship.is_disabled());
        assert!(events.contains(&SimEvent::ShipDisabled { tick: 5 }));

        events.clear();
        ship.position = Vec2::new(0.0, 0.0);
        let boxes = [BoundingBox::from_corner(Vec2::ZERO, Vec2::splat(10.0))];
        update(&mut ship, &boxes, 1.0, &mut rng(), &mut events, 6);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SimEvent::ShipDisabled { .. })));
    }

    #[test]
    fn scale_two_matches_two_reference_frames_for_position_drift() {
        let mut a = Ship::default();
        a.velocity = Vec2::new(1.0, 0.0);
        let mut b = a;

        update(&mut a, &[], 2.0, &mut rng(), &mut Vec::new(), 0);
        update(&mut b, &[], 1.0, &mut rng(), &mut Vec::new(), 0);
        update(&mut b, &[], 1.0, &mut rng(), &mut Vec::new(), 1);

        assert!((a.velocity.x - b.velocity.x).abs() < 1e-12);
        // Position differs only by first-order integration error.
        assert!((a.position.x - b.position.x).abs() < 0.02);
    }
}
