//! Ship resources: shields, health and fuel.
//!
//! Every mutation keeps `0 <= value <= max`.

use voidrunner_core::components::Ship;

/// Shields absorb damage first; whatever they cannot absorb reduces health.
/// Health stops at zero. Negative amounts are ignored.
pub fn take_damage(ship: &mut Ship, amount: f64) {
    if amount.is_nan() || amount <= 0.0 {
        return;
    }
    let absorbed = amount.min(ship.shields.max(0.0));
    ship.shields = (ship.shields - absorbed).clamp(0.0, ship.max_shields);
    let overflow = amount - absorbed;
    ship.health = (ship.health - overflow).clamp(0.0, ship.max_health);
}

/// Add fuel, capped at the tank size.
pub fn refuel(ship: &mut Ship, amount: f64) {
    ship.fuel = (ship.fuel + amount.max(0.0)).clamp(0.0, ship.max_fuel);
}

/// Remove fuel, stopping at empty. Returns the amount actually drawn.
pub fn consume_fuel(ship: &mut Ship, amount: f64) -> f64 {
    let drawn = amount.max(0.0).min(ship.fuel);
    ship.fuel = (ship.fuel - drawn).clamp(0.0, ship.max_fuel);
    drawn
}

/// Restore health first, then shields, each capped at its maximum.
pub fn repair(ship: &mut Ship, amount: f64) {
    let mut remaining = amount.max(0.0);

    let to_health = remaining.min(ship.max_health - ship.health).max(0.0);
    ship.health = (ship.health + to_health).clamp(0.0, ship.max_health);
    remaining -= to_health;

    ship.shields = (ship.shields + remaining).clamp(0.0, ship.max_shields);
}
