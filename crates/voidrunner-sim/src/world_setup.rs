//! Entity spawn factories for setting up the simulation world.
//!
//! Stars are regenerated wholesale whenever the viewport changes. Planets
//! and the obstacle set are created once per session.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::components::*;
use voidrunner_core::constants::*;
use voidrunner_core::enums::BlackHoleClass;
use voidrunner_core::types::{Rgba, Vec2};

/// Colour of planetary rings (semi-transparent gray).
const RING_COLOR: Rgba = Rgba::new(200, 200, 200, 0.5);

/// Roll a single star somewhere in `[0, width) x [0, height)`.
pub fn random_star(rng: &mut ChaCha8Rng, width: f64, height: f64) -> Star {
    Star {
        position: Vec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height),
        size: STAR_MIN_SIZE + rng.gen::<f64>() * STAR_SIZE_RANGE,
        brightness: STAR_MIN_BRIGHTNESS + rng.gen::<f64>() * STAR_BRIGHTNESS_RANGE,
        parallax_factor: STAR_MIN_PARALLAX + rng.gen::<f64>() * STAR_PARALLAX_RANGE,
    }
}

/// Despawn every star and spawn `count` fresh ones across the world.
pub fn regenerate_stars(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    count: usize,
    world_size: Vec2,
) {
    let old: Vec<Entity> = world
        .query_mut::<&Star>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in old {
        let _ = world.despawn(entity);
    }

    for _ in 0..count {
        world.spawn((random_star(rng, world_size.x, world_size.y),));
    }
}

/// Roll a planet centered at `position`.
pub fn random_planet(rng: &mut ChaCha8Rng, position: Vec2) -> Planet {
    let radius = PLANET_MIN_RADIUS + rng.gen::<f64>() * PLANET_RADIUS_RANGE;
    let color = Rgba::rgb(rng.gen(), rng.gen(), rng.gen());
    let rings = if rng.gen_bool(PLANET_RING_CHANCE) {
        Some(PlanetRings {
            color: RING_COLOR,
            width: radius * PLANET_RING_WIDTH_FACTOR,
            angle: rng.gen::<f64>() * std::f64::consts::TAU,
        })
    } else {
        None
    };

    Planet {
        position,
        radius,
        color,
        rings,
    }
}

/// Scatter `count` planets uniformly across the world.
pub fn spawn_planets(world: &mut World, rng: &mut ChaCha8Rng, count: usize, world_size: Vec2) {
    for _ in 0..count {
        let position = Vec2::new(
            rng.gen::<f64>() * world_size.x,
            rng.gen::<f64>() * world_size.y,
        );
        let planet = random_planet(rng, position);
        world.spawn((planet,));
    }
}

/// Build a black hole from a class preset.
pub fn black_hole(class: BlackHoleClass, position: Vec2) -> BlackHole {
    let preset = class.preset();
    BlackHole {
        position,
        mass: preset.mass,
        radius: preset.radius,
        event_horizon_color: preset.event_horizon_color,
        pulse_offset: 0.0,
    }
}

/// Build a black hole from a class name. Unknown names get the stellar preset.
pub fn black_hole_named(name: &str, position: Vec2) -> BlackHole {
    let class = BlackHoleClass::from_name(name).unwrap_or_else(|| {
        tracing::warn!(name, "unknown black hole class, using stellar");
        BlackHoleClass::Stellar
    });
    black_hole(class, position)
}

/// Spawn an asteroid collider.
pub fn spawn_asteroid(world: &mut World, asteroid: Asteroid) -> Entity {
    world.spawn((asteroid, Collider))
}

/// Spawn a black hole. It both attracts and collides.
pub fn spawn_black_hole(world: &mut World, black_hole: BlackHole) -> Entity {
    world.spawn((black_hole, Collider))
}

/// The session's obstacle set, in draw order.
pub fn spawn_default_objects(world: &mut World) -> Vec<Entity> {
    let asteroid = spawn_asteroid(
        world,
        Asteroid {
            position: Vec2::new(DEFAULT_ASTEROID_X, DEFAULT_ASTEROID_Y),
            width: DEFAULT_ASTEROID_SIZE,
            height: DEFAULT_ASTEROID_SIZE,
        },
    );

    let stellar = BlackHoleClass::Stellar.preset();
    let hole = spawn_black_hole(
        world,
        BlackHole {
            position: Vec2::new(DEFAULT_BLACK_HOLE_X, DEFAULT_BLACK_HOLE_Y),
            mass: DEFAULT_BLACK_HOLE_MASS,
            radius: DEFAULT_BLACK_HOLE_RADIUS,
            event_horizon_color: stellar.event_horizon_color,
            pulse_offset: 0.0,
        },
    );

    vec![asteroid, hole]
}
