//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs world, the ship, the camera and the
//! input snapshot. Each frame runs an update phase (controls, gravity,
//! collisions, camera) followed by a render phase that produces a
//! host-agnostic display list. No windowing dependency, so the whole loop
//! can be driven from tests with a synthetic clock.

use std::time::Duration;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voidrunner_core::commands::InputEvent;
use voidrunner_core::components::{Asteroid, BlackHole, Collider, Ship};
use voidrunner_core::constants::{SHIP_START_X, SHIP_START_Y};
use voidrunner_core::draw::Frame;
use voidrunner_core::enums::{AssetStatus, BlackHoleClass, SpriteId};
use voidrunner_core::events::SimEvent;
use voidrunner_core::state::GameStateSnapshot;
use voidrunner_core::types::{Body, BoundingBox, SimTime, Vec2, Viewport};

use crate::camera::Camera;
use crate::clock::{self, FrameClock};
use crate::config::{validate_viewport, ConfigError, SimConfig};
use crate::input::InputState;
use crate::systems;
use crate::systems::render::{RenderContext, RenderStats};
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    ship: Ship,
    camera: Camera,
    input: InputState,
    viewport: Viewport,
    world_size: Vec2,
    num_stars: usize,
    time: SimTime,
    rng: ChaCha8Rng,
    /// Asteroids and black holes, in collision and draw order.
    objects: Vec<Entity>,
    events: Vec<SimEvent>,
    ship_sprite: AssetStatus,
    /// Frame scale of the most recent update, reused by the render phase.
    last_scale: f64,
    last_stats: RenderStats,
}

impl SimulationEngine {
    /// Create a new engine and generate the session's world.
    ///
    /// The config is taken as given; use [`SimulationEngine::try_new`] to
    /// reject invalid dimensions first.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();
        let world_size = Vec2::new(config.world_width, config.world_height);

        world_setup::regenerate_stars(&mut world, &mut rng, config.num_stars, world_size);
        world_setup::spawn_planets(&mut world, &mut rng, config.num_planets, world_size);
        let objects = world_setup::spawn_default_objects(&mut world);

        tracing::info!(
            seed = config.seed,
            width = config.world_width,
            height = config.world_height,
            stars = config.num_stars,
            planets = config.num_planets,
            objects = objects.len(),
            "world generated"
        );

        let ship = Ship::new(Vec2::new(SHIP_START_X, SHIP_START_Y));
        let mut camera = Camera::default();
        camera.follow(ship.position, config.viewport, world_size);

        Self {
            world,
            ship,
            camera,
            input: InputState::default(),
            viewport: config.viewport,
            world_size,
            num_stars: config.num_stars,
            time: SimTime::default(),
            rng,
            objects,
            events: Vec::new(),
            ship_sprite: AssetStatus::default(),
            last_scale: 0.0,
            last_stats: RenderStats::default(),
        }
    }

    /// Validate `config`, then create the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Record a key transition. The next update sees the latest state.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// The drawing surface changed size. Stars are regenerated; planets and
    /// obstacles keep their world coordinates.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        let viewport = Viewport::new(width, height);
        validate_viewport(viewport)?;

        self.viewport = viewport;
        world_setup::regenerate_stars(
            &mut self.world,
            &mut self.rng,
            self.num_stars,
            self.world_size,
        );
        self.camera
            .follow(self.ship.position, self.viewport, self.world_size);

        tracing::debug!(width, height, stars = self.num_stars, "viewport resized");
        Ok(())
    }

    /// Phase 1: advance the simulation by `dt` of wall time.
    pub fn update(&mut self, dt: Duration) {
        let scale = clock::frame_scale(dt);
        let input = self.input;

        systems::control::run(&mut self.ship, &input, scale);

        let holes: Vec<BlackHole> = self
            .world
            .query::<&BlackHole>()
            .iter()
            .map(|(_, hole)| *hole)
            .collect();
        systems::gravity::run(&mut self.ship, &holes, scale);

        let colliders = self.collider_boxes();
        systems::kinematics::update(
            &mut self.ship,
            &colliders,
            scale,
            &mut self.rng,
            &mut self.events,
            self.time.tick,
        );

        self.camera
            .follow(self.ship.position, self.viewport, self.world_size);
        self.time.advance(dt.as_secs_f64());
        self.last_scale = scale;
    }

    /// Phase 2: build the display list for the current state, then advance
    /// the black-hole pulse animation.
    pub fn render(&mut self) -> Frame {
        let (frame, stats) = systems::render::build_frame(&RenderContext {
            world: &self.world,
            objects: &self.objects,
            ship: &self.ship,
            camera: &self.camera,
            viewport: self.viewport,
            ship_sprite: self.ship_sprite,
        });
        systems::render::advance_pulses(&mut self.world, self.last_scale);
        self.last_stats = stats;
        frame
    }

    /// One full frame: update, then render.
    pub fn frame(&mut self, dt: Duration) -> Frame {
        self.update(dt);
        self.render()
    }

    /// Run `frames` frames timed by `clock`, discarding the display lists.
    pub fn run_frames(&mut self, clock: &mut impl FrameClock, frames: usize) {
        for _ in 0..frames {
            let dt = clock.next_dt();
            self.frame(dt);
        }
    }

    /// Visible state as of the last render.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.time,
            &self.ship,
            &self.camera,
            self.viewport,
            self.last_stats,
        )
    }

    /// Take every event emitted since the previous drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// The host reports the load state of a sprite.
    pub fn set_asset_status(&mut self, sprite: SpriteId, status: AssetStatus) {
        match sprite {
            SpriteId::Ship => self.ship_sprite = status,
        }
    }

    /// Add a black hole from a class preset. It attracts and collides like
    /// the default one.
    pub fn spawn_black_hole(&mut self, class: BlackHoleClass, position: Vec2) -> Entity {
        let hole = world_setup::black_hole(class, position);
        let entity = world_setup::spawn_black_hole(&mut self.world, hole);
        self.objects.push(entity);
        entity
    }

    /// Get the ship.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Get mutable access to the ship (for scenarios and tests).
    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world (for testing).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Obstacles in collision and draw order.
    pub fn objects(&self) -> &[Entity] {
        &self.objects
    }

    /// Top-left anchored boxes of every obstacle tagged `Collider`, in
    /// object order.
    fn collider_boxes(&self) -> Vec<BoundingBox> {
        self.objects
            .iter()
            .filter(|&&entity| self.world.get::<&Collider>(entity).is_ok())
            .filter_map(|&entity| {
                if let Ok(asteroid) = self.world.get::<&Asteroid>(entity) {
                    Some(asteroid.collision_box())
                } else if let Ok(hole) = self.world.get::<&BlackHole>(entity) {
                    Some(hole.collision_box())
                } else {
                    None
                }
            })
            .collect()
    }
}
