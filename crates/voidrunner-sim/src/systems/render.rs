//! Render pass: turns world state into a screen-space display list.
//!
//! Paint order is fixed: background, stars (parallax, never culled),
//! culled planets, culled obstacles, the ship, then the HUD in screen
//! space.

use std::f64::consts::TAU;

use hecs::{Entity, World};

use voidrunner_core::components::{Asteroid, BlackHole, Planet, PlanetRings, Ship, Star};
use voidrunner_core::constants::*;
use voidrunner_core::draw::{DrawCommand, Frame};
use voidrunner_core::enums::{AssetStatus, EllipseHalf, SpriteId};
use voidrunner_core::state::HudView;
use voidrunner_core::types::{Rgba, Vec2, Viewport};

use crate::camera::Camera;

/// Stroke colour of the pulsing pull ring.
const PULSE_RING_COLOR: Rgba = Rgba::new(255, 255, 255, 0.3);
const PULSE_RING_THICKNESS: f64 = 2.0;

/// Colour of the fallback ship shape while the sprite is unavailable.
const SHIP_PLACEHOLDER_COLOR: Rgba = Rgba::rgb(180, 220, 255);

/// What was drawn, for snapshots and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub planets: usize,
    pub objects: usize,
}

/// Everything the render pass reads.
pub struct RenderContext<'a> {
    pub world: &'a World,
    pub objects: &'a [Entity],
    pub ship: &'a Ship,
    pub camera: &'a Camera,
    pub viewport: Viewport,
    pub ship_sprite: AssetStatus,
}

/// Build the display list for one frame.
pub fn build_frame(ctx: &RenderContext<'_>) -> (Frame, RenderStats) {
    let mut frame = Frame::default();
    let mut stats = RenderStats::default();

    frame.push(DrawCommand::Clear { color: Rgba::BLACK });

    for (_entity, star) in ctx.world.query::<&Star>().iter() {
        draw_star(&mut frame, star, ctx.camera);
    }

    for (_entity, planet) in ctx.world.query::<&Planet>().iter() {
        if ctx.camera.is_in_viewport(planet, ctx.viewport) {
            draw_planet(&mut frame, planet, ctx.camera);
            stats.planets += 1;
        }
    }

    for &entity in ctx.objects {
        if let Ok(asteroid) = ctx.world.get::<&Asteroid>(entity) {
            if ctx.camera.is_in_viewport(&*asteroid, ctx.viewport) {
                draw_asteroid(&mut frame, &asteroid, ctx.camera);
                stats.objects += 1;
            }
        } else if let Ok(hole) = ctx.world.get::<&BlackHole>(entity) {
            if ctx.camera.is_in_viewport(&*hole, ctx.viewport) {
                draw_black_hole(&mut frame, &hole, ctx.camera);
                stats.objects += 1;
            }
        }
    }

    draw_ship(&mut frame, ctx.ship, ctx.camera, ctx.ship_sprite);
    draw_hud(&mut frame, &HudView::from_ship(ctx.ship));

    (frame, stats)
}

/// Stars shift by a fraction of the camera offset, so they drift slower
/// than the foreground.
pub fn draw_star(frame: &mut Frame, star: &Star, camera: &Camera) {
    frame.push(DrawCommand::FillCircle {
        center: star.position - camera.position * star.parallax_factor,
        radius: star.size,
        color: Rgba::WHITE.with_alpha(star.brightness as f32),
    });
}

pub fn draw_planet(frame: &mut Frame, planet: &Planet, camera: &Camera) {
    let center = camera.world_to_screen(planet.position);

    if let Some(rings) = &planet.rings {
        frame.push(ring_half(planet, rings, center, EllipseHalf::Back));
    }
    frame.push(DrawCommand::FillCircle {
        center,
        radius: planet.radius,
        color: planet.color,
    });
    if let Some(rings) = &planet.rings {
        frame.push(ring_half(planet, rings, center, EllipseHalf::Front));
    }
}

fn ring_half(
    planet: &Planet,
    rings: &PlanetRings,
    center: Vec2,
    half: EllipseHalf,
) -> DrawCommand {
    DrawCommand::HalfEllipse {
        center,
        radius_x: planet.radius + rings.width,
        radius_y: planet.radius * PLANET_RING_FLATTEN,
        rotation: rings.angle,
        half,
        thickness: rings.width,
        color: rings.color,
    }
}

pub fn draw_asteroid(frame: &mut Frame, asteroid: &Asteroid, camera: &Camera) {
    frame.push(DrawCommand::FillRect {
        origin: camera.world_to_screen(asteroid.position),
        size: Vec2::new(asteroid.width, asteroid.height),
        color: Rgba::GRAY,
    });
}

/// Dark core, event-horizon glow, and the pulsing ring.
pub fn draw_black_hole(frame: &mut Frame, hole: &BlackHole, camera: &Camera) {
    let center = camera.world_to_screen(hole.position);

    frame.push(DrawCommand::FillCircle {
        center,
        radius: hole.radius,
        color: Rgba::BLACK,
    });
    frame.push(DrawCommand::RadialGlow {
        center,
        inner_radius: hole.radius,
        outer_radius: hole.radius * GLOW_RADIUS_FACTOR,
        color: hole.event_horizon_color,
    });
    frame.push(DrawCommand::StrokeCircle {
        center,
        radius: pulse_ring_radius(hole),
        thickness: PULSE_RING_THICKNESS,
        color: PULSE_RING_COLOR,
    });
}

/// Radius of the pulsing ring for the current pulse phase.
pub fn pulse_ring_radius(hole: &BlackHole) -> f64 {
    hole.radius * PULSE_RING_FACTOR + PULSE_AMPLITUDE * hole.pulse_offset.sin()
}

/// The ship sprite rotated about its center. Until the sprite is ready a
/// nose-up triangle stands in for it.
pub fn draw_ship(frame: &mut Frame, ship: &Ship, camera: &Camera, sprite: AssetStatus) {
    let center = camera.world_to_screen(ship.center());
    let size = Vec2::new(ship.width, ship.height);

    match sprite {
        AssetStatus::Ready => frame.push(DrawCommand::Sprite {
            sprite: SpriteId::Ship,
            center,
            size,
            rotation: ship.angle,
        }),
        AssetStatus::Pending | AssetStatus::Failed => frame.push(DrawCommand::Polygon {
            points: placeholder_hull(center, size, ship.angle),
            color: SHIP_PLACEHOLDER_COLOR,
        }),
    }
}

fn placeholder_hull(center: Vec2, size: Vec2, angle: f64) -> Vec<Vec2> {
    let half = size * 0.5;
    let rot = Vec2::from_angle(angle);
    [
        Vec2::new(0.0, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .into_iter()
    .map(|p| center + rot.rotate(p))
    .collect()
}

pub fn draw_hud(frame: &mut Frame, hud: &HudView) {
    for (i, line) in hud.lines().into_iter().enumerate() {
        frame.push(DrawCommand::Text {
            text: line,
            position: Vec2::new(HUD_X, HUD_FIRST_LINE_Y + HUD_LINE_SPACING * i as f64),
            size: HUD_FONT_SIZE,
            color: Rgba::WHITE,
        });
    }
}

/// Advance every black hole's pulse phase. Visual only.
pub fn advance_pulses(world: &mut World, scale: f64) {
    for (_entity, hole) in world.query_mut::<&mut BlackHole>() {
        hole.pulse_offset = (hole.pulse_offset + PULSE_STEP * scale) % TAU;
    }
}
