//! Replays display lists with macroquad.
//!
//! Geometry that macroquad has no primitive for (half ellipses, radial
//! glows) is tessellated here by pure functions so it can be tested
//! without a window.

use std::f64::consts::{PI, TAU};

use macroquad::color::Color;
use macroquad::math::vec2;
use macroquad::shapes::{draw_circle, draw_circle_lines, draw_line, draw_rectangle, draw_triangle};
use macroquad::text::draw_text;
use macroquad::texture::{draw_texture_ex, load_texture, DrawTextureParams, Texture2D};
use macroquad::window::clear_background;

use voidrunner_core::constants::GLOW_PEAK;
use voidrunner_core::draw::{glow_alpha, DrawCommand, Frame};
use voidrunner_core::enums::{EllipseHalf, SpriteId};
use voidrunner_core::types::{Rgba, Vec2};

/// Line segments per half ellipse.
const ELLIPSE_SEGMENTS: usize = 32;
/// Concentric rings used to approximate a radial gradient.
const GLOW_RINGS: usize = 24;

/// Loaded textures.
#[derive(Default)]
pub struct Canvas {
    ship: Option<Texture2D>,
}

impl Canvas {
    /// Load the ship sprite from `path`.
    pub async fn load_ship_sprite(&mut self, path: &str) -> Result<(), macroquad::Error> {
        let texture = load_texture(path).await?;
        self.ship = Some(texture);
        Ok(())
    }

    /// Paint every command in order.
    pub fn draw(&self, frame: &Frame) {
        for command in &frame.commands {
            self.draw_command(command);
        }
    }

    fn draw_command(&self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { color } => clear_background(to_color(*color)),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => draw_circle(
                center.x as f32,
                center.y as f32,
                *radius as f32,
                to_color(*color),
            ),
            DrawCommand::RadialGlow {
                center,
                inner_radius,
                outer_radius,
                color,
            } => {
                let thickness = ((outer_radius - inner_radius) / GLOW_RINGS as f64) as f32 + 1.0;
                for (radius, alpha) in glow_rings(*inner_radius, *outer_radius, GLOW_RINGS) {
                    let shade = color.with_alpha(color.a * alpha as f32);
                    draw_circle_lines(
                        center.x as f32,
                        center.y as f32,
                        radius as f32,
                        thickness,
                        to_color(shade),
                    );
                }
            }
            DrawCommand::StrokeCircle {
                center,
                radius,
                thickness,
                color,
            } => draw_circle_lines(
                center.x as f32,
                center.y as f32,
                *radius as f32,
                *thickness as f32,
                to_color(*color),
            ),
            DrawCommand::FillRect {
                origin,
                size,
                color,
            } => draw_rectangle(
                origin.x as f32,
                origin.y as f32,
                size.x as f32,
                size.y as f32,
                to_color(*color),
            ),
            DrawCommand::HalfEllipse {
                center,
                radius_x,
                radius_y,
                rotation,
                half,
                thickness,
                color,
            } => {
                let points = half_ellipse_points(
                    *center,
                    *radius_x,
                    *radius_y,
                    *rotation,
                    *half,
                    ELLIPSE_SEGMENTS,
                );
                draw_polyline(&points, *thickness as f32, to_color(*color));
            }
            DrawCommand::Sprite {
                sprite,
                center,
                size,
                rotation,
            } => match sprite {
                SpriteId::Ship => {
                    if let Some(texture) = &self.ship {
                        draw_texture_ex(
                            texture,
                            (center.x - size.x / 2.0) as f32,
                            (center.y - size.y / 2.0) as f32,
                            macroquad::color::WHITE,
                            DrawTextureParams {
                                dest_size: Some(vec2(size.x as f32, size.y as f32)),
                                rotation: *rotation as f32,
                                ..Default::default()
                            },
                        );
                    }
                }
            },
            DrawCommand::Polygon { points, color } => {
                let color = to_color(*color);
                for [a, b, c] in fan_triangles(points) {
                    draw_triangle(
                        vec2(a.x as f32, a.y as f32),
                        vec2(b.x as f32, b.y as f32),
                        vec2(c.x as f32, c.y as f32),
                        color,
                    );
                }
            }
            DrawCommand::Text {
                text,
                position,
                size,
                color,
            } => {
                draw_text(
                    text,
                    position.x as f32,
                    position.y as f32,
                    *size as f32,
                    to_color(*color),
                );
            }
        }
    }
}

pub fn to_color(rgba: Rgba) -> Color {
    Color::new(
        rgba.r as f32 / 255.0,
        rgba.g as f32 / 255.0,
        rgba.b as f32 / 255.0,
        rgba.a.clamp(0.0, 1.0),
    )
}

/// Start and end angle of one ellipse half, in the ellipse's own frame.
/// The back half is the upper one on screen.
pub fn half_angles(half: EllipseHalf) -> (f64, f64) {
    match half {
        EllipseHalf::Back => (PI, TAU),
        EllipseHalf::Front => (0.0, PI),
    }
}

/// Points along one half of a rotated ellipse, endpoints included.
pub fn half_ellipse_points(
    center: Vec2,
    radius_x: f64,
    radius_y: f64,
    rotation: f64,
    half: EllipseHalf,
    segments: usize,
) -> Vec<Vec2> {
    let segments = segments.max(1);
    let (start, end) = half_angles(half);
    let rot = Vec2::from_angle(rotation);
    (0..=segments)
        .map(|i| {
            let t = start + (end - start) * i as f64 / segments as f64;
            center + rot.rotate(Vec2::new(radius_x * t.cos(), radius_y * t.sin()))
        })
        .collect()
}

/// Radii and opacity multipliers for the rings of a radial glow.
pub fn glow_rings(inner: f64, outer: f64, rings: usize) -> Vec<(f64, f64)> {
    let rings = rings.max(1);
    (0..rings)
        .map(|i| {
            let t = (i as f64 + 0.5) / rings as f64;
            (inner + (outer - inner) * t, glow_alpha(t, GLOW_PEAK))
        })
        .collect()
}

/// Triangle fan over a convex polygon.
pub fn fan_triangles(points: &[Vec2]) -> Vec<[Vec2; 3]> {
    match points.split_first() {
        Some((&first, rest)) => rest
            .windows(2)
            .map(|pair| [first, pair[0], pair[1]])
            .collect(),
        None => Vec::new(),
    }
}

fn draw_polyline(points: &[Vec2], thickness: f32, color: Color) {
    for pair in points.windows(2) {
        draw_line(
            pair[0].x as f32,
            pair[0].y as f32,
            pair[1].x as f32,
            pair[1].y as f32,
            thickness,
            color,
        );
    }
}
