#[cfg(test)]
mod tests {
    use crate::commands::InputEvent;
    use crate::components::{Asteroid, BlackHole, Planet, Ship};
    use crate::draw::{glow_alpha, DrawCommand, Frame};
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::state::HudView;
    use crate::types::{Body, BoundingBox, Rgba, SimTime, Vec2};

    fn black_hole(x: f64, y: f64, radius: f64) -> BlackHole {
        BlackHole {
            position: Vec2::new(x, y),
            mass: 60.0,
            radius,
            event_horizon_color: Rgba::new(255, 255, 0, 0.8),
            pulse_offset: 0.0,
        }
    }

    // ---- Bounding boxes ----

    #[test]
    fn test_corner_and_center_boxes_differ() {
        let origin = Vec2::new(100.0, 200.0);
        let size = Vec2::new(40.0, 20.0);

        let corner = BoundingBox::from_corner(origin, size);
        assert_eq!(corner.min_x, 100.0);
        assert_eq!(corner.max_y, 220.0);

        let center = BoundingBox::from_center(origin, size);
        assert_eq!(center.min_x, 80.0);
        assert_eq!(center.max_x, 120.0);
        assert_eq!(center.min_y, 190.0);
        assert_eq!(center.max_y, 210.0);

        assert_eq!(corner.width(), center.width());
        assert_eq!(corner.height(), center.height());
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = BoundingBox::from_corner(Vec2::new(0.0, 0.0), Vec2::new(50.0, 50.0));
        let b = BoundingBox::from_corner(Vec2::new(25.0, 25.0), Vec2::new(50.0, 50.0));
        let c = BoundingBox::from_corner(Vec2::new(500.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_intersects_is_reflexive_for_non_empty_boxes() {
        let a = BoundingBox::from_center(Vec2::new(10.0, 10.0), Vec2::new(4.0, 4.0));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = BoundingBox::from_corner(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = BoundingBox::from_corner(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    // ---- Entity extents ----

    #[test]
    fn test_planet_extent_is_diameter() {
        let planet = Planet {
            position: Vec2::new(300.0, 300.0),
            radius: 35.0,
            color: Rgba::rgb(10, 20, 30),
            rings: None,
        };
        assert_eq!(planet.extent(), Vec2::splat(70.0));
        let cull = planet.cull_box();
        assert_eq!(cull.min_x, 265.0);
        assert_eq!(cull.max_x, 335.0);
    }

    #[test]
    fn test_black_hole_extent_covers_glow() {
        let bh = black_hole(700.0, 300.0, 20.0);
        assert_eq!(bh.extent(), Vec2::splat(100.0));
        assert_eq!(bh.pull_radius(), 100.0);
    }

    #[test]
    fn test_asteroid_collision_box_is_corner_anchored() {
        let asteroid = Asteroid {
            position: Vec2::new(200.0, 200.0),
            width: 50.0,
            height: 50.0,
        };
        let bb = asteroid.collision_box();
        assert_eq!(bb.min_x, 200.0);
        assert_eq!(bb.max_x, 250.0);
    }

    #[test]
    fn test_ship_center() {
        let ship = Ship::default();
        assert_eq!(ship.center(), Vec2::new(420.0, 320.0));
        assert!(!ship.is_disabled());
    }

    // ---- Presets ----

    #[test]
    fn test_black_hole_presets() {
        let stellar = BlackHoleClass::Stellar.preset();
        assert_eq!(stellar.mass, 10.0);
        assert_eq!(stellar.radius, 30.0);

        let intermediate = BlackHoleClass::Intermediate.preset();
        assert_eq!(intermediate.mass, 100.0);
        assert_eq!(intermediate.radius, 50.0);

        let supermassive = BlackHoleClass::Supermassive.preset();
        assert_eq!(supermassive.mass, 1_000_000.0);
        assert_eq!(supermassive.radius, 150.0);
    }

    #[test]
    fn test_unknown_black_hole_name_falls_back_to_stellar() {
        assert_eq!(BlackHoleClass::parse("quasar"), BlackHoleClass::Stellar);
        assert_eq!(BlackHoleClass::parse(""), BlackHoleClass::Stellar);
        assert_eq!(
            BlackHoleClass::parse("Supermassive"),
            BlackHoleClass::Supermassive
        );
        assert_eq!(BlackHoleClass::from_name("quasar"), None);
    }

    // ---- Input ----

    #[test]
    fn test_input_event_from_key_name() {
        assert_eq!(
            InputEvent::from_key_name("ArrowUp", true),
            Some(InputEvent::KeyDown(Key::ArrowUp))
        );
        assert_eq!(
            InputEvent::from_key_name("ArrowLeft", false),
            Some(InputEvent::KeyUp(Key::ArrowLeft))
        );
        assert_eq!(InputEvent::from_key_name("Space", true), None);
    }

    #[test]
    fn test_input_event_serde() {
        let events = vec![
            InputEvent::KeyDown(Key::ArrowUp),
            InputEvent::KeyUp(Key::ArrowRight),
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    // ---- HUD ----

    #[test]
    fn test_hud_percentages_round() {
        let mut ship = Ship::default();
        ship.fuel = 33.4;
        ship.shields = 66.5;
        ship.health = 100.0;
        let hud = HudView::from_ship(&ship);
        assert_eq!(hud.fuel_pct, 33);
        assert_eq!(hud.shields_pct, 67);
        assert_eq!(hud.health_pct, 100);
        assert_eq!(
            hud.lines(),
            [
                "Fuel: 33%".to_string(),
                "Shields: 67%".to_string(),
                "Health: 100%".to_string()
            ]
        );
    }

    // ---- Drawing ----

    #[test]
    fn test_glow_alpha_stops() {
        assert_eq!(glow_alpha(0.0, 0.7), 0.0);
        assert!((glow_alpha(0.7, 0.7) - 1.0).abs() < 1e-12);
        assert_eq!(glow_alpha(1.0, 0.7), 0.0);
        assert!((glow_alpha(0.35, 0.7) - 0.5).abs() < 1e-12);
        assert_eq!(glow_alpha(-3.0, 0.7), 0.0);
    }

    #[test]
    fn test_frame_serde() {
        let mut frame = Frame::default();
        frame.push(DrawCommand::Clear { color: Rgba::BLACK });
        frame.push(DrawCommand::Text {
            text: "Fuel: 100%".into(),
            position: Vec2::new(10.0, 20.0),
            size: 16.0,
            color: Rgba::WHITE,
        });
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }

    #[test]
    fn test_sim_event_serde() {
        let event = SimEvent::Collision {
            position: Vec2::new(1.0, 2.0),
            shields: 90.0,
            health: 100.0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Collision\""));
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-12);
    }
}
