//! Snapshot builder: reports the visible game state after a frame.

use voidrunner_core::components::Ship;
use voidrunner_core::state::{GameStateSnapshot, HudView, ShipView};
use voidrunner_core::types::{SimTime, Viewport};

use crate::camera::Camera;
use crate::systems::render::RenderStats;

pub fn build_snapshot(
    time: &SimTime,
    ship: &Ship,
    camera: &Camera,
    viewport: Viewport,
    stats: RenderStats,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        ship: ShipView::from(ship),
        camera: camera.position,
        viewport,
        hud: HudView::from_ship(ship),
        visible_planets: stats.planets,
        visible_objects: stats.objects,
    }
}
