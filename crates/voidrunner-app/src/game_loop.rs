//! Game loop: one engine frame per presented window frame.
//!
//! macroquad calls back once per display refresh. Each iteration forwards
//! key transitions, reports size changes, runs update and render, replays
//! the display list, and logs whatever the engine emitted.

use std::time::Duration;

use macroquad::time::get_frame_time;
use macroquad::window::{next_frame, screen_height, screen_width};

use voidrunner_core::enums::{AssetStatus, SpriteId};
use voidrunner_core::events::SimEvent;
use voidrunner_core::types::Viewport;
use voidrunner_sim::clock::FrameClock;
use voidrunner_sim::SimulationEngine;

use crate::canvas::Canvas;
use crate::config::AppConfig;
use crate::input;

/// Frame time as measured by macroquad.
#[derive(Debug, Default)]
pub struct MacroquadClock;

impl FrameClock for MacroquadClock {
    fn next_dt(&mut self) -> Duration {
        Duration::from_secs_f32(get_frame_time().max(0.0))
    }
}

/// Run until the window closes.
pub async fn run(mut config: AppConfig) {
    config.sim.viewport = Viewport::new(screen_width() as f64, screen_height() as f64);

    let mut engine = match SimulationEngine::try_new(config.sim.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "cannot start simulation");
            return;
        }
    };

    let mut canvas = Canvas::default();
    let status = match canvas.load_ship_sprite(&config.ship_sprite).await {
        Ok(()) => AssetStatus::Ready,
        Err(e) => {
            tracing::warn!(path = %config.ship_sprite, error = %e, "ship sprite unavailable");
            AssetStatus::Failed
        }
    };
    engine.set_asset_status(SpriteId::Ship, status);

    let mut clock = MacroquadClock;
    let mut surface = (screen_width(), screen_height());

    loop {
        let size = (screen_width(), screen_height());
        if size != surface {
            surface = size;
            if let Err(e) = engine.resize(size.0 as f64, size.1 as f64) {
                tracing::warn!(error = %e, "ignoring resize");
            }
        }

        for event in input::poll() {
            engine.handle_input(event);
        }

        let frame = engine.frame(clock.next_dt());
        canvas.draw(&frame);

        for event in engine.drain_events() {
            log_event(&event);
        }

        next_frame().await;
    }
}

fn log_event(event: &SimEvent) {
    match event {
        SimEvent::Collision {
            shields, health, ..
        } => tracing::trace!(shields, health, "collision"),
        SimEvent::ShipDisabled { tick } => tracing::info!(tick, "ship disabled"),
    }
}
