// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use macroquad::window::Conf;

use voidrunner_app::config::{AppConfig, LogFormat};
use voidrunner_app::{game_loop, logging};
use voidrunner_core::types::Viewport;

fn window_conf() -> Conf {
    let viewport = Viewport::default();
    Conf {
        window_title: "Voidrunner".to_owned(),
        window_width: viewport.width as i32,
        window_height: viewport.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let _ = dotenvy::dotenv();
    logging::init_tracing(LogFormat::from_env());

    let config = AppConfig::from_env();
    game_loop::run(config).await;
}
