//! Host configuration read from the environment.
//!
//! A `.env` file is loaded first (see `main`). Missing variables keep
//! their defaults; values that do not parse are logged and ignored.

use std::str::FromStr;

use voidrunner_core::constants::SHIP_SPRITE_PATH;
use voidrunner_sim::SimConfig;

pub const SEED_VAR: &str = "VOIDRUNNER_SEED";
pub const WORLD_WIDTH_VAR: &str = "VOIDRUNNER_WORLD_WIDTH";
pub const WORLD_HEIGHT_VAR: &str = "VOIDRUNNER_WORLD_HEIGHT";
pub const STARS_VAR: &str = "VOIDRUNNER_STARS";
pub const PLANETS_VAR: &str = "VOIDRUNNER_PLANETS";
pub const SHIP_SPRITE_VAR: &str = "VOIDRUNNER_SHIP_SPRITE";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Log output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }

    /// Only `json` selects JSON output.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Everything the host needs to start a session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Path of the ship sprite image.
    pub ship_sprite: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            ship_sprite: SHIP_SPRITE_PATH.to_owned(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mut sim = SimConfig {
            seed: parse_var(&lookup, SEED_VAR, defaults.sim.seed),
            world_width: parse_var(&lookup, WORLD_WIDTH_VAR, defaults.sim.world_width),
            world_height: parse_var(&lookup, WORLD_HEIGHT_VAR, defaults.sim.world_height),
            num_stars: parse_var(&lookup, STARS_VAR, defaults.sim.num_stars),
            num_planets: parse_var(&lookup, PLANETS_VAR, defaults.sim.num_planets),
            viewport: defaults.sim.viewport,
        };

        if let Err(e) = sim.validate() {
            tracing::warn!(error = %e, "invalid world size, using defaults");
            sim.world_width = defaults.sim.world_width;
            sim.world_height = defaults.sim.world_height;
        }

        let ship_sprite = lookup(SHIP_SPRITE_VAR)
            .map(|path| path.trim().to_owned())
            .filter(|path| !path.is_empty())
            .unwrap_or(defaults.ship_sprite);

        Self { sim, ship_sprite }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "unparsable value, using default");
            default
        }
    }
}
