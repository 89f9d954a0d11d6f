use std::{env, path::Path, path::PathBuf, str::FromStr};

use invaders_core::constants::ENEMY_FIRE_CHANCE;
use invaders_sim::SimConfig;

// Runtime settings for the binary (not gameplay tuning).

/// Load `.env` from the working directory; safe to ignore when not present.
pub fn load_env() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Load variables from a specific env file. Variables already set win.
pub fn load_env_from(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

pub fn save_dir() -> PathBuf {
    env::var("INVADERS_SAVE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

pub fn seed() -> u64 {
    parse_or(env::var("INVADERS_SEED").ok().as_deref(), 42)
}

/// Pace ticks to wall-clock time. Off runs as fast as possible.
pub fn realtime() -> bool {
    parse_flag(env::var("INVADERS_REALTIME").ok().as_deref(), true)
}

/// Stop after this many ticks. Unset runs until the session ends.
pub fn max_ticks() -> Option<u64> {
    env::var("INVADERS_MAX_TICKS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
}

pub fn enemy_fire_chance() -> f64 {
    let chance = parse_or(
        env::var("INVADERS_ENEMY_FIRE_CHANCE").ok().as_deref(),
        ENEMY_FIRE_CHANCE,
    );
    chance.clamp(0.0, 1.0)
}

pub fn sim_config() -> SimConfig {
    SimConfig {
        seed: seed(),
        enemy_fire_chance: enemy_fire_chance(),
        ..Default::default()
    }
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
