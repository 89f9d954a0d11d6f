//! Gameplay core for Invaders.
//!
//! Owns the entity registry, runs systems at a fixed tick rate,
//! drives the level and game-over state machines, and produces
//! GameStateSnapshots for the host.

pub mod engine;
pub mod game_over;
pub mod level;
pub mod persistence;
pub mod registry;
pub mod session;
pub mod systems;
pub mod timer;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use invaders_core as core;
