//! Invaders terminal host.
//!
//! Runs the simulation on a game-loop thread, feeds it input from the
//! attract-mode autopilot, and answers its prompts through a `Dialog`.

pub mod autopilot;
pub mod config;
pub mod dialog;
pub mod game_loop;
pub mod state;

pub use invaders_core as core;
