//! Systems that operate on the entity registry each tick.
//!
//! Systems are free functions over `&mut EntityRegistry` (or `&EntityRegistry`
//! for read-only work). Persistent state lives in components or in the engine.

pub mod cleanup;
pub mod collision;
pub mod controls;
pub mod enemy_fire;
pub mod input;
pub mod physics;
pub mod snapshot;
