//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems,
//! not components. `EntityKind`, `Position` and `Velocity` are used as
//! components directly.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned collision box anchored at the entity's position (top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f64,
    pub height: f64,
}

/// Marks an entity as taking part in collision detection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collidable;

/// Removes the entity on the first tick at or after `at_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    pub at_tick: u64,
}

/// Per-tick behavior bound to one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Control {
    Enemy(EnemyPattern),
    /// Moves `direction * speed` pixels every tick.
    Projectile { direction: DVec2, speed: f64 },
}

/// Movement state for an enemy: steady descent plus a horizontal patrol
/// around the column it spawned in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPattern {
    /// X coordinate the patrol is centered on.
    pub anchor_x: f64,
    /// +1.0 moving right, -1.0 moving left.
    pub heading: f64,
}

impl Control {
    pub fn projectile(direction: DVec2, speed: f64) -> Self {
        Control::Projectile {
            direction: direction.normalize_or_zero(),
            speed,
        }
    }

    pub fn enemy(anchor_x: f64) -> Self {
        Control::Enemy(EnemyPattern {
            anchor_x,
            heading: 1.0,
        })
    }
}
