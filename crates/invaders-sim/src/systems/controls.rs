//! Per-tick entity controls.
//!
//! A `Control` is a component, so an entity's control is dropped with the
//! entity and never runs after removal.

use invaders_core::components::{Control, EnemyPattern};
use invaders_core::constants::*;
use invaders_core::types::Position;

use crate::registry::EntityRegistry;

/// Apply every live control to its entity.
pub fn run(registry: &mut EntityRegistry) {
    for (_entity, (control, pos)) in registry
        .world_mut()
        .query_mut::<(&mut Control, &mut Position)>()
    {
        step(control, pos);
    }
}

/// Advance one control by one tick.
pub fn step(control: &mut Control, pos: &mut Position) {
    match control {
        Control::Projectile { direction, speed } => {
            pos.x += direction.x * *speed;
            pos.y += direction.y * *speed;
        }
        Control::Enemy(pattern) => step_enemy(pattern, pos),
    }
}

/// Patrol between `anchor_x` and `anchor_x + ENEMY_PATROL_RANGE` while
/// drifting down to the floor row.
fn step_enemy(pattern: &mut EnemyPattern, pos: &mut Position) {
    pos.x += pattern.heading * ENEMY_PATROL_SPEED * DT;
    let right_edge = pattern.anchor_x + ENEMY_PATROL_RANGE;
    if pattern.heading > 0.0 && pos.x >= right_edge {
        pos.x = right_edge;
        pattern.heading = -1.0;
    } else if pattern.heading < 0.0 && pos.x <= pattern.anchor_x {
        pos.x = pattern.anchor_x;
        pattern.heading = 1.0;
    }

    if pos.y < ENEMY_FLOOR_Y {
        pos.y = (pos.y + ENEMY_DESCENT_SPEED * DT).min(ENEMY_FLOOR_Y);
    }
}
