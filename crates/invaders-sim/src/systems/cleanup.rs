//! Cleanup system: sweeps projectiles that left the play area and removes
//! expired entities.

use hecs::Entity;

use invaders_core::components::Expiry;
use invaders_core::enums::EntityKind;
use invaders_core::types::PlayArea;

use crate::registry::EntityRegistry;

const SWEPT_KINDS: [EntityKind; 2] = [EntityKind::PlayerBullet, EntityKind::EnemyBullet];

/// Run both passes. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    registry: &mut EntityRegistry,
    area: &PlayArea,
    now: u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    let swept = sweep_out_of_bounds(registry, area);
    if swept > 0 {
        tracing::trace!(swept, "projectiles left the play area");
    }
    remove_expired(registry, now, despawn_buffer);
}

/// Remove every projectile outside the play area. Returns how many were removed.
pub fn sweep_out_of_bounds(registry: &mut EntityRegistry, area: &PlayArea) -> u32 {
    let mut removed = 0;
    registry.for_each_out_of_bounds(area, &SWEPT_KINDS, |registry, handle| {
        if registry.remove(handle) {
            removed += 1;
        }
    });
    removed
}

/// Remove entities whose expiry tick has been reached.
pub fn remove_expired(registry: &mut EntityRegistry, now: u64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, expiry) in registry.world_mut().query_mut::<&Expiry>() {
        if expiry.at_tick <= now {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        registry.remove(entity);
    }
}
