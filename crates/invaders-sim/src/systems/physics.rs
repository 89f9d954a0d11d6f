//! Headless physics collaborator: linear motion and collision-begin detection.
//!
//! Only pairs the collision resolver handles are reported, and each touching
//! pair is reported once, on the first tick its boxes overlap.

use std::collections::HashSet;

use hecs::Entity;

use invaders_core::components::{Collidable, Hitbox};
use invaders_core::constants::DT;
use invaders_core::enums::EntityKind;
use invaders_core::types::{Position, Velocity};

use crate::registry::{EntityHandle, EntityRegistry};
use crate::systems::collision;

/// Two collidable entities started overlapping this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionBegin {
    pub first: EntityHandle,
    pub first_kind: EntityKind,
    pub second: EntityHandle,
    pub second_kind: EntityKind,
}

/// Integrate velocities: position += velocity * dt.
pub fn integrate(registry: &mut EntityRegistry) {
    for (_entity, (pos, vel)) in registry
        .world_mut()
        .query_mut::<(&mut Position, &Velocity)>()
    {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}

/// Remembers which pairs were already touching so only new contacts fire.
#[derive(Debug, Default)]
pub struct ContactTracker {
    touching: HashSet<(Entity, Entity)>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find handled pairs whose hitboxes overlap and were not overlapping on
    /// the previous call.
    pub fn detect(&mut self, registry: &EntityRegistry) -> Vec<CollisionBegin> {
        let bodies: Vec<(Entity, EntityKind, Position, Hitbox)> = registry
            .world()
            .query::<(&EntityKind, &Position, &Hitbox, &Collidable)>()
            .iter()
            .map(|(entity, (kind, pos, hitbox, _))| (entity, *kind, *pos, *hitbox))
            .collect();

        let mut touching = HashSet::new();
        let mut begins = Vec::new();

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                if !collision::handles(a.1, b.1) || !overlaps(&a.2, &a.3, &b.2, &b.3) {
                    continue;
                }
                let key = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
                if !self.touching.contains(&key) {
                    begins.push(CollisionBegin {
                        first: a.0,
                        first_kind: a.1,
                        second: b.0,
                        second_kind: b.1,
                    });
                }
                touching.insert(key);
            }
        }

        self.touching = touching;
        begins
    }

    /// Forget all contacts (session reset).
    pub fn clear(&mut self) {
        self.touching.clear();
    }
}

/// Strict AABB overlap; boxes that only share an edge do not touch.
pub fn overlaps(a_pos: &Position, a_box: &Hitbox, b_pos: &Position, b_box: &Hitbox) -> bool {
    a_pos.x < b_pos.x + b_box.width
        && b_pos.x < a_pos.x + a_box.width
        && a_pos.y < b_pos.y + b_box.height
        && b_pos.y < a_pos.y + a_box.height
}
