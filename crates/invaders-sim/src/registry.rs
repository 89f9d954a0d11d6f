//! Entity registry: sole owner of every live game object.
//!
//! Wraps a hecs `World`. Handles are generational indices, so a handle to a
//! removed entity can never alias a newer one; accessors on such a handle
//! return `SimError::StaleEntityReference` and `remove` is a no-op.

use hecs::{DynamicBundle, Entity, EntityBuilder, World};

use invaders_core::components::{Collidable, Control, Hitbox};
use invaders_core::constants::*;
use invaders_core::enums::EntityKind;
use invaders_core::errors::SimError;
use invaders_core::types::{PlayArea, Position};

/// Stable reference to a registered entity.
pub type EntityHandle = Entity;

/// Owns all entities and their components.
#[derive(Default)]
pub struct EntityRegistry {
    world: World,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new entity of `kind` at `position`. Collidable kinds get a
    /// `Collidable` marker; every kind gets its hitbox.
    pub fn spawn(&mut self, kind: EntityKind, position: Position) -> EntityHandle {
        self.spawn_with(kind, position, ())
    }

    /// `spawn` with extra components (control, velocity, expiry) attached in
    /// the same step.
    pub fn spawn_with(
        &mut self,
        kind: EntityKind,
        position: Position,
        extra: impl DynamicBundle,
    ) -> EntityHandle {
        let mut builder = EntityBuilder::new();
        builder.add(kind).add(position).add(hitbox_for(kind));
        if kind.is_collidable() {
            builder.add(Collidable);
        }
        builder.add_bundle(extra);
        self.world.spawn(builder.build())
    }

    /// Remove an entity and every component attached to it (including its
    /// control). Returns false if the handle was already removed.
    pub fn remove(&mut self, handle: EntityHandle) -> bool {
        self.world.despawn(handle).is_ok()
    }

    /// Handles of all live entities whose kind is in `kinds`.
    pub fn query(&self, kinds: &[EntityKind]) -> Vec<EntityHandle> {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, kind)| kinds.contains(*kind))
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Call `f` once for every entity of `kinds` positioned outside `bounds`.
    ///
    /// The matching set is collected before `f` runs, so `f` may remove
    /// entities without skipping or double-visiting the rest. Matches that
    /// `f` already removed are not visited.
    pub fn for_each_out_of_bounds<F>(&mut self, bounds: &PlayArea, kinds: &[EntityKind], mut f: F)
    where
        F: FnMut(&mut Self, EntityHandle),
    {
        let outside: Vec<EntityHandle> = self
            .world
            .query::<(&EntityKind, &Position)>()
            .iter()
            .filter(|(_, (kind, pos))| kinds.contains(*kind) && bounds.is_outside(pos))
            .map(|(entity, _)| entity)
            .collect();

        for handle in outside {
            if self.contains(handle) {
                f(self, handle);
            }
        }
    }

    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.world.contains(handle)
    }

    pub fn kind(&self, handle: EntityHandle) -> Option<EntityKind> {
        self.world.get::<&EntityKind>(handle).ok().map(|k| *k)
    }

    pub fn position(&self, handle: EntityHandle) -> Result<Position, SimError> {
        self.world
            .get::<&Position>(handle)
            .map(|p| *p)
            .map_err(|_| stale(handle))
    }

    pub fn translate(&mut self, handle: EntityHandle, dx: f64, dy: f64) -> Result<(), SimError> {
        let mut pos = self
            .world
            .get::<&mut Position>(handle)
            .map_err(|_| stale(handle))?;
        *pos = pos.translated(dx, dy);
        Ok(())
    }

    pub fn control(&self, handle: EntityHandle) -> Option<Control> {
        self.world.get::<&Control>(handle).ok().map(|c| (*c).clone())
    }

    /// Number of live entities of one kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| **k == kind)
            .count()
    }

    /// Total number of live entities.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    /// Read-only access for systems that query components directly.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for systems that iterate components in place.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

fn stale(handle: EntityHandle) -> SimError {
    SimError::StaleEntityReference(handle.to_bits().get())
}

/// Collision box per kind.
pub fn hitbox_for(kind: EntityKind) -> Hitbox {
    match kind {
        EntityKind::Player => Hitbox {
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
        },
        EntityKind::Enemy => Hitbox {
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
        },
        EntityKind::PlayerBullet | EntityKind::EnemyBullet => Hitbox {
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
        },
        EntityKind::LevelMarker => Hitbox {
            width: LEVEL_BANNER_WIDTH,
            height: LEVEL_BANNER_HEIGHT,
        },
    }
}

#[cfg(test)]
mod tests {
    use invaders_core::components::Expiry;
    use invaders_core::types::Velocity;

    use super::*;

    #[test]
    fn spawn_and_query_by_kind() {
        let mut registry = EntityRegistry::new();
        let player = registry.spawn(EntityKind::Player, Position::new(280.0, 760.0));
        let enemy = registry.spawn(EntityKind::Enemy, Position::new(0.0, 100.0));
        let bullet = registry.spawn(EntityKind::PlayerBullet, Position::new(292.0, 760.0));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.query(&[EntityKind::Player]), vec![player]);

        let mut shots = registry.query(&[EntityKind::PlayerBullet, EntityKind::Enemy]);
        shots.sort();
        let mut expected = vec![enemy, bullet];
        expected.sort();
        assert_eq!(shots, expected);
        assert_eq!(registry.kind(bullet), Some(EntityKind::PlayerBullet));
    }

    #[test]
    fn level_markers_are_not_collidable() {
        let mut registry = EntityRegistry::new();
        let marker = registry.spawn(EntityKind::LevelMarker, Position::new(0.0, 400.0));
        let enemy = registry.spawn(EntityKind::Enemy, Position::new(0.0, 100.0));

        assert!(registry.world().get::<&Collidable>(marker).is_err());
        assert!(registry.world().get::<&Collidable>(enemy).is_ok());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = EntityRegistry::new();
        let keep = registry.spawn(EntityKind::Enemy, Position::new(0.0, 100.0));
        let gone = registry.spawn(EntityKind::Enemy, Position::new(60.0, 100.0));

        assert!(registry.remove(gone));
        let after_first = registry.query(&[EntityKind::Enemy]);

        assert!(!registry.remove(gone));
        let after_second = registry.query(&[EntityKind::Enemy]);

        assert_eq!(after_first, after_second);
        assert_eq!(after_second, vec![keep]);
        assert!(!registry.contains(gone));
    }

    #[test]
    fn stale_handle_accessors_report_error() {
        let mut registry = EntityRegistry::new();
        let enemy = registry.spawn(EntityKind::Enemy, Position::new(0.0, 100.0));
        registry.remove(enemy);

        assert!(matches!(
            registry.position(enemy),
            Err(SimError::StaleEntityReference(_))
        ));
        assert!(registry.translate(enemy, 1.0, 0.0).is_err());
        assert_eq!(registry.kind(enemy), None);
    }

    #[test]
    fn spawn_with_attaches_extra_components() {
        let mut registry = EntityRegistry::new();
        let banner = registry.spawn_with(
            EntityKind::LevelMarker,
            Position::new(220.0, 400.0),
            (Velocity::new(0.0, -148.0), Expiry { at_tick: 180 }),
        );
        let bullet = registry.spawn_with(
            EntityKind::EnemyBullet,
            Position::new(16.0, 140.0),
            (Control::enemy(0.0),),
        );

        let world = registry.world();
        assert_eq!(world.get::<&Expiry>(banner).unwrap().at_tick, 180);
        assert_eq!(world.get::<&Velocity>(banner).unwrap().y, -148.0);
        assert!(world.get::<&Collidable>(banner).is_err());
        assert!(world.get::<&Collidable>(bullet).is_ok());
        assert_eq!(registry.control(bullet), Some(Control::enemy(0.0)));
        assert_eq!(registry.kind(bullet), Some(EntityKind::EnemyBullet));
    }

    #[test]
    fn removal_detaches_control() {
        let mut registry = EntityRegistry::new();
        let enemy = registry.spawn_with(
            EntityKind::Enemy,
            Position::new(0.0, 100.0),
            (Control::enemy(0.0),),
        );
        assert!(registry.control(enemy).is_some());

        registry.remove(enemy);
        assert!(registry.control(enemy).is_none());
        assert_eq!(registry.world().query::<&Control>().iter().count(), 0);
    }

    #[test]
    fn out_of_bounds_visits_each_once_while_removing() {
        let mut registry = EntityRegistry::new();
        let bounds = PlayArea::default();
        let a = registry.spawn(EntityKind::PlayerBullet, Position::new(10.0, -1.0));
        let b = registry.spawn(EntityKind::EnemyBullet, Position::new(10.0, 801.0));
        let c = registry.spawn(EntityKind::PlayerBullet, Position::new(-5.0, 10.0));
        let inside = registry.spawn(EntityKind::PlayerBullet, Position::new(10.0, 10.0));
        // Out of bounds but not a projectile kind.
        let enemy = registry.spawn(EntityKind::Enemy, Position::new(10.0, -50.0));

        let mut visited = Vec::new();
        registry.for_each_out_of_bounds(
            &bounds,
            &[EntityKind::PlayerBullet, EntityKind::EnemyBullet],
            |reg, handle| {
                visited.push(handle);
                reg.remove(handle);
                reg.remove(c);
            },
        );

        let mut unique = visited.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), visited.len(), "no entity visited twice");
        assert!(visited.contains(&a));
        assert!(visited.contains(&b));
        assert!(!registry.contains(a));
        assert!(!registry.contains(b));
        assert!(!registry.contains(c));
        assert!(registry.contains(inside));
        assert!(registry.contains(enemy));
    }

    #[test]
    fn translate_leaves_velocity_unset() {
        let mut registry = EntityRegistry::new();
        let player = registry.spawn(EntityKind::Player, Position::new(100.0, 760.0));
        registry.translate(player, -5.0, 0.0).unwrap();
        assert_eq!(registry.position(player).unwrap(), Position::new(95.0, 760.0));

        assert!(registry.world().get::<&Velocity>(player).is_err());
    }
}
