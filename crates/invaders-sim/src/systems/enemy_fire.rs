//! Enemy fire: each enemy rolls once per tick to drop a bullet.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::enums::EntityKind;
use invaders_core::types::Position;

use crate::registry::EntityRegistry;
use crate::world_setup;

/// Roll for every live enemy. Returns the number of bullets fired.
pub fn run(registry: &mut EntityRegistry, rng: &mut ChaCha8Rng, chance: f64) -> u32 {
    if chance <= 0.0 || chance.is_nan() {
        return 0;
    }
    let chance = chance.min(1.0);

    let shooters: Vec<Position> = registry
        .world()
        .query::<(&EntityKind, &Position)>()
        .iter()
        .filter(|(_, (kind, _))| **kind == EntityKind::Enemy)
        .map(|(_, (_, pos))| *pos)
        .collect();

    let mut fired = 0;
    for pos in shooters {
        if rng.gen_bool(chance) {
            world_setup::spawn_enemy_bullet(registry, &pos);
            fired += 1;
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn zero_chance_never_fires() {
        let mut registry = EntityRegistry::new();
        world_setup::spawn_enemy_grid(&mut registry);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(run(&mut registry, &mut rng, 0.0), 0);
        }
        assert_eq!(registry.count(EntityKind::EnemyBullet), 0);
    }

    #[test]
    fn certain_chance_fires_from_every_enemy() {
        let mut registry = EntityRegistry::new();
        world_setup::spawn_enemy_grid(&mut registry);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(run(&mut registry, &mut rng, 2.0), 40);
        assert_eq!(registry.count(EntityKind::EnemyBullet), 40);
    }

    #[test]
    fn same_seed_same_volley() {
        let volley = |seed| {
            let mut registry = EntityRegistry::new();
            world_setup::spawn_enemy_grid(&mut registry);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..50).map(|_| run(&mut registry, &mut rng, 0.05)).collect::<Vec<_>>()
        };
        assert_eq!(volley(9), volley(9));
    }
}
