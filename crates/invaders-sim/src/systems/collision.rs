//! Collision resolver.
//!
//! Exactly two kind pairs have handlers: `(PlayerBullet, Enemy)` and
//! `(EnemyBullet, Player)`, in either order. Every other pair is an
//! `InvalidCollisionPair`. A pair naming an entity that was already removed
//! this tick is a `StaleEntityReference` and changes nothing.

use invaders_core::enums::EntityKind;
use invaders_core::errors::SimError;

use crate::registry::{EntityHandle, EntityRegistry};
use crate::session::SessionState;

/// What a handled collision did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The player lost a life; `lives_remaining` is the new count.
    LifeLost { lives_remaining: u32 },
    /// An enemy was destroyed. `advance` is set when the kill count landed
    /// on a level threshold.
    EnemyDestroyed { advance: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandledPair {
    BulletHitsEnemy,
    BulletHitsPlayer,
}

fn classify(first: EntityKind, second: EntityKind) -> Option<(HandledPair, bool)> {
    use EntityKind::*;
    match (first, second) {
        (PlayerBullet, Enemy) => Some((HandledPair::BulletHitsEnemy, false)),
        (Enemy, PlayerBullet) => Some((HandledPair::BulletHitsEnemy, true)),
        (EnemyBullet, Player) => Some((HandledPair::BulletHitsPlayer, false)),
        (Player, EnemyBullet) => Some((HandledPair::BulletHitsPlayer, true)),
        _ => None,
    }
}

/// Whether a handler exists for this pair of kinds (in either order).
pub fn handles(first: EntityKind, second: EntityKind) -> bool {
    classify(first, second).is_some()
}

/// Apply the rules for one collision-begin event.
///
/// The reported kinds must match the kinds the registry holds for the two
/// handles; the pair is classified from the registry.
pub fn resolve(
    registry: &mut EntityRegistry,
    session: &mut SessionState,
    first_kind: EntityKind,
    second_kind: EntityKind,
    first: EntityHandle,
    second: EntityHandle,
) -> Result<Resolution, SimError> {
    let reported = SimError::InvalidCollisionPair {
        first: first_kind,
        second: second_kind,
    };
    if classify(first_kind, second_kind).is_none() {
        return Err(reported);
    }

    let live_kind = |handle: EntityHandle| {
        registry
            .kind(handle)
            .ok_or(SimError::StaleEntityReference(handle.to_bits().get()))
    };
    let actual = (live_kind(first)?, live_kind(second)?);
    if actual != (first_kind, second_kind) {
        return Err(reported);
    }

    let (pair, swapped) = classify(actual.0, actual.1).ok_or(reported)?;
    let (bullet, target) = if swapped {
        (second, first)
    } else {
        (first, second)
    };

    match pair {
        HandledPair::BulletHitsPlayer => {
            registry.remove(bullet);
            let lives_remaining = session.lose_life();
            Ok(Resolution::LifeLost { lives_remaining })
        }
        HandledPair::BulletHitsEnemy => {
            registry.remove(bullet);
            registry.remove(target);
            let advance = session.record_kill();
            Ok(Resolution::EnemyDestroyed { advance })
        }
    }
}

#[cfg(test)]
mod tests {
    use invaders_core::types::Position;

    use super::*;

    #[test]
    fn player_bullet_destroys_enemy() {
        let mut registry = EntityRegistry::new();
        let mut session = SessionState::new();
        let bullet = registry.spawn(EntityKind::PlayerBullet, Position::new(0.0, 0.0));
        let enemy = registry.spawn(EntityKind::Enemy, Position::new(0.0, 0.0));

        let result = resolve(
            &mut registry,
            &mut session,
            EntityKind::Enemy,
            EntityKind::PlayerBullet,
            enemy,
            bullet,
        );
        assert_eq!(result, Ok(Resolution::EnemyDestroyed { advance: false }));
        assert!(registry.is_empty());
        assert_eq!(session.score, 200);
        assert_eq!(session.enemies_destroyed, 1);
    }

    #[test]
    fn enemy_bullet_costs_a_life_and_keeps_player() {
        let mut registry = EntityRegistry::new();
        let mut session = SessionState::new();
        let bullet = registry.spawn(EntityKind::EnemyBullet, Position::new(0.0, 0.0));
        let player = registry.spawn(EntityKind::Player, Position::new(0.0, 0.0));

        let result = resolve(
            &mut registry,
            &mut session,
            EntityKind::EnemyBullet,
            EntityKind::Player,
            bullet,
            player,
        );
        assert_eq!(result, Ok(Resolution::LifeLost { lives_remaining: 2 }));
        assert!(!registry.contains(bullet));
        assert!(registry.contains(player));
    }

    #[test]
    fn second_event_for_removed_bullet_is_stale() {
        let mut registry = EntityRegistry::new();
        let mut session = SessionState::new();
        let bullet = registry.spawn(EntityKind::PlayerBullet, Position::new(0.0, 0.0));
        let a = registry.spawn(EntityKind::Enemy, Position::new(0.0, 0.0));
        let b = registry.spawn(EntityKind::Enemy, Position::new(0.0, 0.0));

        assert!(resolve(
            &mut registry,
            &mut session,
            EntityKind::PlayerBullet,
            EntityKind::Enemy,
            bullet,
            a
        )
        .is_ok());
        let second = resolve(
            &mut registry,
            &mut session,
            EntityKind::PlayerBullet,
            EntityKind::Enemy,
            bullet,
            b,
        );
        assert!(matches!(second, Err(SimError::StaleEntityReference(_))));
        assert!(registry.contains(b));
        assert_eq!(session.enemies_destroyed, 1);
    }

    #[test]
    fn unhandled_pair_is_rejected() {
        let mut registry = EntityRegistry::new();
        let mut session = SessionState::new();
        let a = registry.spawn(EntityKind::Enemy, Position::new(0.0, 0.0));
        let b = registry.spawn(EntityKind::Player, Position::new(0.0, 0.0));

        let result = resolve(
            &mut registry,
            &mut session,
            EntityKind::Enemy,
            EntityKind::Player,
            a,
            b,
        );
        assert_eq!(
            result,
            Err(SimError::InvalidCollisionPair {
                first: EntityKind::Enemy,
                second: EntityKind::Player,
            })
        );
        assert_eq!(registry.len(), 2);
        assert_eq!(session, SessionState::new());
    }

    #[test]
    fn mislabeled_handles_are_rejected() {
        let mut registry = EntityRegistry::new();
        let mut session = SessionState::new();
        let bullet = registry.spawn(EntityKind::PlayerBullet, Position::new(0.0, 0.0));
        let player = registry.spawn(EntityKind::Player, Position::new(0.0, 0.0));

        // The player's handle reported as an enemy.
        let result = resolve(
            &mut registry,
            &mut session,
            EntityKind::PlayerBullet,
            EntityKind::Enemy,
            bullet,
            player,
        );
        assert_eq!(
            result,
            Err(SimError::InvalidCollisionPair {
                first: EntityKind::PlayerBullet,
                second: EntityKind::Enemy,
            })
        );
        assert!(registry.contains(player));
        assert!(registry.contains(bullet));
        assert_eq!(session, SessionState::new());
    }

    #[test]
    fn handled_pairs_are_symmetric() {
        assert!(handles(EntityKind::PlayerBullet, EntityKind::Enemy));
        assert!(handles(EntityKind::Enemy, EntityKind::PlayerBullet));
        assert!(handles(EntityKind::Player, EntityKind::EnemyBullet));
        assert!(!handles(EntityKind::PlayerBullet, EntityKind::Player));
        assert!(!handles(EntityKind::EnemyBullet, EntityKind::Enemy));
    }
}
