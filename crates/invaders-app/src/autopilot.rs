//! Attract-mode input collaborator.
//!
//! Steers the player under the nearest enemy column and fires at a randomized
//! cadence. Seeded, so a given seed always plays the same game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use invaders_core::commands::PlayerCommand;
use invaders_core::constants::{ENEMY_SIZE, PLAYER_SIZE, PLAYER_STEP};
use invaders_core::enums::{ActionPhase, EntityKind, InputAction};
use invaders_core::state::GameStateSnapshot;

/// Ticks between shots, inclusive lower and exclusive upper bound.
const SHOT_COOLDOWN: std::ops::Range<u32> = 8..20;

pub struct Autopilot {
    rng: ChaCha8Rng,
    cooldown: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cooldown: 0,
        }
    }

    /// Input for the next tick, given the latest snapshot.
    pub fn commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if !snapshot.input_enabled {
            return commands;
        }
        let Some(player) = snapshot.player() else {
            return commands;
        };
        let player_center = player.position.x + PLAYER_SIZE / 2.0;

        let target = snapshot
            .entities_of(EntityKind::Enemy)
            .map(|enemy| enemy.position.x + ENEMY_SIZE / 2.0)
            .min_by(|a, b| (a - player_center).abs().total_cmp(&(b - player_center).abs()));
        let Some(target) = target else {
            return commands;
        };

        let dx = target - player_center;
        if dx < -PLAYER_STEP {
            commands.push(PlayerCommand::input(InputAction::MoveLeft, ActionPhase::Active));
        } else if dx > PLAYER_STEP {
            commands.push(PlayerCommand::input(InputAction::MoveRight, ActionPhase::Active));
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
        } else if dx.abs() < ENEMY_SIZE / 2.0 {
            commands.push(PlayerCommand::input(InputAction::Shoot, ActionPhase::Begin));
            self.cooldown = self.rng.gen_range(SHOT_COOLDOWN);
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use invaders_core::state::EntityView;
    use invaders_core::types::Position;

    use super::*;

    fn view(id: u64, kind: EntityKind, x: f64, y: f64) -> EntityView {
        EntityView {
            id,
            kind,
            position: Position::new(x, y),
            width: 40.0,
            height: 40.0,
        }
    }

    fn snapshot(entities: Vec<EntityView>, input_enabled: bool) -> GameStateSnapshot {
        GameStateSnapshot {
            input_enabled,
            entities,
            ..Default::default()
        }
    }

    #[test]
    fn idle_while_input_disabled() {
        let mut pilot = Autopilot::new(1);
        let snap = snapshot(
            vec![
                view(1, EntityKind::Player, 280.0, 760.0),
                view(2, EntityKind::Enemy, 0.0, 100.0),
            ],
            false,
        );
        assert!(pilot.commands(&snap).is_empty());
    }

    #[test]
    fn steers_toward_nearest_enemy() {
        let mut pilot = Autopilot::new(1);
        let snap = snapshot(
            vec![
                view(1, EntityKind::Player, 280.0, 760.0),
                view(2, EntityKind::Enemy, 0.0, 100.0),
                view(3, EntityKind::Enemy, 420.0, 100.0),
                view(4, EntityKind::Enemy, 360.0, 100.0),
            ],
            true,
        );
        let commands = pilot.commands(&snap);
        assert_eq!(
            commands[0],
            PlayerCommand::input(InputAction::MoveRight, ActionPhase::Active)
        );
    }

    #[test]
    fn fires_when_lined_up_then_waits() {
        let mut pilot = Autopilot::new(1);
        let snap = snapshot(
            vec![
                view(1, EntityKind::Player, 300.0, 760.0),
                view(2, EntityKind::Enemy, 300.0, 100.0),
            ],
            true,
        );
        let shoot = PlayerCommand::input(InputAction::Shoot, ActionPhase::Begin);
        assert_eq!(pilot.commands(&snap), vec![shoot.clone()]);
        assert!(pilot.commands(&snap).is_empty());

        let shots = (0..40)
            .filter(|_| pilot.commands(&snap).contains(&shoot))
            .count();
        assert!((2..=5).contains(&shots), "unexpected cadence: {shots}");
    }
}
