#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::components::Control;
    use crate::constants::*;
    use crate::enums::*;
    use crate::errors::{PersistenceError, SimError};
    use crate::events::{DialogRequest, GameEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::{HighScoreRecord, PlayArea, Position, SimTime};

    #[test]
    fn test_default_high_score_record() {
        let record = HighScoreRecord::default();
        assert_eq!(record.name, "CPU");
        assert_eq!(record.score, 0);
    }

    #[test]
    fn test_high_score_record_json_shape() {
        let record = HighScoreRecord::new("ACE", 12_000);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"ACE","score":12000}"#);
    }

    #[test]
    fn test_play_area_bounds() {
        let area = PlayArea::default();
        assert_eq!(area.width, 600.0);
        assert_eq!(area.height, 800.0);

        assert!(area.is_outside(&Position::new(10.0, -1.0)));
        assert!(area.is_outside(&Position::new(-0.5, 10.0)));
        assert!(area.is_outside(&Position::new(601.0, 10.0)));
        assert!(area.is_outside(&Position::new(10.0, 800.5)));
        assert!(!area.is_outside(&Position::new(0.0, 0.0)));
        assert!(!area.is_outside(&Position::new(600.0, 800.0)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_banner_ticks_match_seconds() {
        assert_eq!(LEVEL_BANNER_TICKS, 180);
    }

    #[test]
    fn test_kind_flags() {
        assert!(EntityKind::Player.is_collidable());
        assert!(EntityKind::EnemyBullet.is_collidable());
        assert!(!EntityKind::LevelMarker.is_collidable());
    }

    #[test]
    fn test_projectile_direction_normalized() {
        let control = Control::projectile(DVec2::new(0.0, -3.0), PLAYER_BULLET_SPEED);
        match control {
            Control::Projectile { direction, speed } => {
                assert_eq!(direction, DVec2::new(0.0, -1.0));
                assert_eq!(speed, 10.0);
            }
            Control::Enemy(_) => panic!("expected projectile control"),
        }
    }

    /// Commands travel as tagged JSON between the host and the game loop.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::input(InputAction::Shoot, ActionPhase::Begin),
            PlayerCommand::AnswerContinue { yes: false },
            PlayerCommand::SubmitName {
                name: "Neo".into(),
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }

        let json = serde_json::to_string(&PlayerCommand::AnswerContinue { yes: true }).unwrap();
        assert!(json.contains(r#""type":"AnswerContinue""#));
    }

    #[test]
    fn test_snapshot_helpers() {
        let snapshot = GameStateSnapshot {
            events: vec![
                GameEvent::LevelStarted { level: 1 },
                GameEvent::AchievementUnlocked {
                    achievement: Achievement::Hitman,
                },
            ],
            dialog: Some(DialogRequest::Confirm {
                prompt: CONTINUE_PROMPT.into(),
            }),
            ..Default::default()
        };
        assert!(snapshot.has_event(|e| matches!(e, GameEvent::LevelStarted { level: 1 })));
        assert!(!snapshot.has_event(|e| matches!(e, GameEvent::NewGameStarted)));
        assert!(snapshot.player().is_none());
        assert_eq!(snapshot.phase, SessionPhase::Playing);
    }

    #[test]
    fn test_achievement_text() {
        assert_eq!(Achievement::Hitman.title(), "Hitman");
        assert_eq!(Achievement::MasterScorer.description(), "Score 10000+ points");
        assert_eq!(Achievement::ALL.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = SimError::InvalidCollisionPair {
            first: EntityKind::Enemy,
            second: EntityKind::Player,
        };
        assert_eq!(err.to_string(), "no collision handler for Enemy / Player");
        assert_eq!(
            PersistenceError::MissingSaveData.to_string(),
            "no saved high score"
        );
    }
}
