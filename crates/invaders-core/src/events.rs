//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A level banner went up.
    LevelStarted { level: u32 },
    /// The enemy grid for a level was spawned.
    WaveSpawned { level: u32, enemies: u32 },
    /// A player bullet destroyed an enemy.
    EnemyDestroyed { score: u32, enemies_destroyed: u32 },
    /// An enemy bullet hit the player.
    LifeLost { lives_remaining: u32 },
    AchievementUnlocked { achievement: Achievement },
    /// Lives exhausted; a continue prompt is pending.
    GameOver { score: u32 },
    /// Session reset after the player chose to continue.
    NewGameStarted,
    HighScoreSaved { name: String, score: u32 },
    /// Terminal event: the host should close.
    SessionEnded { score: u32 },
}

/// A modal request for the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogRequest {
    /// Yes/no question, answered with `PlayerCommand::AnswerContinue`.
    Confirm { prompt: String },
    /// Free text, answered with `PlayerCommand::SubmitName`.
    Text { prompt: String },
}
