//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Type tag carried by every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
    /// Transient level banner and its invisible ground marker.
    LevelMarker,
}

impl EntityKind {
    /// Whether entities of this kind take part in collision detection.
    pub fn is_collidable(self) -> bool {
        !matches!(self, EntityKind::LevelMarker)
    }
}

/// Session phase. Only `Playing` advances the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Playing,
    /// Transient: a life was just lost.
    LifeLost,
    /// Lives exhausted, waiting for the continue answer.
    GameOverPrompt,
    /// Transient: the player chose to continue, session is being reset.
    NewGameRequested,
    /// Transient: comparing the session score against the high score.
    ScoreEvaluation,
    /// Waiting for the player's name for the new high score.
    NamePrompt,
    /// Terminal. The host should close.
    SessionEnd,
}

/// Named input actions delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Shoot,
}

/// Phase of an input action: pressed, held, released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionPhase {
    Begin,
    Active,
    End,
}

/// Achievements latched by the score tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Destroy 5 enemies.
    Hitman,
    /// Score 10000+ points.
    MasterScorer,
}

impl Achievement {
    pub const ALL: [Achievement; 2] = [Achievement::Hitman, Achievement::MasterScorer];

    pub fn title(self) -> &'static str {
        match self {
            Achievement::Hitman => "Hitman",
            Achievement::MasterScorer => "Master Scorer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::Hitman => "Destroy 5 enemies",
            Achievement::MasterScorer => "Score 10000+ points",
        }
    }
}
