//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{DialogRequest, GameEvent};
use crate::types::{HighScoreRecord, Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    /// False while a level banner is up.
    pub input_enabled: bool,
    pub score: ScoreView,
    pub high_score: HighScoreRecord,
    pub achievements: Vec<Achievement>,
    pub entities: Vec<EntityView>,
    pub dialog: Option<DialogRequest>,
    pub events: Vec<GameEvent>,
}

/// Session counters for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub enemies_destroyed: u32,
}

/// One live entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    /// Stable id (`hecs::Entity::to_bits`).
    pub id: u64,
    pub kind: EntityKind,
    pub position: Position,
    pub width: f64,
    pub height: f64,
}

impl GameStateSnapshot {
    /// Live entities of one kind.
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &EntityView> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    /// The player entity, if alive.
    pub fn player(&self) -> Option<&EntityView> {
        self.entities_of(EntityKind::Player).next()
    }

    pub fn has_event(&self, predicate: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }
}
