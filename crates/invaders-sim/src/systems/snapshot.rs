//! Snapshot system: builds a `GameStateSnapshot` from the registry and the
//! session. Read-only.

use invaders_core::components::Hitbox;
use invaders_core::enums::{Achievement, EntityKind, SessionPhase};
use invaders_core::events::{DialogRequest, GameEvent};
use invaders_core::state::{EntityView, GameStateSnapshot};
use invaders_core::types::{HighScoreRecord, Position, SimTime};

use crate::registry::EntityRegistry;
use crate::session::SessionState;

/// Everything outside the registry that goes into a snapshot.
pub struct SnapshotInputs<'a> {
    pub time: &'a SimTime,
    pub phase: SessionPhase,
    pub input_enabled: bool,
    pub session: &'a SessionState,
    pub high_score: &'a HighScoreRecord,
    pub achievements: &'a [Achievement],
    pub dialog: Option<DialogRequest>,
    pub events: Vec<GameEvent>,
}

pub fn build_snapshot(registry: &EntityRegistry, inputs: SnapshotInputs<'_>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *inputs.time,
        phase: inputs.phase,
        input_enabled: inputs.input_enabled,
        score: inputs.session.view(),
        high_score: inputs.high_score.clone(),
        achievements: inputs.achievements.to_vec(),
        entities: build_entities(registry),
        dialog: inputs.dialog,
        events: inputs.events,
    }
}

/// Entity views ordered by id so snapshots compare stably.
fn build_entities(registry: &EntityRegistry) -> Vec<EntityView> {
    let mut entities: Vec<EntityView> = registry
        .world()
        .query::<(&EntityKind, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (kind, pos, hitbox))| EntityView {
            id: entity.to_bits().get(),
            kind: *kind,
            position: *pos,
            width: hitbox.width,
            height: hitbox.height,
        })
        .collect();
    entities.sort_by_key(|e| e.id);
    entities
}
