//! Player input: movement and shooting.

use invaders_core::constants::*;
use invaders_core::enums::{ActionPhase, InputAction};
use invaders_core::errors::SimError;
use invaders_core::types::PlayArea;

use crate::registry::{EntityHandle, EntityRegistry};
use crate::world_setup;

/// Apply one input action to the player. Callers gate on input being enabled.
pub fn apply(
    registry: &mut EntityRegistry,
    player: EntityHandle,
    area: &PlayArea,
    action: InputAction,
    phase: ActionPhase,
) -> Result<(), SimError> {
    match (action, phase) {
        (InputAction::MoveLeft, ActionPhase::Active) => {
            let pos = registry.position(player)?;
            if pos.x >= PLAYER_EDGE_MARGIN {
                registry.translate(player, -PLAYER_STEP, 0.0)?;
            }
        }
        (InputAction::MoveRight, ActionPhase::Active) => {
            let pos = registry.position(player)?;
            if pos.x <= area.width - PLAYER_SIZE - PLAYER_EDGE_MARGIN {
                registry.translate(player, PLAYER_STEP, 0.0)?;
            }
        }
        (InputAction::MoveRight, phase) => {
            tracing::debug!(?phase, "move right");
        }
        (InputAction::Shoot, ActionPhase::Begin) => {
            let pos = registry.position(player)?;
            world_setup::spawn_player_bullet(registry, &pos);
        }
        _ => {}
    }
    Ok(())
}
