//! Entity spawn factories.
//!
//! Creates the player, enemies, projectiles and level markers with their
//! controls, velocities and expiries attached.

use glam::DVec2;

use invaders_core::components::{Control, Expiry};
use invaders_core::constants::*;
use invaders_core::enums::EntityKind;
use invaders_core::types::{PlayArea, Position, Velocity};

use crate::registry::{EntityHandle, EntityRegistry};

/// Spawn the player centered at the bottom of the play area.
pub fn spawn_player(registry: &mut EntityRegistry, area: &PlayArea) -> EntityHandle {
    registry.spawn(
        EntityKind::Player,
        Position::new(area.width / 2.0 - PLAYER_SIZE / 2.0, area.height - PLAYER_SIZE),
    )
}

/// Spawn one enemy with its descent/patrol control.
pub fn spawn_enemy(registry: &mut EntityRegistry, x: f64, y: f64) -> EntityHandle {
    registry.spawn_with(
        EntityKind::Enemy,
        Position::new(x, y),
        (Control::enemy(x),),
    )
}

/// Spawn the full wave grid. Returns the number of enemies spawned.
pub fn spawn_enemy_grid(registry: &mut EntityRegistry) -> u32 {
    let pitch = ENEMY_SIZE + ENEMY_SPACING;
    for row in 0..WAVE_ROWS {
        for col in 0..WAVE_COLUMNS {
            spawn_enemy(
                registry,
                col as f64 * pitch,
                WAVE_TOP_Y + row as f64 * pitch,
            );
        }
    }
    WAVE_ROWS * WAVE_COLUMNS
}

/// Spawn a player bullet leaving the top of the player ship, flying up.
pub fn spawn_player_bullet(registry: &mut EntityRegistry, player_pos: &Position) -> EntityHandle {
    let center_x = player_pos.x + PLAYER_SIZE / 2.0;
    let center_y = player_pos.y + PLAYER_SIZE / 2.0;
    registry.spawn_with(
        EntityKind::PlayerBullet,
        Position::new(center_x - PLAYER_BULLET_OFFSET_X, center_y - PLAYER_SIZE / 2.0),
        (Control::projectile(DVec2::new(0.0, -1.0), PLAYER_BULLET_SPEED),),
    )
}

/// Spawn an enemy bullet from the bottom-center of an enemy, flying down.
pub fn spawn_enemy_bullet(registry: &mut EntityRegistry, enemy_pos: &Position) -> EntityHandle {
    registry.spawn_with(
        EntityKind::EnemyBullet,
        Position::new(
            enemy_pos.x + ENEMY_SIZE / 2.0 - BULLET_WIDTH / 2.0,
            enemy_pos.y + ENEMY_SIZE,
        ),
        (Control::projectile(DVec2::new(0.0, 1.0), ENEMY_BULLET_SPEED),),
    )
}

/// Spawn the level banner and its invisible ground marker. Both expire at
/// `expires_at_tick`; the banner rises off the top of the screen by then.
pub fn spawn_level_markers(
    registry: &mut EntityRegistry,
    area: &PlayArea,
    expires_at_tick: u64,
) -> (EntityHandle, EntityHandle) {
    let start_y = area.height / 2.0;
    let expiry = Expiry {
        at_tick: expires_at_tick,
    };
    let rise_speed = (start_y + LEVEL_BANNER_HEIGHT) / LEVEL_BANNER_SECS as f64;
    let banner = registry.spawn_with(
        EntityKind::LevelMarker,
        Position::new(area.width / 2.0 - LEVEL_BANNER_WIDTH / 2.0, start_y),
        (Velocity::new(0.0, -rise_speed), expiry),
    );
    let ground = registry.spawn_with(
        EntityKind::LevelMarker,
        Position::new(0.0, start_y),
        (expiry,),
    );

    (banner, ground)
}
