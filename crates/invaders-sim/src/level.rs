//! Level director: banner, delayed wave spawn, and level advancement.
//!
//! `start_level` bumps the level, blocks input, puts up the banner and
//! schedules the wave for when the banner expires. The wave is a deferred
//! task, never a blocking wait.

use invaders_core::constants::LEVEL_BANNER_TICKS;
use invaders_core::enums::EntityKind;
use invaders_core::events::GameEvent;
use invaders_core::types::PlayArea;

use crate::registry::EntityRegistry;
use crate::session::SessionState;
use crate::timer::{Deferred, Scheduler};
use crate::world_setup;

#[derive(Debug, Clone, Default)]
pub struct LevelDirector {
    wave_active: bool,
    input_enabled: bool,
}

impl LevelDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wave_active(&self) -> bool {
        self.wave_active
    }

    /// Whether player input is processed.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Start the next level. Returns the new level number.
    pub fn start_level(
        &mut self,
        registry: &mut EntityRegistry,
        session: &mut SessionState,
        scheduler: &mut Scheduler,
        area: &PlayArea,
        now: u64,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        let level = session.next_level();
        self.wave_active = false;
        self.input_enabled = false;

        world_setup::spawn_level_markers(registry, area, now + LEVEL_BANNER_TICKS);
        scheduler.run_once_after(now, LEVEL_BANNER_TICKS, Deferred::SpawnWave { level });

        tracing::info!(level, "level started");
        events.push(GameEvent::LevelStarted { level });
        level
    }

    /// Deferred continuation of `start_level`. A task for any level other
    /// than the current one is ignored. Returns whether a wave spawned.
    pub fn spawn_wave(
        &mut self,
        registry: &mut EntityRegistry,
        session: &SessionState,
        level: u32,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if level != session.level || self.wave_active {
            tracing::debug!(level, current = session.level, "ignoring wave for another level");
            return false;
        }
        let enemies = world_setup::spawn_enemy_grid(registry);
        self.wave_active = true;
        self.input_enabled = true;

        tracing::info!(level, enemies, "wave spawned");
        events.push(GameEvent::WaveSpawned { level, enemies });
        true
    }

    /// Clear any remaining enemies and start the next level.
    pub fn advance(
        &mut self,
        registry: &mut EntityRegistry,
        session: &mut SessionState,
        scheduler: &mut Scheduler,
        area: &PlayArea,
        now: u64,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        let leftovers = registry.query(&[EntityKind::Enemy]);
        if !leftovers.is_empty() {
            tracing::debug!(count = leftovers.len(), "clearing leftover enemies");
        }
        for enemy in leftovers {
            registry.remove(enemy);
        }
        self.start_level(registry, session, scheduler, area, now, events)
    }

    /// Back to the state of a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
