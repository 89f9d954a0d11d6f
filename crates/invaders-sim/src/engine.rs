//! Simulation engine: the gameplay state machine.
//!
//! `SimulationEngine` owns the entity registry, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::commands::PlayerCommand;
use invaders_core::constants::ENEMY_FIRE_CHANCE;
use invaders_core::enums::{Achievement, EntityKind, SessionPhase};
use invaders_core::errors::SimError;
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::{HighScoreRecord, PlayArea, SimTime};

use crate::game_over::{FlowStep, GameOverFlow};
use crate::level::LevelDirector;
use crate::persistence::HighScoreGateway;
use crate::registry::{EntityHandle, EntityRegistry};
use crate::session::{Achievements, SessionState};
use crate::systems;
use crate::systems::collision::Resolution;
use crate::systems::physics::ContactTracker;
use crate::systems::snapshot::SnapshotInputs;
use crate::timer::{Deferred, Scheduler};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub play_area: PlayArea,
    /// Per-enemy, per-tick probability of firing. 0 disables enemy fire.
    pub enemy_fire_chance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            play_area: PlayArea::default(),
            enemy_fire_chance: ENEMY_FIRE_CHANCE,
        }
    }
}

/// The simulation engine. Owns the registry and all session state.
pub struct SimulationEngine {
    registry: EntityRegistry,
    time: SimTime,
    play_area: PlayArea,
    enemy_fire_chance: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    player: Option<EntityHandle>,
    session: SessionState,
    achievements: Achievements,
    flow: GameOverFlow,
    director: LevelDirector,
    scheduler: Scheduler,
    contacts: ContactTracker,
    /// Set by the resolver on a level threshold; consumed once per tick.
    pending_advance: bool,

    high_scores: HighScoreGateway,
    high_score: HighScoreRecord,
}

impl SimulationEngine {
    /// Create an engine, load the high score and start level 1.
    pub fn new(config: SimConfig, high_scores: HighScoreGateway) -> Self {
        let high_score = high_scores.load();
        let mut engine = Self {
            registry: EntityRegistry::new(),
            time: SimTime::default(),
            play_area: config.play_area,
            enemy_fire_chance: config.enemy_fire_chance,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: None,
            session: SessionState::new(),
            achievements: Achievements::default(),
            flow: GameOverFlow::new(),
            director: LevelDirector::new(),
            scheduler: Scheduler::new(),
            contacts: ContactTracker::new(),
            pending_advance: false,
            high_scores,
            high_score,
        };
        engine.start_session();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.flow.is_playing() {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Collision-begin callback from the physics collaborator.
    ///
    /// Ignored outside `Playing`. Stale handles and unhandled pairs are
    /// logged and otherwise change nothing. A level advance is deferred to
    /// the end of the current tick's collision phase.
    pub fn on_collision_begin(
        &mut self,
        first_kind: EntityKind,
        second_kind: EntityKind,
        first: EntityHandle,
        second: EntityHandle,
    ) {
        if !self.flow.is_playing() {
            tracing::debug!(?first_kind, ?second_kind, "collision outside play ignored");
            return;
        }

        let resolution = systems::collision::resolve(
            &mut self.registry,
            &mut self.session,
            first_kind,
            second_kind,
            first,
            second,
        );
        match resolution {
            Ok(Resolution::LifeLost { lives_remaining }) => {
                tracing::info!(lives_remaining, "player hit");
                self.events.push(GameEvent::LifeLost { lives_remaining });
                self.evaluate_achievements();
                if self.flow.life_lost(lives_remaining) == FlowStep::PromptContinue {
                    tracing::info!(score = self.session.score, "game over");
                    self.events.push(GameEvent::GameOver {
                        score: self.session.score,
                    });
                }
            }
            Ok(Resolution::EnemyDestroyed { advance }) => {
                self.events.push(GameEvent::EnemyDestroyed {
                    score: self.session.score,
                    enemies_destroyed: self.session.enemies_destroyed,
                });
                self.evaluate_achievements();
                if advance {
                    self.pending_advance = true;
                }
            }
            Err(e @ SimError::StaleEntityReference(_)) => {
                tracing::debug!(error = %e, "collision with removed entity ignored");
            }
            Err(e) => {
                tracing::warn!(error = %e, "unhandled collision pair");
            }
        }
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.flow.phase()
    }

    /// Whether the session reached its terminal phase.
    pub fn is_finished(&self) -> bool {
        self.flow.phase() == SessionPhase::SessionEnd
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn input_enabled(&self) -> bool {
        self.director.input_enabled()
    }

    pub fn high_score(&self) -> &HighScoreRecord {
        &self.high_score
    }

    pub fn achievements(&self) -> &[Achievement] {
        self.achievements.unlocked()
    }

    /// The player entity of the current session.
    pub fn player(&self) -> Option<EntityHandle> {
        self.player
    }

    /// Get a read-only reference to the entity registry.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable registry access for hosts that place entities themselves.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Mutable session access (for tests that need specific counters).
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Fresh registry, counters and level 1. Achievements and the loaded
    /// high score carry over.
    fn start_session(&mut self) {
        self.registry.clear();
        self.contacts.clear();
        self.session = SessionState::new();
        self.director.reset();
        self.pending_advance = false;
        self.player = Some(world_setup::spawn_player(&mut self.registry, &self.play_area));
        self.director.start_level(
            &mut self.registry,
            &mut self.session,
            &mut self.scheduler,
            &self.play_area,
            self.time.tick,
            &mut self.events,
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Input { action, phase } => {
                if !self.flow.is_playing() || !self.director.input_enabled() {
                    return;
                }
                let Some(player) = self.player else {
                    return;
                };
                if let Err(e) = systems::input::apply(
                    &mut self.registry,
                    player,
                    &self.play_area,
                    action,
                    phase,
                ) {
                    tracing::debug!(error = %e, ?action, "input ignored");
                }
            }
            PlayerCommand::AnswerContinue { yes } => {
                let step =
                    self.flow
                        .answer_continue(yes, self.session.score, self.high_score.score);
                self.apply_flow_step(step);
            }
            PlayerCommand::SubmitName { name } => {
                let step = self.flow.submit_name(&name);
                self.apply_flow_step(step);
            }
        }
    }

    fn apply_flow_step(&mut self, step: FlowStep) {
        match step {
            FlowStep::ResetSession => {
                tracing::info!("new game requested");
                self.scheduler.invalidate();
                self.start_session();
                self.flow.restarted();
                self.events.push(GameEvent::NewGameStarted);
            }
            FlowStep::PromptName => {
                tracing::info!(
                    score = self.session.score,
                    previous = self.high_score.score,
                    "new high score"
                );
            }
            FlowStep::SaveAndEnd { name } => {
                let record = HighScoreRecord::new(name, self.session.score);
                if self.high_scores.save(&record) {
                    self.events.push(GameEvent::HighScoreSaved {
                        name: record.name.clone(),
                        score: record.score,
                    });
                    self.high_score = record;
                }
                self.end_session();
            }
            FlowStep::End => self.end_session(),
            FlowStep::Ignored => {
                tracing::debug!(phase = ?self.flow.phase(), "dialog answer ignored");
            }
            FlowStep::Resume | FlowStep::PromptContinue => {}
        }
    }

    fn end_session(&mut self) {
        tracing::info!(score = self.session.score, "session ended");
        self.events.push(GameEvent::SessionEnded {
            score: self.session.score,
        });
    }

    fn evaluate_achievements(&mut self) {
        for achievement in self.achievements.evaluate(&self.session) {
            tracing::info!(achievement = achievement.title(), "achievement unlocked");
            self.events
                .push(GameEvent::AchievementUnlocked { achievement });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.tick;

        // 1. Deferred tasks (wave spawns)
        for task in self.scheduler.drain_due(now) {
            match task {
                Deferred::SpawnWave { level } => {
                    self.director.spawn_wave(
                        &mut self.registry,
                        &self.session,
                        level,
                        &mut self.events,
                    );
                }
            }
        }
        // 2. Physics integration
        systems::physics::integrate(&mut self.registry);
        // 3. Controls
        systems::controls::run(&mut self.registry);
        // 4. Enemy fire
        if self.director.wave_active() {
            systems::enemy_fire::run(&mut self.registry, &mut self.rng, self.enemy_fire_chance);
        }
        // 5. Collision detection and dispatch
        for contact in self.contacts.detect(&self.registry) {
            self.on_collision_begin(
                contact.first_kind,
                contact.second_kind,
                contact.first,
                contact.second,
            );
        }
        // 6. At most one level advance per tick
        if std::mem::take(&mut self.pending_advance) && self.flow.is_playing() {
            self.director.advance(
                &mut self.registry,
                &mut self.session,
                &mut self.scheduler,
                &self.play_area,
                now,
                &mut self.events,
            );
        }
        // 7. Cleanup (out of bounds, expired)
        systems::cleanup::run(&mut self.registry, &self.play_area, now, &mut self.despawn_buffer);
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.registry,
            SnapshotInputs {
                time: &self.time,
                phase: self.flow.phase(),
                input_enabled: self.director.input_enabled(),
                session: &self.session,
                high_score: &self.high_score,
                achievements: self.achievements.unlocked(),
                dialog: self.flow.pending_dialog(),
                events,
            },
        )
    }
}
