//! Game loop thread: runs the simulation engine at 60Hz, answers its prompts
//! and feeds it autopilot input.
//!
//! The engine is moved into this thread. Commands arrive via `mpsc` channel.
//! The latest snapshot is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use invaders_core::commands::PlayerCommand;
use invaders_core::constants::TICK_RATE;
use invaders_core::enums::SessionPhase;
use invaders_core::events::{DialogRequest, GameEvent};
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::HighScoreRecord;
use invaders_sim::SimulationEngine;

use crate::autopilot::Autopilot;
use crate::dialog::Dialog;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Sleep between ticks to hold the nominal tick rate.
    pub realtime: bool,
    pub max_ticks: Option<u64>,
}

/// How the loop ended.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub phase: SessionPhase,
    pub score: u32,
    pub level: u32,
    pub high_score: HighScoreRecord,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the loop summary.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    dialog: Box<dyn Dialog>,
    autopilot: Autopilot,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, dialog, autopilot, options, cmd_rx, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the session ends, the tick limit is hit, a
/// Shutdown command arrives or the channel disconnects.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    mut dialog: Box<dyn Dialog>,
    mut autopilot: Autopilot,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;

    'outer: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    tracing::info!("shutdown requested");
                    break 'outer;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'outer,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        ticks += 1;
        report_events(&snapshot.events);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        if engine.is_finished() {
            break;
        }

        // 4. Answer a pending prompt, otherwise let the autopilot play
        match &snapshot.dialog {
            Some(request) => engine.queue_command(answer(dialog.as_mut(), request)),
            None => engine.queue_commands(autopilot.commands(&snapshot)),
        }

        if options.max_ticks.is_some_and(|max| ticks >= max) {
            tracing::info!(ticks, "tick limit reached");
            break;
        }

        // 5. Sleep until next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset instead of catching up
                next_tick_time = now;
            }
        }
    }

    LoopSummary {
        ticks,
        phase: engine.phase(),
        score: engine.session().score,
        level: engine.session().level,
        high_score: engine.high_score().clone(),
    }
}

fn answer(dialog: &mut dyn Dialog, request: &DialogRequest) -> PlayerCommand {
    match request {
        DialogRequest::Confirm { prompt } => PlayerCommand::AnswerContinue {
            yes: dialog.confirm(prompt),
        },
        DialogRequest::Text { prompt } => PlayerCommand::SubmitName {
            name: dialog.prompt_text(prompt),
        },
    }
}

fn report_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::EnemyDestroyed { score, .. } => tracing::debug!(score, "enemy destroyed"),
            GameEvent::AchievementUnlocked { achievement } => tracing::info!(
                title = achievement.title(),
                description = achievement.description(),
                "achievement"
            ),
            GameEvent::GameOver { score } => tracing::info!(score, "game over"),
            other => tracing::debug!(event = ?other, "event"),
        }
    }
}
